use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// The containers the animator moves tiles between.
pub trait TileBoard {
    /// Number of containers, in row-major order.
    fn container_count(&self) -> usize;

    /// Whether the container at `index` holds no tile, `None` when the board can't tell.
    fn is_empty(&self, index: CellIndex) -> Option<bool>;

    /// Takes the tile out of `from`, replaces its direction tag with `direction` and puts it
    /// into `to`.
    fn slide(&mut self, from: CellIndex, to: CellIndex, direction: Direction) -> Result<()>;
}

impl<B: TileBoard + ?Sized> TileBoard for &mut B {
    fn container_count(&self) -> usize {
        (**self).container_count()
    }

    fn is_empty(&self, index: CellIndex) -> Option<bool> {
        (**self).is_empty(index)
    }

    fn slide(&mut self, from: CellIndex, to: CellIndex, direction: Direction) -> Result<()> {
        (**self).slide(from, to, direction)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub id: CellIndex,
    pub direction: Option<Direction>,
}

/// Board kept in memory, one optional numbered tile per container.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MemoryBoard {
    containers: Vec<Option<Tile>>,
}

impl MemoryBoard {
    /// Fills every container but the bottom-right one of a `size` grid.
    pub fn new(size: GridSize) -> Self {
        Self::with_empty(usize::from(size.cell_count()), size.last_cell())
    }

    /// `count` containers, all holding a tile except `empty`.
    pub fn with_empty(count: usize, empty: CellIndex) -> Self {
        let containers = (0..count)
            .map(|index| {
                let id = index as CellIndex;
                (id != empty).then_some(Tile {
                    id,
                    direction: None,
                })
            })
            .collect();
        Self { containers }
    }

    pub fn tile_at(&self, index: CellIndex) -> Option<Tile> {
        self.containers.get(usize::from(index)).copied().flatten()
    }

    pub fn tiles(&self) -> &[Option<Tile>] {
        &self.containers
    }

    pub fn empty_cells(&self) -> impl Iterator<Item = CellIndex> + '_ {
        self.containers
            .iter()
            .enumerate()
            .filter(|(_, tile)| tile.is_none())
            .map(|(index, _)| index as CellIndex)
    }

    fn slot(&mut self, index: CellIndex) -> Result<&mut Option<Tile>> {
        let found = self.containers.len();
        self.containers
            .get_mut(usize::from(index))
            .ok_or(AnimatorError::MissingContainers {
                expected: index.saturating_add(1),
                found,
            })
    }
}

impl TileBoard for MemoryBoard {
    fn container_count(&self) -> usize {
        self.containers.len()
    }

    fn is_empty(&self, index: CellIndex) -> Option<bool> {
        self.containers
            .get(usize::from(index))
            .map(|tile| tile.is_none())
    }

    fn slide(&mut self, from: CellIndex, to: CellIndex, direction: Direction) -> Result<()> {
        if self.slot(to)?.is_some() {
            return Err(AnimatorError::OccupiedContainer { index: to });
        }
        let mut tile = self
            .slot(from)?
            .take()
            .ok_or(AnimatorError::EmptyContainer { index: from })?;
        tile.direction = Some(direction);
        *self.slot(to)? = Some(tile);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_leaves_bottom_right_empty() {
        let board = MemoryBoard::new(GridSize::default());

        assert_eq!(board.container_count(), 9);
        assert_eq!(board.empty_cells().collect::<Vec<_>>(), [8]);
        assert_eq!(board.is_empty(8), Some(true));
        assert_eq!(board.is_empty(0), Some(false));
        assert_eq!(board.is_empty(9), None);
    }

    #[test]
    fn slide_moves_tile_and_replaces_tag() {
        let mut board = MemoryBoard::new(GridSize::default());

        board.slide(7, 8, Direction::Left).unwrap();
        board.slide(8, 7, Direction::Right).unwrap();

        let tile = board.tile_at(7).unwrap();
        assert_eq!(tile.id, 7);
        assert_eq!(tile.direction, Some(Direction::Right));
        assert_eq!(board.tile_at(8), None);
    }

    #[test]
    fn slide_rejects_occupied_target() {
        let mut board = MemoryBoard::new(GridSize::default());

        assert_eq!(
            board.slide(8, 7, Direction::Right),
            Err(AnimatorError::OccupiedContainer { index: 7 })
        );
        assert_eq!(board, MemoryBoard::new(GridSize::default()));
    }

    #[test]
    fn slide_out_of_empty_container_fails() {
        let mut board = MemoryBoard::with_empty(4, 3);
        board.containers[0] = None;

        assert_eq!(
            board.slide(0, 3, Direction::Left),
            Err(AnimatorError::EmptyContainer { index: 0 })
        );
    }

    #[test]
    fn slide_past_last_container_fails() {
        let mut board = MemoryBoard::with_empty(4, 3);

        assert_eq!(
            board.slide(4, 3, Direction::Down),
            Err(AnimatorError::MissingContainers {
                expected: 5,
                found: 4
            })
        );
    }
}
