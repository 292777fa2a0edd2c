use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// A neighbouring cell that may supply the next tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub index: CellIndex,
    pub direction: Direction,
}

/// At most one candidate per direction.
pub type Candidates = SmallVec<[Candidate; 4]>;

/// Steps from `index` towards `direction`, returning a value only when it remains in bounds.
fn apply_direction(size: GridSize, index: CellIndex, direction: Direction) -> Option<CellIndex> {
    let side = CellIndex::from(size.side());
    let (row, col) = size.row_col(index);

    match direction {
        Direction::Left if col > 0 => Some(index - 1),
        Direction::Right if col + 1 < side => Some(index + 1),
        Direction::Up if row > 0 => Some(index - side),
        Direction::Down if row + 1 < side => Some(index + side),
        _ => None,
    }
}

/// Orthogonal neighbours of a cell, in the order left, right, up, down.
#[derive(Debug)]
pub struct NeighborIter {
    size: GridSize,
    center: CellIndex,
    index: u8,
}

impl NeighborIter {
    pub fn new(size: GridSize, center: CellIndex) -> Self {
        Self {
            size,
            center,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Candidate;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let direction = *Direction::ALL.get(usize::from(self.index))?;
            self.index += 1;

            if let Some(index) = apply_direction(self.size, self.center, direction) {
                return Some(Candidate { index, direction });
            }
        }
    }
}

/// Legal moves from `current`, skipping the cell that was empty right before so a tile never
/// slides straight back.
pub fn candidates(size: GridSize, current: CellIndex, last: Option<CellIndex>) -> Candidates {
    NeighborIter::new(size, current)
        .filter(|candidate| Some(candidate.index) != last)
        .collect()
}
