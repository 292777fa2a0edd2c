use serde::{Deserialize, Serialize};

use crate::*;

/// Side length of the square grid.
pub type Side = u8;

/// Row-major index of a grid cell, `0..side * side`.
pub type CellIndex = u16;

pub const DEFAULT_SIDE: Side = 3;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSize {
    side: Side,
}

impl GridSize {
    /// A grid of side 1 has no legal moves, so the smallest accepted side is 2.
    pub fn new(side: Side) -> Result<Self> {
        if side < 2 {
            return Err(AnimatorError::InvalidSize { side });
        }
        Ok(Self { side })
    }

    pub const fn side(self) -> Side {
        self.side
    }

    pub const fn cell_count(self) -> CellIndex {
        let side = self.side as CellIndex;
        side * side
    }

    /// The cell that starts out empty, bottom-right.
    pub const fn last_cell(self) -> CellIndex {
        self.cell_count() - 1
    }

    pub const fn contains(self, index: CellIndex) -> bool {
        index < self.cell_count()
    }

    /// Splits a row-major index into `(row, col)`.
    pub const fn row_col(self, index: CellIndex) -> (CellIndex, CellIndex) {
        let side = self.side as CellIndex;
        (index / side, index % side)
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self { side: DEFAULT_SIDE }
    }
}

/// Side of the empty cell a candidate tile is taken from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Self::Left, Self::Right, Self::Up, Self::Down];

    pub const fn opposite(self) -> Self {
        use Direction::*;
        match self {
            Left => Right,
            Right => Left,
            Up => Down,
            Down => Up,
        }
    }

    /// Animation class for the tile's motion. A tile taken from the left neighbor slides
    /// right, and so on.
    pub const fn slide_class(self) -> &'static str {
        use Direction::*;
        match self.opposite() {
            Left => "slide-left",
            Right => "slide-right",
            Up => "slide-up",
            Down => "slide-down",
        }
    }

    /// Every class [`Direction::slide_class`] can produce.
    pub const fn all_slide_classes() -> [&'static str; 4] {
        [
            Self::Left.slide_class(),
            Self::Right.slide_class(),
            Self::Up.slide_class(),
            Self::Down.slide_class(),
        ]
    }
}
