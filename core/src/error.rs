use thiserror::Error;

use crate::{CellIndex, Side};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum AnimatorError {
    #[error("Grid side must be at least 2, got {side}")]
    InvalidSize { side: Side },
    #[error("Expected {expected} tile containers, found {found}")]
    MissingContainers { expected: CellIndex, found: usize },
    #[error("No legal move from cell {current}")]
    NoLegalMove { current: CellIndex },
    #[error("Container {index} holds no tile")]
    EmptyContainer { index: CellIndex },
    #[error("Container {index} already holds a tile")]
    OccupiedContainer { index: CellIndex },
    #[error("Failed to move tile out of container {index}")]
    DomMutation { index: CellIndex },
    #[error("Animator halted after an earlier failure, no new moves are accepted")]
    Halted,
}

pub type Result<T> = core::result::Result<T, AnimatorError>;
