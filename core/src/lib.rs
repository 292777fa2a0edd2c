#![no_std]

extern crate alloc;

pub use animator::*;
pub use board::*;
pub use error::*;
pub use grid::*;
pub use random::*;
pub use schedule::*;
pub use types::*;

mod animator;
mod board;
mod error;
mod grid;
mod random;
mod schedule;
mod types;
