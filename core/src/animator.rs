use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimatorConfig {
    pub size: GridSize,
    pub delay: DelayRange,
}

impl AnimatorConfig {
    pub fn new(side: Side, delay: DelayRange) -> Result<Self> {
        Ok(Self {
            size: GridSize::new(side)?,
            delay,
        })
    }
}

/// Where the hole is now and where it was one move ago.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyCell {
    pub current: CellIndex,
    pub last: Option<CellIndex>,
}

impl EmptyCell {
    pub const fn initial(size: GridSize) -> Self {
        Self {
            current: size.last_cell(),
            last: None,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimatorPhase {
    Idle,
    Moving,
    Halted,
}

impl AnimatorPhase {
    pub const fn is_halted(self) -> bool {
        matches!(self, Self::Halted)
    }
}

impl Default for AnimatorPhase {
    fn default() -> Self {
        Self::Idle
    }
}

/// One executed move: the tile in `from` slid into `to`, and `from` is now empty.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub from: CellIndex,
    pub to: CellIndex,
    pub direction: Direction,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tick {
    pub record: MoveRecord,
    pub delay_ms: u32,
}

/// Randomly slides tiles around a single empty cell, never undoing the previous move.
#[derive(Debug)]
pub struct Animator<B, R> {
    config: AnimatorConfig,
    board: B,
    random: R,
    empty: EmptyCell,
    phase: AnimatorPhase,
    move_count: u32,
}

impl<B: TileBoard, R: RandomSource> Animator<B, R> {
    pub fn new(config: AnimatorConfig, board: B, random: R) -> Result<Self> {
        let size = config.size;
        let expected = size.cell_count();
        let found = board.container_count();

        if found < usize::from(expected) {
            return Err(AnimatorError::MissingContainers { expected, found });
        }
        if found > usize::from(expected) {
            log::warn!(
                "Board has {} containers, only the first {} are animated",
                found,
                expected
            );
        }
        if board.is_empty(size.last_cell()) == Some(false) {
            return Err(AnimatorError::OccupiedContainer {
                index: size.last_cell(),
            });
        }

        log::debug!("Animator ready: {:?}", config);
        Ok(Self {
            config,
            board,
            random,
            empty: EmptyCell::initial(size),
            phase: Default::default(),
            move_count: 0,
        })
    }

    pub fn config(&self) -> AnimatorConfig {
        self.config
    }

    pub fn empty_cell(&self) -> EmptyCell {
        self.empty
    }

    pub fn phase(&self) -> AnimatorPhase {
        self.phase
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn board(&self) -> &B {
        &self.board
    }

    pub fn into_board(self) -> B {
        self.board
    }

    /// Legal moves from the current empty cell.
    pub fn candidates(&self) -> Candidates {
        candidates(self.config.size, self.empty.current, self.empty.last)
    }

    /// Slides one tile into the empty cell.
    ///
    /// Any failure halts the animator for good: later calls return [`AnimatorError::Halted`]
    /// without touching the board.
    pub fn step(&mut self) -> Result<MoveRecord> {
        if self.phase.is_halted() {
            return Err(AnimatorError::Halted);
        }

        self.phase = AnimatorPhase::Moving;
        match self.try_step() {
            Ok(record) => {
                self.phase = AnimatorPhase::Idle;
                self.move_count = self.move_count.saturating_add(1);
                Ok(record)
            }
            Err(err) => {
                log::error!("Animation halted after {} moves: {}", self.move_count, err);
                self.phase = AnimatorPhase::Halted;
                Err(err)
            }
        }
    }

    /// [`Animator::step`] followed by the delay until the next one.
    pub fn tick(&mut self) -> Result<Tick> {
        let record = self.step()?;
        let delay_ms = self.config.delay.sample(&mut self.random);
        log::trace!("next move in {}ms", delay_ms);
        Ok(Tick { record, delay_ms })
    }

    fn try_step(&mut self) -> Result<MoveRecord> {
        let EmptyCell { current, .. } = self.empty;
        let found = self.candidates();
        if found.is_empty() {
            return Err(AnimatorError::NoLegalMove { current });
        }

        let choice = found[pick_index(found.len(), self.random.next_unit())];
        self.board.slide(choice.index, current, choice.direction)?;
        self.empty = EmptyCell {
            current: choice.index,
            last: Some(current),
        };

        log::trace!(
            "tile {} -> {} ({})",
            choice.index,
            current,
            choice.direction.slide_class()
        );
        Ok(MoveRecord {
            from: choice.index,
            to: current,
            direction: choice.direction,
        })
    }
}
