use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo::timers::callback::Timeout;
use tilecycle_core::{Animator, AnimatorPhase, EmptyCell, RandomSource, TileBoard};

struct LoopState<B, R> {
    animator: Animator<B, R>,
    timer: Option<Timeout>,
    running: bool,
}

/// Handle to a running animation. Every tick re-arms a single [`Timeout`], so at most one move
/// is ever pending; [`SlideLoop::stop`] or dropping the handle cancels it.
pub struct SlideLoop<B, R> {
    state: Rc<RefCell<LoopState<B, R>>>,
}

impl<B, R> SlideLoop<B, R>
where
    B: TileBoard + 'static,
    R: RandomSource + 'static,
{
    /// Runs the first move right away and schedules the rest.
    pub fn start(animator: Animator<B, R>) -> Self {
        let state = Rc::new(RefCell::new(LoopState {
            animator,
            timer: None,
            running: true,
        }));
        Self::run_tick(&state);
        Self { state }
    }

    fn run_tick(state: &Rc<RefCell<LoopState<B, R>>>) {
        let mut guard = state.borrow_mut();
        if !guard.running {
            return;
        }

        match guard.animator.tick() {
            Ok(tick) => {
                let weak = Rc::downgrade(state);
                guard.timer = Some(Timeout::new(tick.delay_ms, move || Self::on_timeout(&weak)));
            }
            Err(err) => {
                log::error!("Slide animation stopped: {}", err);
                guard.running = false;
                guard.timer = None;
            }
        }
    }

    fn on_timeout(state: &Weak<RefCell<LoopState<B, R>>>) {
        if let Some(state) = state.upgrade() {
            Self::run_tick(&state);
        }
    }

    /// Cancels the pending move. The loop can't be resumed.
    pub fn stop(&self) {
        let mut guard = self.state.borrow_mut();
        if guard.running {
            log::debug!("Slide animation stopped after {} moves", guard.animator.move_count());
        }
        guard.running = false;
        guard.timer = None;
    }

    pub fn is_running(&self) -> bool {
        self.state.borrow().running
    }

    pub fn move_count(&self) -> u32 {
        self.state.borrow().animator.move_count()
    }

    pub fn empty_cell(&self) -> EmptyCell {
        self.state.borrow().animator.empty_cell()
    }

    pub fn phase(&self) -> AnimatorPhase {
        self.state.borrow().animator.phase()
    }
}
