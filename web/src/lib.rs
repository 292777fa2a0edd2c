use std::cell::RefCell;

use anyhow::Context;
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use tilecycle_core::{
    Animator, AnimatorConfig, DEFAULT_BASE_DELAY_MS, DEFAULT_JITTER_MS, DEFAULT_SIDE, DelayRange,
    SeededRandom, Side,
};
use wasm_bindgen::prelude::*;

pub use dom::*;
pub use runner::*;

mod dom;
mod runner;

pub type PageLoop = SlideLoop<DomBoard, SeededRandom>;

thread_local! {
    static ACTIVE: RefCell<Option<PageLoop>> = const { RefCell::new(None) };
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// What log level to use
    #[command(flatten)]
    pub verbose: Verbosity<WarnLevel>,

    /// Side length of the tile grid
    #[arg(long, default_value_t = DEFAULT_SIDE)]
    pub size: Side,

    /// Shortest pause between two moves, in milliseconds
    #[arg(long, default_value_t = DEFAULT_BASE_DELAY_MS)]
    pub delay_ms: u32,

    /// Random extra pause added on top of the shortest one, in milliseconds
    #[arg(long, default_value_t = DEFAULT_JITTER_MS)]
    pub jitter_ms: u32,
}

impl Args {
    /// Reads arguments from a URL hash such as `#--size=4&-vv`.
    pub fn from_hash(hash: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(hash.split(['#', '&']))
    }

    pub fn animator_config(&self) -> tilecycle_core::Result<AnimatorConfig> {
        AnimatorConfig::new(self.size, DelayRange::new(self.delay_ms, self.jitter_ms))
    }
}

/// Seed for the move picker, built from two `Math.random` draws.
fn page_seed() -> u64 {
    use js_sys::Math::random;
    let half = || (random() * f64::from(u32::MAX)) as u64;
    (half() << 32) ^ half()
}

fn start(args: &Args) -> anyhow::Result<PageLoop> {
    let config = args.animator_config()?;
    let board = DomBoard::from_document()?;
    let animator = Animator::new(config, board, SeededRandom::new(page_seed()))
        .context("could not bind the tile containers")?;
    Ok(SlideLoop::start(animator))
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::window;

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window().location().hash().unwrap_or_default();
    let (args, parse_error) = match Args::from_hash(&location_hash) {
        Ok(args) => (args, None),
        Err(err) => (Args::parse_from([""]), Some(err)),
    };
    if let Some(log_level) = args.verbose.log_level() {
        if let Err(err) = console_log::init_with_level(log_level) {
            web_sys::console::error_1(&format!("Error initializing logger: {err}").into());
        }
    }
    if let Some(err) = parse_error {
        log::warn!("Ignoring URL hash arguments: {}", err);
    }
    log::debug!("args: {:?}", args);

    match start(&args) {
        Ok(slide_loop) => {
            log::debug!("Slide animation started");
            ACTIVE.with(|slot| *slot.borrow_mut() = Some(slide_loop));
        }
        Err(err) => log::error!("Slide animation not started: {:#}", err),
    }
}

/// Stops the page animation for good.
#[wasm_bindgen]
pub fn stop_animation() {
    if let Some(slide_loop) = ACTIVE.with(|slot| slot.borrow_mut().take()) {
        slide_loop.stop();
    }
}
