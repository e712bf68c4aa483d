//! Fight! A fixed-rate sprite animation with music, sound effects and a live
//! FPS counter.

mod app;
mod assets;
mod clips;
mod config;
mod frame_loop;
mod keymap;
mod teardown;

use kumite_engine::logging::{init_logging, LoggingConfig};
use kumite_engine::window::Runtime;

use crate::app::Game;
use crate::config::GameConfig;

fn main() {
    init_logging(LoggingConfig::default());

    let config = GameConfig::default();
    let (runtime, gpu) = (config.runtime(), config.gpu());

    // Failures are reported, never turned into an exit code.
    if let Err(e) = Runtime::run(runtime, gpu, Game::new(config)) {
        log::error!("kumite runtime error: {e:#}");
    }
}
