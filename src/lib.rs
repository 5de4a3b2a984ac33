// RustPixel - Worm
// copyright zipxing@hotmail.com 2022～2025

//! The Worm is a single player snake style arcade game built on the RustPixel layout:
//! a Model holding data and rules, a Render drawing the model every frame, and a Game
//! driving both from a fixed rate main loop.
//!
//! Text Mode: built with crossterm, runs in the terminal. Every grid cell of the 40x30 play
//! field is drawn as two terminal columns, so the field keeps its square look.
//!
//! The worm itself moves on a slower fixed tick (150ms by default) than the render frame,
//! see `model::WormModel` and `game::Ticker`.
//!
//! Modules config, log, event, util, context, game, highscore, input, model, render and
//! render_terminal are offered, lib.rs wires them into `run()` and main.rs only calls it.

use crate::{
    config::GameConfig,
    context::Context,
    game::{Game, SystemClock},
    log::init_log,
    model::WormModel,
    render_terminal::WormRender,
};
use ::log::info;
use std::{io, path::Path};

/// framerate per second, set to moderate number to save CPUs
pub const GAME_FRAME: u32 = 60;

/// Default config file, looked up in the working directory
pub const CONFIG_FILE: &str = "worm.toml";

/// game settings loaded from worm.toml
pub mod config;

/// public variables, including rendering adapter
pub mod context;

/// unified keyboard event, converted from crossterm events
pub mod event;

/// integrates model and render, encapsulates the main loop
pub mod game;

/// persisted high score
pub mod highscore;

/// key code to game intent mapping
pub mod input;

/// log
pub mod log;

/// game state and rules
pub mod model;

/// Render module.
/// scene: pure description of a frame as draw primitives.
/// buffer: a vector of cells, the rasterized frame.
/// style: colors and modifiers.
/// adapter: render adapter interface (crossterm).
pub mod render;

/// terminal render of the worm game
pub mod render_terminal;

/// RNG, points and directions
pub mod util;

/// Create the game on the crossterm adapter and open the window
pub fn init_game(config: &GameConfig) -> io::Result<Game<WormModel, WormRender>> {
    let ctx = Context::new(&config.game_name, &config.title);
    let m = WormModel::new(config);
    let r = WormRender::new();
    let mut g = Game::new(m, r, ctx, Box::new(SystemClock::new()));
    g.init()?;
    Ok(g)
}

/// Entry for main.rs: load config, init log, run until the window is closed
pub fn run() -> io::Result<()> {
    let config = match GameConfig::load(Path::new(CONFIG_FILE)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}, using default settings", e);
            GameConfig::default()
        }
    };
    if let Err(e) = init_log(config.level_filter(), &config.log_file) {
        eprintln!("log disabled: {}", e);
    }
    info!("{} start...{:?}", config.game_name, config);

    let mut g = init_game(&config)?;
    let ret = g.run();
    g.context.adapter.reset();
    info!("{} exit", config.game_name);
    ret
}
