// RustPixel - Worm
// copyright zipxing@hotmail.com 2022～2025

//! Game configuration.
//!
//! Settings come from an optional `worm.toml` in the working directory. Every key is
//! optional, missing keys keep their default:
//!
//! ```toml
//! tick_ms = 120
//! highscore_file = "highscore.txt"
//! log_file = "log/worm.log"
//! log_level = "debug"
//! seed = 42
//! ```

use log::LevelFilter;
use serde::Deserialize;
use std::{fs, io::ErrorKind, path::Path, str::FromStr};

/// Milliseconds between two worm moves
pub const DEFAULT_TICK_MS: u64 = 150;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Game name identifier, used in logs
    pub game_name: String,
    /// Window title
    pub title: String,
    /// Interval of the game tick in milliseconds
    pub tick_ms: u64,
    /// Plain text file holding the high score
    pub highscore_file: String,
    pub log_file: String,
    /// off, error, warn, info, debug or trace
    pub log_level: String,
    /// Fixed RNG seed, time based when absent
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            game_name: "worm".to_string(),
            title: "The Worm Game - Rust Edition 1.0".to_string(),
            tick_ms: DEFAULT_TICK_MS,
            highscore_file: "highscore.txt".to_string(),
            log_file: format!("log{}worm.log", std::path::MAIN_SEPARATOR),
            log_level: "info".to_string(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Load config from a toml file. A missing file gives the defaults,
    /// an unreadable or malformed one is an error.
    pub fn load(path: &Path) -> Result<Self, String> {
        match fs::read_to_string(path) {
            Ok(s) => Self::parse(&s).map_err(|e| format!("{}: {}", path.display(), e)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(format!("{}: {}", path.display(), e)),
        }
    }

    pub fn parse(s: &str) -> Result<Self, String> {
        let mut c: GameConfig = toml::from_str(s).map_err(|e| e.to_string())?;
        // a zero interval would spin the ticker forever
        if c.tick_ms == 0 {
            c.tick_ms = 1;
        }
        Ok(c)
    }

    pub fn tick_secs(&self) -> f32 {
        self.tick_ms as f32 / 1000.0
    }

    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::Info)
    }
}
