// RustPixel - Worm
// copyright zipxing@hotmail.com 2022～2025

//! High score persistence: one non-negative integer in a plain text file.
//! Failures never reach the player, a missing or corrupt file reads as 0 and a
//! failed write is only logged.

use log::{debug, warn};
use std::{
    fs,
    path::{Path, PathBuf},
};

#[derive(Debug, Clone)]
pub struct HighscoreStore {
    path: PathBuf,
}

impl HighscoreStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored score, 0 when the file is absent or does not start with a number
    pub fn load(&self) -> u32 {
        match fs::read_to_string(&self.path) {
            Ok(s) => s
                .split_whitespace()
                .next()
                .and_then(|t| t.parse::<u32>().ok())
                .unwrap_or_else(|| {
                    debug!("highscore file {:?} unreadable, using 0", self.path);
                    0
                }),
            Err(e) => {
                debug!("highscore file {:?}: {}", self.path, e);
                0
            }
        }
    }

    /// Overwrite the file with `score` if it beats the stored value.
    /// Returns true only when the new value actually hit the disk.
    pub fn save(&self, score: u32) -> bool {
        if score <= self.load() {
            return false;
        }
        match fs::write(&self.path, format!("{}\n", score)) {
            Ok(_) => true,
            Err(e) => {
                warn!("save highscore {} to {:?} failed: {}", score, self.path, e);
                false
            }
        }
    }
}
