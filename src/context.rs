// RustPixel - Worm
// copyright zipxing@hotmail.com 2022～2025

//! Context encapsulates several public variables
//! including stage, game name and pending input events.
//! A render adapter is also provided, crossterm by default,
//! any other `Adapter` can be plugged in with `with_adapter`.

use crate::{
    event::Event,
    render::adapter::{cross::CrosstermAdapter, Adapter},
};

pub struct Context {
    pub game_name: String,
    pub title: String,
    /// frames run so far
    pub stage: u32,
    pub input_events: Vec<Event>,
    pub adapter: Box<dyn Adapter>,
}

impl Context {
    pub fn new(name: &str, title: &str) -> Self {
        Self::with_adapter(name, title, Box::new(CrosstermAdapter::new()))
    }

    pub fn with_adapter(name: &str, title: &str, adapter: Box<dyn Adapter>) -> Self {
        Self {
            game_name: name.to_string(),
            title: title.to_string(),
            stage: 0,
            input_events: vec![],
            adapter,
        }
    }
}
