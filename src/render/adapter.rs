// RustPixel - Worm
// copyright zipxing@hotmail.com 2022～2025

//! Adapter is the interface between the game and an output backend.
//! It opens and restores the window, polls input into unified Events
//! and flushes rendered buffers to the screen.

use crate::{event::Event, render::buffer::Buffer};
use std::{io, time::Duration};

pub mod cross;

pub trait Adapter {
    /// Open the window sized w x h cells. On error the backend must already be restored.
    fn init(&mut self, w: u16, h: u16, title: &str) -> io::Result<()>;

    /// Restore the backend, safe to call more than once
    fn reset(&mut self);

    /// Wait up to timeout for input, appending converted events to ev.
    /// Returns true when the user asked to close the window.
    fn poll_event(&mut self, timeout: Duration, ev: &mut Vec<Event>) -> io::Result<bool>;

    /// Draw current to the screen, previous is what the screen shows now
    fn draw_all_to_screen(&mut self, current: &Buffer, previous: &Buffer) -> io::Result<()>;
}
