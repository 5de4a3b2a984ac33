// RustPixel - Worm
// copyright zipxing@hotmail.com 2022～2025

//! Maps keys to what the player means, depending on the current phase.
//! Menu only listens to Enter, GameOver only to Space, Playing only to
//! arrows and WASD. Every other key is ignored.

use crate::{event::KeyCode, model::Phase, util::Dir};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Turn(Dir),
    Start,
    Restart,
}

pub fn intent_for(phase: Phase, code: KeyCode) -> Option<Intent> {
    match phase {
        Phase::Menu => match code {
            KeyCode::Enter => Some(Intent::Start),
            _ => None,
        },
        Phase::GameOver => match code {
            KeyCode::Char(' ') => Some(Intent::Restart),
            _ => None,
        },
        Phase::Playing => direction_of(code).map(Intent::Turn),
    }
}

fn direction_of(code: KeyCode) -> Option<Dir> {
    match code {
        KeyCode::Up => Some(Dir::Up),
        KeyCode::Down => Some(Dir::Down),
        KeyCode::Left => Some(Dir::Left),
        KeyCode::Right => Some(Dir::Right),
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'w' => Some(Dir::Up),
            's' => Some(Dir::Down),
            'a' => Some(Dir::Left),
            'd' => Some(Dir::Right),
            _ => None,
        },
        _ => None,
    }
}
