// RustPixel - Worm
// copyright zipxing@hotmail.com 2022～2025

//! A Scene is one frame described as draw primitives in pixel space
//! (800x600, 20px per grid cell). Building it reads the game state and
//! changes nothing, so any backend can consume it and tests can inspect it.

use crate::{
    model::{GameState, Phase, CELL_SIZE, COLS, ROWS},
    render::style::Color,
    util::PointI16,
};

pub const WIDTH: i32 = COLS as i32 * CELL_SIZE;
pub const HEIGHT: i32 = ROWS as i32 * CELL_SIZE;

pub const WORM_COLOR: Color = Color::Green;
pub const APPLE_COLOR: Color = Color::Red;
pub const BORDER_COLOR: Color = Color::Yellow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    /// left edge at x pixels
    Left(i32),
    Center,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Primitive {
    Clear(Color),
    FillRect {
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        color: Color,
    },
    /// y is the baseline, size the font size in pixels
    Text {
        text: String,
        align: Align,
        y: i32,
        size: i32,
        color: Color,
    },
    Border(Color),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scene {
    pub primitives: Vec<Primitive>,
}

impl Scene {
    pub fn push(&mut self, p: Primitive) {
        self.primitives.push(p);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Primitive> {
        self.primitives.iter()
    }

    /// all text strings in draw order
    pub fn texts(&self) -> Vec<&str> {
        self.primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    fn cell(&mut self, p: PointI16, color: Color) {
        self.push(Primitive::FillRect {
            x: p.x as i32 * CELL_SIZE,
            y: p.y as i32 * CELL_SIZE,
            w: CELL_SIZE,
            h: CELL_SIZE,
            color,
        });
    }

    fn text(&mut self, text: String, align: Align, y: i32, size: i32, color: Color) {
        self.push(Primitive::Text {
            text,
            align,
            y,
            size,
            color,
        });
    }
}

pub fn build_scene(state: &GameState) -> Scene {
    let mut s = Scene::default();
    s.push(Primitive::Clear(Color::Black));
    let cy = HEIGHT / 2;
    match state.phase() {
        Phase::Menu => {
            s.text(
                "THE WORM. RUST EDITION".to_string(),
                Align::Center,
                cy - 30,
                48,
                Color::Red,
            );
            s.text(
                "press ENTER to start the game".to_string(),
                Align::Center,
                cy + 40,
                24,
                Color::White,
            );
        }
        Phase::Playing => {
            for p in state.body() {
                s.cell(*p, WORM_COLOR);
            }
            s.cell(state.apple(), APPLE_COLOR);
            s.text(
                format!("Score: {}", state.score()),
                Align::Left(10),
                25,
                16,
                Color::White,
            );
            s.text(
                format!("High Score: {}", state.highscore()),
                Align::Left(10),
                45,
                16,
                Color::White,
            );
        }
        Phase::GameOver => {
            s.text("GAME OVER".to_string(), Align::Center, cy - 80, 36, Color::White);
            s.text(
                format!("Final Score: {}", state.score()),
                Align::Center,
                cy - 20,
                24,
                Color::White,
            );
            s.text(
                format!("High Score: {}", state.highscore()),
                Align::Center,
                cy + 20,
                24,
                Color::White,
            );
            s.text(
                "Press SPACE to play again".to_string(),
                Align::Center,
                cy + 80,
                18,
                Color::White,
            );
        }
    }
    s.push(Primitive::Border(BORDER_COLOR));
    s
}
