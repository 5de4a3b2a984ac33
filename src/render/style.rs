// RustPixel - Worm
// copyright zipxing@hotmail.com 2022～2025

//! Defines styles such as color and bold.

use bitflags::bitflags;
use crossterm::{
    queue,
    style::{Attribute as CAttribute, Color as CColor, SetAttribute},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    #[default]
    Reset,
    Black,
    Red,
    Green,
    Yellow,
    White,
}

impl From<Color> for CColor {
    fn from(color: Color) -> Self {
        match color {
            Color::Reset => CColor::Reset,
            Color::Black => CColor::Black,
            Color::Red => CColor::Red,
            Color::Green => CColor::Green,
            Color::Yellow => CColor::Yellow,
            Color::White => CColor::White,
        }
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifier: u16 {
        const BOLD = 0b0000_0000_0001;
    }
}

/// Queues the attribute changes needed to go from one modifier set to another
pub struct ModifierDiff {
    pub from: Modifier,
    pub to: Modifier,
}

impl ModifierDiff {
    pub fn queue<W>(&self, mut w: W) -> std::io::Result<()>
    where
        W: std::io::Write,
    {
        let removed = self.from - self.to;
        if removed.contains(Modifier::BOLD) {
            queue!(w, SetAttribute(CAttribute::NormalIntensity))?;
        }
        let added = self.to - self.from;
        if added.contains(Modifier::BOLD) {
            queue!(w, SetAttribute(CAttribute::Bold))?;
        }
        Ok(())
    }
}
