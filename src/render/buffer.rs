// RustPixel - Worm
// copyright zipxing@hotmail.com 2022～2025

//! Cell is the basic rendering unit, a single width character with colors and
//! modifiers. Many Cells form a Buffer, the rasterized terminal frame.
//!
//! Pixel to cell mapping: one grid cell (20x20 px) takes two columns and one row,
//! so a column is 10px wide and a row is 20px high. The outermost ring of cells is
//! reserved for the border, the play field starts at (1, 1).

use crate::render::{
    scene::{Align, Primitive, Scene, HEIGHT, WIDTH},
    style::{Color, Modifier},
};

pub const COL_PX: i32 = 10;
pub const ROW_PX: i32 = 20;
/// border ring around the field, in cells
pub const FRAME: u16 = 1;

/// terminal size needed to show a whole scene
pub const TERM_WIDTH: u16 = (WIDTH / COL_PX) as u16 + 2 * FRAME;
pub const TERM_HEIGHT: u16 = (HEIGHT / ROW_PX) as u16 + 2 * FRAME;

pub const BLOCK: char = '█';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub symbol: char,
    pub fg: Color,
    pub bg: Color,
    pub modifier: Modifier,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            symbol: ' ',
            fg: Color::Reset,
            bg: Color::Reset,
            modifier: Modifier::empty(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    width: u16,
    height: u16,
    content: Vec<Cell>,
}

impl Buffer {
    pub fn empty(width: u16, height: u16) -> Buffer {
        Buffer {
            width,
            height,
            content: vec![Cell::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn index_of(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x < self.width && y < self.height {
            Some(&self.content[self.index_of(x, y)])
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        if x < self.width && y < self.height {
            let i = self.index_of(x, y);
            Some(&mut self.content[i])
        } else {
            None
        }
    }

    /// Writes a string from (x, y), clipped at the right edge.
    /// Background is left as it is.
    pub fn set_str(&mut self, x: u16, y: u16, s: &str, fg: Color, modifier: Modifier) {
        for (i, ch) in s.chars().enumerate() {
            let Some(c) = self.get_mut(x.saturating_add(i as u16), y) else {
                break;
            };
            c.symbol = ch;
            c.fg = fg;
            c.modifier = modifier;
        }
    }

    /// The characters of row y, handy for tests and debugging
    pub fn row_string(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y).map(|c| c.symbol))
            .collect()
    }

    pub fn reset(&mut self) {
        for c in &mut self.content {
            *c = Cell::default();
        }
    }

    /// Builds a minimal sequence of coordinates and Cells necessary to update the screen from
    /// self to other. A size change redraws every cell of other.
    pub fn diff<'a>(&self, other: &'a Buffer) -> Vec<(u16, u16, &'a Cell)> {
        let full = self.width != other.width || self.height != other.height;
        other
            .content
            .iter()
            .enumerate()
            .filter(|(i, c)| full || self.content[*i] != **c)
            .map(|(i, c)| {
                let x = (i % other.width as usize) as u16;
                let y = (i / other.width as usize) as u16;
                (x, y, c)
            })
            .collect()
    }

    /// Rasterize a scene over the current content, primitives in order
    pub fn draw_scene(&mut self, scene: &Scene) {
        for p in scene.iter() {
            match p {
                Primitive::Clear(color) => {
                    for c in &mut self.content {
                        *c = Cell {
                            bg: *color,
                            ..Cell::default()
                        };
                    }
                }
                Primitive::FillRect { x, y, w, h, color } => {
                    self.fill_rect(*x, *y, *w, *h, *color);
                }
                Primitive::Text {
                    text,
                    align,
                    y,
                    size,
                    color,
                } => {
                    let inner = self.width.saturating_sub(2 * FRAME);
                    let len = text.chars().count() as u16;
                    let col = match align {
                        Align::Left(x) => FRAME + (*x).max(0) as u16 / COL_PX as u16,
                        Align::Center => FRAME + inner.saturating_sub(len) / 2,
                    };
                    // baseline to the row holding the glyph middle
                    let row = FRAME + ((*y - *size / 2).max(0) / ROW_PX) as u16;
                    let modifier = if *size >= 24 {
                        Modifier::BOLD
                    } else {
                        Modifier::empty()
                    };
                    let visible: String = text
                        .chars()
                        .take(self.width.saturating_sub(FRAME + col) as usize)
                        .collect();
                    self.set_str(col, row, &visible, *color, modifier);
                }
                Primitive::Border(color) => self.draw_border(*color),
            }
        }
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        let to_cells = |v: i32, px: i32| (v.max(0) + px - 1) / px;
        let (c0, c1) = (x.max(0) / COL_PX, to_cells(x + w, COL_PX));
        let (r0, r1) = (y.max(0) / ROW_PX, to_cells(y + h, ROW_PX));
        let iw = self.width.saturating_sub(2 * FRAME) as i32;
        let ih = self.height.saturating_sub(2 * FRAME) as i32;
        for r in r0..r1.min(ih) {
            for c in c0..c1.min(iw) {
                if let Some(cell) = self.get_mut(FRAME + c as u16, FRAME + r as u16) {
                    cell.symbol = BLOCK;
                    cell.fg = color;
                }
            }
        }
    }

    fn draw_border(&mut self, color: Color) {
        if self.width < 2 || self.height < 2 {
            return;
        }
        let (r, b) = (self.width - 1, self.height - 1);
        let put = |buf: &mut Buffer, x: u16, y: u16, ch: char| {
            if let Some(c) = buf.get_mut(x, y) {
                c.symbol = ch;
                c.fg = color;
            }
        };
        for x in 1..r {
            put(self, x, 0, '─');
            put(self, x, b, '─');
        }
        for y in 1..b {
            put(self, 0, y, '│');
            put(self, r, y, '│');
        }
        put(self, 0, 0, '┌');
        put(self, r, 0, '┐');
        put(self, 0, b, '└');
        put(self, r, b, '┘');
    }
}
