// RustPixel - Worm
// copyright zipxing@hotmail.com 2022～2025

//! Utilities for random, PointI16, Dir...

mod rand;
pub use rand::*;

/// Grid coordinate, x is the column and y the row.
/// Signed so a head stepping off the field can be represented and checked.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct PointI16 {
    pub x: i16,
    pub y: i16,
}

impl PointI16 {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    pub fn step(self, d: Dir) -> Self {
        let (dx, dy) = d.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    pub fn inside(self, w: i16, h: i16) -> bool {
        self.x >= 0 && self.x < w && self.y >= 0 && self.y < h
    }
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Dir {
    Up,
    Right,
    Down,
    Left,
}

impl Dir {
    /// unit vector (dx, dy), y grows downward
    pub fn delta(self) -> (i16, i16) {
        match self {
            Dir::Up => (0, -1),
            Dir::Right => (1, 0),
            Dir::Down => (0, 1),
            Dir::Left => (-1, 0),
        }
    }

    pub fn reverse(self) -> Dir {
        match self {
            Dir::Up => Dir::Down,
            Dir::Right => Dir::Left,
            Dir::Down => Dir::Up,
            Dir::Left => Dir::Right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_and_bounds() {
        let p = PointI16::new(0, 5);
        assert_eq!(p.step(Dir::Right), PointI16::new(1, 5));
        assert_eq!(p.step(Dir::Up), PointI16::new(0, 4));
        let out = p.step(Dir::Left);
        assert_eq!(out, PointI16::new(-1, 5));
        assert!(!out.inside(40, 30));
        assert!(p.inside(40, 30));
        assert!(!PointI16::new(40, 0).inside(40, 30));
        assert!(!PointI16::new(0, 30).inside(40, 30));
    }

    #[test]
    fn test_reverse() {
        for d in [Dir::Up, Dir::Right, Dir::Down, Dir::Left] {
            assert_ne!(d, d.reverse());
            assert_eq!(d, d.reverse().reverse());
            let (dx, dy) = d.delta();
            assert_eq!(d.reverse().delta(), (-dx, -dy));
        }
    }
}
