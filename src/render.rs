// RustPixel - Worm
// copyright zipxing@hotmail.com 2022～2025

//! Rendering goes in two steps. `scene::build_scene` describes a frame as draw
//! primitives in pixel space, without touching any backend. The terminal render then
//! rasterizes the scene into a `buffer::Buffer` of cells and hands it to the adapter,
//! which only flushes the cells that changed since the last frame.

pub mod adapter;
pub mod buffer;
pub mod scene;
pub mod style;
