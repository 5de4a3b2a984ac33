// RustPixel - Worm
// copyright zipxing@hotmail.com 2022～2025

use crate::{
    context::Context,
    game::Render,
    model::WormModel,
    render::{
        buffer::{Buffer, TERM_HEIGHT, TERM_WIDTH},
        scene::build_scene,
    },
};
use log::info;
use std::io;

/// Double buffered terminal render: every frame the scene is rasterized into the
/// back buffer, then only the cells differing from the front buffer are flushed.
pub struct WormRender {
    pub buffers: [Buffer; 2],
    pub current: usize,
}

impl Default for WormRender {
    fn default() -> Self {
        Self::new()
    }
}

impl WormRender {
    pub fn new() -> Self {
        Self {
            buffers: [
                Buffer::empty(TERM_WIDTH, TERM_HEIGHT),
                Buffer::empty(TERM_WIDTH, TERM_HEIGHT),
            ],
            current: 0,
        }
    }

    /// the buffer shown by the last draw
    pub fn front(&self) -> &Buffer {
        &self.buffers[1 - self.current]
    }
}

impl Render for WormRender {
    type Model = WormModel;

    fn init(&mut self, context: &mut Context, _data: &mut Self::Model) -> io::Result<()> {
        context
            .adapter
            .init(TERM_WIDTH, TERM_HEIGHT, &context.title)?;
        info!("WormRender init {}x{}", TERM_WIDTH, TERM_HEIGHT);
        Ok(())
    }

    fn draw(&mut self, context: &mut Context, data: &mut Self::Model, _dt: f32) -> io::Result<()> {
        let scene = build_scene(&data.state);
        let cur = self.current;
        let (a, b) = self.buffers.split_at_mut(1);
        let (back, front) = if cur == 0 {
            (&mut a[0], &b[0])
        } else {
            (&mut b[0], &a[0])
        };
        back.reset();
        back.draw_scene(&scene);
        context.adapter.draw_all_to_screen(back, front)?;
        self.current = 1 - cur;
        Ok(())
    }
}
