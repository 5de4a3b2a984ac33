// RustPixel - Worm
// copyright zipxing@hotmail.com 2022～2025

//! Game encapsulates Model and Render classes and implements the main loop.
//! Be aware that all the Game, Model and Render instances have the same lifetime.
//!
//! Time is read through the `Clock` trait, so tests can step a game with a
//! `ManualClock` instead of waiting on the wall clock.
//!
//! # Example
//!
//! ```ignore
//! let config = GameConfig::default();
//! let ctx = Context::new(&config.game_name, &config.title);
//! let mut g = Game::new(WormModel::new(&config), WormRender::new(), ctx, Box::new(SystemClock::new()));
//! g.init()?;
//! g.run()?;
//! g.context.adapter.reset();
//! ```

use crate::{context::Context, GAME_FRAME};
use log::info;
use std::{
    cell::Cell,
    io,
    rc::Rc,
    time::{Duration, Instant},
};

/// The Model interface, main entrance for data and core logic
pub trait Model {
    fn init(&mut self, ctx: &mut Context);
    fn update(&mut self, ctx: &mut Context, dt: f32) {
        self.handle_input(ctx, dt);
        self.handle_auto(ctx, dt);
    }
    /// consume ctx.input_events
    fn handle_input(&mut self, ctx: &mut Context, dt: f32);
    /// time driven logic
    fn handle_auto(&mut self, ctx: &mut Context, dt: f32);
}

/// The Render interface, takes context and model as input params. It renders every single frame
pub trait Render {
    type Model: Model;

    fn init(&mut self, ctx: &mut Context, m: &mut Self::Model) -> io::Result<()>;
    fn update(&mut self, ctx: &mut Context, m: &mut Self::Model, dt: f32) -> io::Result<()> {
        self.draw(ctx, m, dt)
    }
    fn draw(&mut self, ctx: &mut Context, model: &mut Self::Model, dt: f32) -> io::Result<()>;
}

/// Monotonic time since some fixed start
pub trait Clock {
    fn now(&self) -> Duration;
}

pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Clock moved by hand. Clones share the same time, keep one to drive a Game
/// that owns the other.
#[derive(Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, d: Duration) {
        self.now.set(self.now.get() + d);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// Fixed interval accumulator, turns frame deltas into whole ticks.
/// Leftover time is carried into the next call.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: f32,
    elapsed: f32,
}

impl Ticker {
    // absorbs f32 rounding when summing frame deltas
    const EPSILON: f32 = 1e-4;

    pub fn new(interval: f32) -> Self {
        Self {
            interval: interval.max(0.001),
            elapsed: 0.0,
        }
    }

    /// Add dt seconds, return how many ticks are due
    pub fn advance(&mut self, dt: f32) -> u32 {
        self.elapsed += dt.max(0.0);
        let mut n = 0;
        while self.elapsed + Self::EPSILON >= self.interval {
            self.elapsed = (self.elapsed - self.interval).max(0.0);
            n += 1;
        }
        n
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }
}

/// Game encapsulates a Model, a Render, a Context and the Clock driving them
pub struct Game<M, R>
where
    M: Model,
    R: Render<Model = M>,
{
    pub context: Context,
    pub model: M,
    pub render: R,
    clock: Box<dyn Clock>,
    last_tick: Duration,
    tick_rate: Duration,
}

impl<M, R> Game<M, R>
where
    M: Model,
    R: Render<Model = M>,
{
    pub fn new(m: M, r: R, ctx: Context, clock: Box<dyn Clock>) -> Self {
        let last_tick = clock.now();
        Self {
            context: ctx,
            model: m,
            render: r,
            clock,
            last_tick,
            tick_rate: Duration::from_nanos(1_000_000_000 / GAME_FRAME as u64),
        }
    }

    /// Main loop, polling input events until the frame is due,
    /// then running one frame. Returns when the adapter reports a close request.
    pub fn run(&mut self) -> io::Result<()> {
        info!("Begin run...");
        loop {
            let timeout = self
                .tick_rate
                .checked_sub(self.clock.now().saturating_sub(self.last_tick))
                .unwrap_or_else(|| Duration::from_nanos(100));

            if self
                .context
                .adapter
                .poll_event(timeout, &mut self.context.input_events)?
            {
                info!("close requested at stage {}", self.context.stage);
                return Ok(());
            }
            self.step()?;
        }
    }

    /// Run one frame if a full frame time has passed on the clock.
    /// Returns whether a frame ran.
    pub fn step(&mut self) -> io::Result<bool> {
        let now = self.clock.now();
        let et = now.saturating_sub(self.last_tick);
        if et < self.tick_rate {
            return Ok(false);
        }
        self.on_tick(et.as_secs_f32())?;
        self.last_tick = now;
        Ok(true)
    }

    /// calls every frame, update model logic and does rendering
    pub fn on_tick(&mut self, dt: f32) -> io::Result<()> {
        self.context.stage += 1;
        self.model.update(&mut self.context, dt);
        self.render.update(&mut self.context, &mut self.model, dt)
    }

    /// init render and model
    pub fn init(&mut self) -> io::Result<()> {
        info!("Init game...");
        self.model.init(&mut self.context);
        self.render.init(&mut self.context, &mut self.model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticker_whole_intervals() {
        let mut t = Ticker::new(0.15);
        assert_eq!(t.advance(0.1), 0);
        assert_eq!(t.advance(0.05), 1);
        assert_eq!(t.advance(0.3), 2);
        assert_eq!(t.advance(0.0), 0);
    }

    #[test]
    fn test_ticker_sixty_fps() {
        let mut t = Ticker::new(0.15);
        let mut ticks = 0;
        for _ in 0..60 {
            ticks += t.advance(1.0 / 60.0);
        }
        // one second at 150ms per move
        assert_eq!(ticks, 6);
    }

    #[test]
    fn test_ticker_reset_drops_leftover() {
        let mut t = Ticker::new(0.15);
        t.advance(0.14);
        t.reset();
        assert_eq!(t.advance(0.02), 0);
    }

    #[test]
    fn test_manual_clock_shared() {
        let c = ManualClock::new();
        let c2 = c.clone();
        c.advance(Duration::from_millis(150));
        assert_eq!(c2.now(), Duration::from_millis(150));
    }
}
