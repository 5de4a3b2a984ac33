// RustPixel - Worm
// copyright zipxing@hotmail.com 2022～2025

//! Worm game data and rules.
//!
//! `GameState` is the whole game: worm, direction, apple, score, high score and
//! phase. It knows nothing about time or keys, `WormModel` adapts it to the
//! Model interface by feeding it ticks from a `Ticker` and intents from input events.

use crate::{
    config::GameConfig,
    context::Context,
    event::{Event, KeyEventKind},
    game::{Model, Ticker},
    highscore::HighscoreStore,
    input::{intent_for, Intent},
    util::{Dir, PointI16, Rand},
};
use log::{debug, info};

pub const COLS: i16 = 40;
pub const ROWS: i16 = 30;
/// pixel size of one grid cell
pub const CELL_SIZE: i32 = 20;

pub const INITIAL_WORM: [PointI16; 3] = [
    PointI16::new(5, 5),
    PointI16::new(4, 5),
    PointI16::new(3, 5),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Menu,
    Playing,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crash {
    Wall,
    SelfHit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// not playing, nothing happened
    Idle,
    Moved,
    Ate,
    Crashed(Crash),
}

pub struct GameState {
    phase: Phase,
    /// head first
    body: Vec<PointI16>,
    /// direction used by the last tick
    dir: Dir,
    /// direction the next tick will use
    pending: Dir,
    apple: PointI16,
    score: u32,
    highscore: u32,
    store: HighscoreStore,
    rand: Rand,
}

impl GameState {
    pub fn new(store: HighscoreStore, rand: Rand) -> Self {
        let highscore = store.load();
        Self {
            phase: Phase::Menu,
            body: vec![],
            dir: Dir::Right,
            pending: Dir::Right,
            apple: PointI16::default(),
            score: 0,
            highscore,
            store,
            rand,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn body(&self) -> &[PointI16] {
        &self.body
    }

    pub fn head(&self) -> Option<PointI16> {
        self.body.first().copied()
    }

    pub fn direction(&self) -> Dir {
        self.dir
    }

    pub fn pending_direction(&self) -> Dir {
        self.pending
    }

    pub fn apple(&self) -> PointI16 {
        self.apple
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn highscore(&self) -> u32 {
        self.highscore
    }

    /// Start a fresh run, the high score is kept
    pub fn reset(&mut self) {
        self.body = INITIAL_WORM.to_vec();
        self.dir = Dir::Right;
        self.pending = Dir::Right;
        self.score = 0;
        self.spawn_apple();
        self.phase = Phase::Playing;
        info!("new run, highscore={}", self.highscore);
    }

    /// Queue a turn for the next tick. A turn back onto the committed direction's
    /// reverse is refused, turns against an earlier queued one are not.
    pub fn set_direction(&mut self, d: Dir) -> bool {
        if d == self.dir.reverse() {
            return false;
        }
        self.pending = d;
        true
    }

    /// Advance the worm one cell
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != Phase::Playing {
            return TickOutcome::Idle;
        }
        let Some(head) = self.head() else {
            return TickOutcome::Idle;
        };
        self.dir = self.pending;
        let nh = head.step(self.dir);

        if !nh.inside(COLS, ROWS) {
            return self.game_over(Crash::Wall);
        }
        if self.body.contains(&nh) {
            return self.game_over(Crash::SelfHit);
        }

        self.body.insert(0, nh);
        let tail = self.body.pop();
        if nh != self.apple {
            return TickOutcome::Moved;
        }
        self.score += 1;
        if let Some(t) = tail {
            self.body.push(t);
        }
        self.spawn_apple();
        debug!(
            "apple eaten, score={} len={} next apple={:?}",
            self.score,
            self.body.len(),
            self.apple
        );
        TickOutcome::Ate
    }

    fn game_over(&mut self, crash: Crash) -> TickOutcome {
        self.phase = Phase::GameOver;
        if self.store.save(self.score) {
            info!("new highscore {} saved", self.score);
        }
        self.highscore = self.highscore.max(self.score);
        info!(
            "game over by {:?}, score={} highscore={}",
            crash, self.score, self.highscore
        );
        TickOutcome::Crashed(crash)
    }

    /// Rejection sampling over the whole grid. The worm covers a small share of the
    /// field in practice, so the loop has no attempt cap.
    fn spawn_apple(&mut self) {
        if self.body.len() >= (COLS as usize) * (ROWS as usize) {
            return;
        }
        loop {
            let p = PointI16::new(
                self.rand.below(COLS as u32) as i16,
                self.rand.below(ROWS as u32) as i16,
            );
            if !self.body.contains(&p) {
                self.apple = p;
                return;
            }
        }
    }

    /// Place the worm by hand, head first. Used to set up known layouts.
    pub fn set_worm(&mut self, body: &[PointI16], dir: Dir) {
        self.body = body.to_vec();
        self.dir = dir;
        self.pending = dir;
        self.phase = Phase::Playing;
    }

    /// Place the apple by hand
    pub fn set_apple(&mut self, p: PointI16) {
        self.apple = p;
    }
}

pub struct WormModel {
    pub state: GameState,
    pub ticker: Ticker,
    seed: Option<u64>,
    /// a run started this frame, its delta predates the start
    fresh_run: bool,
}

impl WormModel {
    pub fn new(config: &GameConfig) -> Self {
        let mut rand = Rand::new();
        match config.seed {
            Some(s) => rand.srand(s),
            None => rand.srand_now(),
        }
        Self {
            state: GameState::new(HighscoreStore::new(&config.highscore_file), rand),
            ticker: Ticker::new(config.tick_secs()),
            seed: config.seed,
            fresh_run: false,
        }
    }

    pub fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::Start | Intent::Restart => {
                self.state.reset();
                self.ticker.reset();
                self.fresh_run = true;
            }
            Intent::Turn(d) => {
                if !self.state.set_direction(d) {
                    debug!("turn {:?} refused, moving {:?}", d, self.state.direction());
                }
            }
        }
    }
}

impl Model for WormModel {
    fn init(&mut self, _context: &mut Context) {
        info!(
            "WormModel init, highscore={} seed={:?}",
            self.state.highscore(),
            self.seed
        );
    }

    fn handle_input(&mut self, context: &mut Context, _dt: f32) {
        for e in context.input_events.drain(..) {
            let Event::Key(key) = e;
            if key.kind == KeyEventKind::Release {
                continue;
            }
            if let Some(intent) = intent_for(self.state.phase(), key.code) {
                self.apply(intent);
            }
        }
    }

    fn handle_auto(&mut self, _context: &mut Context, dt: f32) {
        if self.fresh_run {
            self.fresh_run = false;
            return;
        }
        for _ in 0..self.ticker.advance(dt) {
            match self.state.tick() {
                TickOutcome::Idle => break,
                o => debug!("tick {:?} head={:?}", o, self.state.head()),
            }
        }
    }
}
