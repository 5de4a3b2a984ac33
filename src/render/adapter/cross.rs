// RustPixel - Worm
// copyright zipxing@hotmail.com 2022～2025

use crate::{
    event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    render::{
        adapter::Adapter,
        buffer::Buffer,
        style::{Color, Modifier, ModifierDiff},
    },
};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{
        Event as CEvent, KeyCode as CKeyCode, KeyEventKind as CKeyEventKind,
        KeyModifiers as CKeyModifiers,
    },
    execute, queue,
    style::{
        Attribute as CAttribute, Color as CColor, Print, SetAttribute, SetBackgroundColor,
        SetForegroundColor,
    },
    terminal::{
        self, disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen, SetTitle,
    },
};
use log::{info, warn};
use std::io::{self, Write};
use std::time::Duration;

pub struct CrosstermAdapter {
    pub writer: Box<dyn Write>,
    active: bool,
    /// set on resize, the next draw repaints every cell
    full_redraw: bool,
}

impl Default for CrosstermAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl CrosstermAdapter {
    pub fn new() -> Self {
        Self {
            writer: Box::new(io::stdout()),
            active: false,
            full_redraw: false,
        }
    }
}

impl Adapter for CrosstermAdapter {
    fn init(&mut self, w: u16, h: u16, title: &str) -> io::Result<()> {
        // check terminal size, refuse to start if it can not hold the whole field
        let (width, height) = terminal::size()?;
        if w > width || h > height {
            return Err(io::Error::other(format!(
                "terminal too small, required size:(width: {}, height: {}), \
                 terminal size:(width: {}, height: {})",
                w, h, width, height
            )));
        }
        enable_raw_mode()?;
        self.active = true;
        if let Err(e) = execute!(
            self.writer,
            EnterAlternateScreen,
            Hide,
            SetTitle(title),
            Clear(ClearType::All)
        ) {
            self.reset();
            return Err(e);
        }
        info!("terminal {}x{} ready for {}x{}", width, height, w, h);
        Ok(())
    }

    fn reset(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        if let Err(e) = disable_raw_mode() {
            warn!("disable raw mode: {}", e);
        }
        if let Err(e) = execute!(
            self.writer,
            SetAttribute(CAttribute::Reset),
            LeaveAlternateScreen,
            Show
        ) {
            warn!("leave alternate screen: {}", e);
        }
    }

    fn poll_event(&mut self, timeout: Duration, es: &mut Vec<Event>) -> io::Result<bool> {
        if !crossterm::event::poll(timeout)? {
            return Ok(false);
        }
        let e = crossterm::event::read()?;
        if let CEvent::Key(key) = &e {
            let ctrl_c = key.code == CKeyCode::Char('c')
                && key.modifiers.contains(CKeyModifiers::CONTROL);
            if key.kind != CKeyEventKind::Release
                && (ctrl_c || matches!(key.code, CKeyCode::Esc | CKeyCode::Char('q')))
            {
                return Ok(true);
            }
        }
        if let CEvent::Resize(..) = e {
            self.full_redraw = true;
        }
        if let Some(et) = input_events_from_cross(&e) {
            es.push(et);
        }
        Ok(false)
    }

    fn draw_all_to_screen(&mut self, current: &Buffer, previous: &Buffer) -> io::Result<()> {
        let updates = if self.full_redraw {
            self.full_redraw = false;
            queue!(self.writer, Clear(ClearType::All))?;
            Buffer::empty(0, 0).diff(current)
        } else {
            previous.diff(current)
        };

        let mut fg = Color::Reset;
        let mut bg = Color::Reset;
        let mut modifier = Modifier::empty();
        let mut last_pos: Option<(u16, u16)> = None;
        for (x, y, cell) in updates {
            // Move the cursor if the previous location was not (x - 1, y)
            if !matches!(last_pos, Some(p) if x == p.0 + 1 && y == p.1) {
                queue!(self.writer, MoveTo(x, y))?;
            }
            last_pos = Some((x, y));
            if cell.modifier != modifier {
                let diff = ModifierDiff {
                    from: modifier,
                    to: cell.modifier,
                };
                diff.queue(&mut self.writer)?;
                modifier = cell.modifier;
            }
            if cell.fg != fg {
                queue!(self.writer, SetForegroundColor(CColor::from(cell.fg)))?;
                fg = cell.fg;
            }
            if cell.bg != bg {
                queue!(self.writer, SetBackgroundColor(CColor::from(cell.bg)))?;
                bg = cell.bg;
            }
            queue!(self.writer, Print(cell.symbol))?;
        }
        queue!(
            self.writer,
            SetForegroundColor(CColor::Reset),
            SetBackgroundColor(CColor::Reset),
            SetAttribute(CAttribute::Reset)
        )?;
        self.writer.flush()
    }
}

/// Convert crossterm I/O events to unified Event, for the sake of unified event processing.
/// Keys the game never reads are dropped here.
pub fn input_events_from_cross(e: &CEvent) -> Option<Event> {
    let CEvent::Key(key) = e else {
        return None;
    };
    let kc = match key.code {
        CKeyCode::Char(cc) => KeyCode::Char(cc),
        CKeyCode::Enter => KeyCode::Enter,
        CKeyCode::Up => KeyCode::Up,
        CKeyCode::Down => KeyCode::Down,
        CKeyCode::Left => KeyCode::Left,
        CKeyCode::Right => KeyCode::Right,
        _ => {
            return None;
        }
    };
    let mut mods = KeyModifiers::NONE;
    if key.modifiers.contains(CKeyModifiers::SHIFT) {
        mods |= KeyModifiers::SHIFT;
    }
    if key.modifiers.contains(CKeyModifiers::CONTROL) {
        mods |= KeyModifiers::CONTROL;
    }
    if key.modifiers.contains(CKeyModifiers::ALT) {
        mods |= KeyModifiers::ALT;
    }
    let kind = match key.kind {
        CKeyEventKind::Press => KeyEventKind::Press,
        CKeyEventKind::Repeat => KeyEventKind::Repeat,
        CKeyEventKind::Release => KeyEventKind::Release,
    };
    Some(Event::Key(KeyEvent::new_with_kind(kc, mods, kind)))
}
