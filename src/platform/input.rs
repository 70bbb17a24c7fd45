//! Keyboard input
//!
//! Most terminals never report key releases, only a press followed by OS key
//! repeats. A direction counts as held while its last press/repeat is at most
//! `HOLD_WINDOW` frames old; terminals that do send releases end the hold at once.

use std::collections::HashMap;
use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::sim::TickInput;

/// Frames a press/repeat keeps a direction held (about 130 ms at 60 fps)
pub const HOLD_WINDOW: u64 = 8;

/// Paddle directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

/// Turns raw key events into per-frame [`TickInput`]
#[derive(Debug, Default)]
pub struct KeyTracker {
    /// Frame each direction was last seen pressed
    held: HashMap<Direction, u64>,
    confirm: bool,
    quit: bool,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one terminal event seen during `frame`
    pub fn handle(&mut self, event: &Event, frame: u64) {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind,
            ..
        }) = event
        else {
            return;
        };

        let direction = match code {
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Direction::Left),
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Direction::Right),
            _ => None,
        };

        if *kind == KeyEventKind::Release {
            if let Some(direction) = direction {
                self.held.remove(&direction);
            }
            return;
        }

        if let Some(direction) = direction {
            self.held.insert(direction, frame);
            return;
        }

        match code {
            KeyCode::Char(' ') if *kind == KeyEventKind::Press => self.confirm = true,
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => self.quit = true,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => self.quit = true,
            _ => {}
        }
    }

    fn is_held(&self, direction: Direction, frame: u64) -> bool {
        self.held
            .get(&direction)
            .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }

    /// Input for `frame`. The confirm press is consumed.
    pub fn frame_input(&mut self, frame: u64) -> TickInput {
        TickInput {
            left: self.is_held(Direction::Left, frame),
            right: self.is_held(Direction::Right, frame),
            confirm: std::mem::take(&mut self.confirm),
        }
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }
}

/// Drain every pending terminal event without blocking
pub fn poll_events(tracker: &mut KeyTracker, frame: u64) -> io::Result<()> {
    while event::poll(Duration::ZERO)? {
        let ev = event::read()?;
        tracker.handle(&ev, frame);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn key_kind(code: KeyCode, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn test_hold_window() {
        let mut keys = KeyTracker::new();
        keys.handle(&key(KeyCode::Left), 10);

        assert!(keys.frame_input(10).left);
        assert!(keys.frame_input(10 + HOLD_WINDOW).left);
        assert!(!keys.frame_input(11 + HOLD_WINDOW).left);
        assert!(!keys.frame_input(10).right);
    }

    #[test]
    fn test_repeat_extends_hold() {
        let mut keys = KeyTracker::new();
        keys.handle(&key(KeyCode::Char('d')), 0);
        keys.handle(&key_kind(KeyCode::Char('d'), KeyEventKind::Repeat), 6);
        assert!(keys.frame_input(12).right);
    }

    #[test]
    fn test_release_ends_hold() {
        let mut keys = KeyTracker::new();
        keys.handle(&key(KeyCode::Right), 3);
        keys.handle(&key_kind(KeyCode::Right, KeyEventKind::Release), 4);
        assert!(!keys.frame_input(4).right);
    }

    #[test]
    fn test_both_directions() {
        let mut keys = KeyTracker::new();
        keys.handle(&key(KeyCode::Left), 1);
        keys.handle(&key(KeyCode::Right), 1);
        let input = keys.frame_input(2);
        assert!(input.left && input.right);
    }

    #[test]
    fn test_confirm_is_one_shot() {
        let mut keys = KeyTracker::new();
        keys.handle(&key(KeyCode::Char(' ')), 0);
        assert!(keys.frame_input(0).confirm);
        assert!(!keys.frame_input(1).confirm);

        // Key repeat of space does not re-confirm
        keys.handle(&key_kind(KeyCode::Char(' '), KeyEventKind::Repeat), 2);
        assert!(!keys.frame_input(2).confirm);
    }

    #[test]
    fn test_quit_keys() {
        for code in [KeyCode::Char('q'), KeyCode::Esc] {
            let mut keys = KeyTracker::new();
            keys.handle(&key(code), 0);
            assert!(keys.quit_requested());
        }

        let mut keys = KeyTracker::new();
        keys.handle(
            &Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            0,
        );
        assert!(keys.quit_requested());

        let mut keys = KeyTracker::new();
        keys.handle(&key(KeyCode::Char('c')), 0);
        assert!(!keys.quit_requested());
    }

    #[test]
    fn test_non_key_events_ignored() {
        let mut keys = KeyTracker::new();
        keys.handle(&Event::Resize(80, 24), 0);
        keys.handle(&Event::FocusLost, 0);
        assert_eq!(keys.frame_input(0), TickInput::default());
        assert!(!keys.quit_requested());
    }
}
