//! Keyboard-backed input source.
//!
//! Each poll waits on the terminal for at most the requested timeout. That
//! bounded wait is the only clock the game has: when it expires with no key,
//! the loop still applies its gravity tick.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};
use log::{debug, trace};

use tty_tetris_session::InputSource;

use crate::map::handle_key_event;
use crate::types::{GameAction, BASE_DROP_MS};

/// Reads actions from the real terminal. Expects raw mode to be enabled.
#[derive(Debug, Clone)]
pub struct TerminalInput {
    pace_ms: u32,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self {
            pace_ms: BASE_DROP_MS,
        }
    }

    /// Last drop interval the game loop announced
    pub fn pace_ms(&self) -> u32 {
        self.pace_ms
    }
}

impl Default for TerminalInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for TerminalInput {
    fn poll_key(&mut self, timeout_ms: u32) -> Result<Option<GameAction>> {
        if !event::poll(Duration::from_millis(u64::from(timeout_ms)))? {
            return Ok(None);
        }

        // Resize, mouse and unmapped keys still end the wait early.
        let action = match event::read()? {
            Event::Key(key) => handle_key_event(key),
            _ => None,
        };
        trace!("input {:?}", action);
        Ok(action)
    }

    fn set_pace_ms(&mut self, ms: u32) {
        if ms != self.pace_ms {
            debug!("input pace {}ms -> {}ms", self.pace_ms, ms);
        }
        self.pace_ms = ms;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pace_starts_at_base_interval_and_follows_loop() {
        let mut input = TerminalInput::default();
        assert_eq!(input.pace_ms(), 1000);

        input.set_pace_ms(990);
        assert_eq!(input.pace_ms(), 990);
    }
}
