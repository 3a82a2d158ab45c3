//! Playback clock.
//!
//! A two-state machine gating whether simulation ticks advance body
//! phases. Transitions are idempotent and take effect at the next tick
//! boundary: the state is only consulted inside [`PlaybackClock::tick`].

use serde::{Deserialize, Serialize};

/// Whether the simulation is advancing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    /// Ticks advance every body's phase.
    Playing,
    /// Ticks leave all bodies frozen at their last position.
    Paused,
}

/// Simulation clock with play/pause gating.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackClock {
    /// Current playback state.
    state: PlaybackState,
    /// Number of ticks observed, advancing or not.
    tick_count: u64,
}

impl PlaybackClock {
    /// Create a clock in the given initial state.
    #[must_use]
    pub const fn new(state: PlaybackState) -> Self {
        Self {
            state,
            tick_count: 0,
        }
    }

    /// Current playback state.
    #[must_use]
    pub const fn state(&self) -> PlaybackState {
        self.state
    }

    /// Whether ticks currently advance bodies.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    /// Number of ticks observed so far.
    #[must_use]
    pub const fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Resume playback. Idempotent: a second `play` changes nothing and
    /// resets no accumulated phase.
    pub fn play(&mut self) {
        if self.state != PlaybackState::Playing {
            log::debug!("playback resumed at tick {}", self.tick_count);
            self.state = PlaybackState::Playing;
        }
    }

    /// Pause playback. Idempotent; bodies hold their last position.
    pub fn pause(&mut self) {
        if self.state != PlaybackState::Paused {
            log::debug!("playback paused at tick {}", self.tick_count);
            self.state = PlaybackState::Paused;
        }
    }

    /// Observe one tick. Returns whether bodies should advance.
    pub fn tick(&mut self) -> bool {
        self.tick_count += 1;
        self.is_playing()
    }
}

impl Default for PlaybackClock {
    fn default() -> Self {
        Self::new(PlaybackState::Playing)
    }
}
