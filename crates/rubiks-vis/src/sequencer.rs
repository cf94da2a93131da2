//! Playback of a typed move queue.
//!
//! The sequencer only decides; it owns no timer. The session arms the tick
//! timer whenever [`Sequencer::is_playing`] becomes true and disarms it when it
//! becomes false.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Current state of playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    /// Nothing to play, or never started
    Idle,
    /// Sending one queued move per tick
    Playing,
    /// Stopped by the user or by a failed request, queue kept
    Paused,
}

/// Queue of move symbols consumed one per tick.
#[derive(Debug, Clone)]
pub struct Sequencer {
    queue: VecDeque<char>,
    state: PlaybackState,
    /// Set by any user action since playback last started
    interrupted: bool,
    /// A move taken by [`Sequencer::tick`] has not been answered yet
    awaiting: bool,
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl Sequencer {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            state: PlaybackState::Idle,
            interrupted: false,
            awaiting: false,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    /// Symbols still waiting, front first.
    pub fn queue_text(&self) -> String {
        self.queue.iter().collect()
    }

    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    /// Replace the queue with the user's text. Editing stops playback.
    pub fn set_queue_text(&mut self, text: &str) {
        self.queue = text.chars().collect();
        self.pause();
    }

    /// Start playback if there is anything to play.
    pub fn play(&mut self) -> PlaybackState {
        self.interrupted = false;
        self.state = if self.queue.is_empty() {
            PlaybackState::Idle
        } else {
            PlaybackState::Playing
        };
        self.state
    }

    /// Stop after the move already sent; the rest of the queue is kept.
    pub fn pause(&mut self) {
        self.interrupted = true;
        if self.state == PlaybackState::Playing {
            self.state = PlaybackState::Paused;
        }
    }

    /// The play/pause button.
    pub fn toggle(&mut self) -> PlaybackState {
        if self.is_playing() {
            self.pause();
            self.state
        } else {
            self.play()
        }
    }

    /// A move button was pressed; it takes over from playback.
    pub fn direct_move(&mut self) {
        self.pause();
    }

    /// True while a move taken by playback is waiting for its answer.
    pub fn is_awaiting(&self) -> bool {
        self.awaiting
    }

    /// Take the next symbol to send. Returns `None` unless playing, and while
    /// the previous playback move is unanswered. Playback goes idle as soon as
    /// the last symbol is taken.
    pub fn tick(&mut self) -> Option<char> {
        if !self.is_playing() || self.awaiting {
            return None;
        }
        let symbol = self.queue.pop_front()?;
        self.awaiting = true;
        if self.queue.is_empty() {
            self.state = PlaybackState::Idle;
        }
        Some(symbol)
    }

    /// The playback move in flight was answered and applied (or superseded).
    pub fn settle(&mut self) {
        self.awaiting = false;
    }

    /// A move sent by playback failed. Put it back at the front and pause, so
    /// resuming sends it again instead of skipping it. Does nothing to the
    /// queue if a user action has intervened since playback last started.
    pub fn halt(&mut self, failed: char) {
        self.awaiting = false;
        if self.interrupted {
            return;
        }
        self.queue.push_front(failed);
        self.state = PlaybackState::Paused;
    }
}

/// Playback status for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackStatus {
    pub state: PlaybackState,
    pub queue: String,
}

impl From<&Sequencer> for PlaybackStatus {
    fn from(sequencer: &Sequencer) -> Self {
        Self {
            state: sequencer.state,
            queue: sequencer.queue_text(),
        }
    }
}
