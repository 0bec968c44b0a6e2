//! Translation of raw pointer and keyboard events into game commands.

use serde::{Deserialize, Serialize};

/// Horizontal travel that turns a tap into a swipe.
pub const SWIPE_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Command {
    Drop,
    /// Shift the sliding piece horizontally by this many units.
    Nudge(f64),
}

/// Remembers where a press started and classifies the release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerTracker {
    start_x: Option<f64>,
    threshold: f64,
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new(SWIPE_THRESHOLD)
    }
}

impl PointerTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            start_x: None,
            threshold,
        }
    }

    pub fn press(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    /// A release without a matching press is ignored.
    pub fn release(&mut self, x: f64) -> Option<Command> {
        let start = self.start_x.take()?;
        let distance = x - start;
        if distance.abs() > self.threshold {
            Some(Command::Nudge(distance))
        } else {
            Some(Command::Drop)
        }
    }

    pub fn cancel(&mut self) {
        self.start_x = None;
    }
}

/// Map a DOM `KeyboardEvent.key` value.
pub fn key_command(key: &str, nudge_step: f64) -> Option<Command> {
    match key {
        " " | "Spacebar" | "Enter" | "ArrowDown" => Some(Command::Drop),
        "ArrowLeft" => Some(Command::Nudge(-nudge_step)),
        "ArrowRight" => Some(Command::Nudge(nudge_step)),
        _ => None,
    }
}
