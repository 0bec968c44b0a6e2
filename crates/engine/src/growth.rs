//! Spawn animation: a compact piece widening to its full size.

use serde::{Deserialize, Serialize};

/// Quadratic ease-out: fast start, gentle finish. Monotonic on `[0, 1]`.
pub fn ease_out_quad(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * (2.0 - t)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Growth {
    from_width: f64,
    to_width: f64,
    duration_ms: f64,
    elapsed_ms: f64,
}

impl Growth {
    pub fn new(from_width: f64, to_width: f64, duration_ms: f64) -> Self {
        Self {
            from_width,
            to_width,
            duration_ms,
            elapsed_ms: 0.0,
        }
    }

    pub fn progress(&self) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (self.elapsed_ms / self.duration_ms).min(1.0)
    }

    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }

    pub fn width(&self) -> f64 {
        self.from_width + (self.to_width - self.from_width) * ease_out_quad(self.progress())
    }

    /// Keep both ends of the animation within `max_width`, e.g. after the
    /// field shrinks.
    pub fn cap(&mut self, max_width: f64) {
        self.from_width = self.from_width.min(max_width);
        self.to_width = self.to_width.min(max_width);
    }

    /// Move the clock forward and return the new width.
    pub fn advance(&mut self, dt: f64) -> f64 {
        self.elapsed_ms += dt.max(0.0);
        self.width()
    }
}
