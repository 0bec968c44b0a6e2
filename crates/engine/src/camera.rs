//! Vertical camera that follows the top of the tower.
//!
//! Screen position is `world_y + offset`: raising the offset pushes the tower
//! down the viewport.

use serde::{Deserialize, Serialize};

use crate::config::CameraConfig;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Camera {
    offset: f64,
    target: f64,
}

impl Camera {
    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Raise the target when `top_y`, as currently drawn, sits above
    /// `threshold` on screen. Returns the added amount when the camera had to
    /// move.
    ///
    /// The screen position uses the eased `offset`, not the target, so a drop
    /// made while the camera is still catching up adds the full visible
    /// deficit on top of the pending target.
    pub fn follow(&mut self, top_y: f64, threshold: f64) -> Option<f64> {
        let screen_y = top_y + self.offset;
        if screen_y < threshold {
            let deficit = threshold - screen_y;
            self.target += deficit;
            Some(deficit)
        } else {
            None
        }
    }

    /// Exponential approach toward the target, frame-rate compensated.
    pub fn update(&mut self, dt: f64, config: &CameraConfig) {
        let residual = self.target - self.offset;
        if residual.abs() > config.snap {
            let factor = (config.gain * dt / config.reference_dt).min(1.0);
            self.offset += residual * factor;
        } else {
            self.offset = self.target;
        }
    }
}
