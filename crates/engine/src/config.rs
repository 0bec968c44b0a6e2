//! Tuning constants for a pancake tower session.
//!
//! Distances are in field units (CSS pixels in the browser), durations in
//! milliseconds. Speeds are per `tick` call, not per second.

use pancake_core::PlateLayout;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Fraction of the remaining distance covered per reference frame.
    pub gain: f64,
    /// Frame duration the gain is expressed against (~60 fps).
    pub reference_dt: f64,
    /// Residual below which the camera snaps onto its target.
    pub snap: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            gain: 0.1,
            reference_dt: 16.0,
            snap: 0.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TowerConfig {
    pub piece_height: f64,
    /// Height of the sliding piece, measured from the top of the viewport.
    pub spawn_y: f64,
    /// The first pancake is `min(first_width_max, field_width * first_width_fraction)` wide.
    pub first_width_max: f64,
    pub first_width_fraction: f64,
    /// Starting width of a spawned piece before it grows.
    pub compact_width: f64,
    /// Growth animation length; 0 spawns pieces at full width.
    pub growth_ms: f64,
    pub base_speed: f64,
    pub speed_score_divisor: f64,
    /// Upper bound on the score-based speed bonus.
    pub speed_cap: f64,
    /// Vertical distance covered per tick by a dropping piece.
    pub drop_speed: f64,
    pub drop_epsilon: f64,
    /// Pause between a landing and the next spawn.
    pub respawn_delay_ms: f64,
    /// Share of the raw overlap an overhanging piece keeps.
    pub narrowing_factor: f64,
    /// Narrowest piece that can still be placed.
    pub min_width: f64,
    /// Resting `y` above this line ends the game.
    pub ceiling_margin: f64,
    /// Horizontal step for keyboard nudges.
    pub nudge_step: f64,
    pub camera_follow: bool,
    pub camera: CameraConfig,
    pub plate: PlateLayout,
}

impl TowerConfig {
    /// Narrowing, camera follow and growth animation all enabled.
    pub fn classic() -> Self {
        Self {
            piece_height: 20.0,
            spawn_y: 50.0,
            first_width_max: 200.0,
            first_width_fraction: 0.5,
            compact_width: 40.0,
            growth_ms: 500.0,
            base_speed: 3.0,
            speed_score_divisor: 5.0,
            speed_cap: 7.0,
            drop_speed: 10.0,
            drop_epsilon: 1.0,
            respawn_delay_ms: 100.0,
            narrowing_factor: 0.85,
            min_width: 30.0,
            ceiling_margin: 50.0,
            nudge_step: 20.0,
            camera_follow: true,
            camera: CameraConfig::default(),
            plate: PlateLayout::default(),
        }
    }

    /// Exact overlap trimming, static camera, instant spawns.
    pub fn arcade() -> Self {
        Self {
            growth_ms: 0.0,
            respawn_delay_ms: 0.0,
            narrowing_factor: 1.0,
            speed_cap: 10.0,
            camera_follow: false,
            ..Self::classic()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("piece_height", self.piece_height),
            ("first_width_max", self.first_width_max),
            ("first_width_fraction", self.first_width_fraction),
            ("compact_width", self.compact_width),
            ("base_speed", self.base_speed),
            ("speed_score_divisor", self.speed_score_divisor),
            ("drop_speed", self.drop_speed),
            ("drop_epsilon", self.drop_epsilon),
            ("min_width", self.min_width),
            ("camera.reference_dt", self.camera.reference_dt),
            ("plate.max_width", self.plate.max_width),
            ("plate.width_fraction", self.plate.width_fraction),
            ("plate.height", self.plate.height),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositive { name, value });
            }
        }

        let non_negative = [
            ("spawn_y", self.spawn_y),
            ("growth_ms", self.growth_ms),
            ("speed_cap", self.speed_cap),
            ("respawn_delay_ms", self.respawn_delay_ms),
            ("ceiling_margin", self.ceiling_margin),
            ("nudge_step", self.nudge_step),
            ("camera.gain", self.camera.gain),
            ("camera.snap", self.camera.snap),
            ("plate.bottom_margin", self.plate.bottom_margin),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Negative { name, value });
            }
        }

        if !(self.narrowing_factor > 0.0 && self.narrowing_factor <= 1.0) {
            return Err(ConfigError::NarrowingOutOfRange(self.narrowing_factor));
        }
        Ok(())
    }
}

impl Default for TowerConfig {
    fn default() -> Self {
        Self::classic()
    }
}
