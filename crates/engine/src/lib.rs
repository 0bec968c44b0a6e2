//! pancake-engine - game loop, drop/trim rules and camera for the pancake tower.
//!
//! [`GameSession`] is the single authoritative game. Everything it needs to
//! tune lives in [`TowerConfig`].

pub mod camera;
pub mod config;
pub mod error;
pub mod growth;
pub mod input;
pub mod randomizer;
pub mod session;

pub use camera::Camera;
pub use config::{CameraConfig, TowerConfig};
pub use error::ConfigError;
pub use growth::{ease_out_quad, Growth};
pub use input::{key_command, Command, PointerTracker, SWIPE_THRESHOLD};
pub use randomizer::Randomizer;
pub use session::{DropOutcome, GameOverReason, GameSession};

pub use pancake_core as core;
