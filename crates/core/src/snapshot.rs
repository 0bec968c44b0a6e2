//! Read-only view of a game handed to the renderer each frame.

use crate::{Piece, Plate};
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub field_width: f64,
    pub field_height: f64,
    pub plate: Plate,
    /// Placed pieces, bottom to top.
    pub stack: Vec<Piece>,
    pub current: Option<Piece>,
    pub dropping: Option<Piece>,
    pub camera_offset: f64,
    pub target_camera_offset: f64,
    pub score: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn top(&self) -> Option<&Piece> {
        self.stack.last()
    }

    pub fn is_dropping(&self) -> bool {
        self.dropping.is_some()
    }

    /// Every visible piece in draw order: stack, then the falling piece, then the slider.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.stack
            .iter()
            .chain(self.dropping.iter())
            .chain(self.current.iter())
    }

    /// Vertical screen position of a world-space `y`.
    pub fn screen_y(&self, y: f64) -> f64 {
        y + self.camera_offset
    }
}
