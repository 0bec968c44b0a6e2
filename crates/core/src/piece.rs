//! Pancake pieces: rectangular collision geometry plus horizontal motion.

use serde::{Deserialize, Serialize};

/// Colors a pancake can be drawn with, from light to dark.
pub const PALETTE: [&str; 5] = ["#FFE032", "#FFC832", "#FFB432", "#FFA032", "#FF8C32"];

/// Speed restored when a moving piece is found with zero speed.
pub const FALLBACK_SPEED: f64 = 3.0;

/// Horizontal shift applied when a piece fails to move on its own.
pub const STUCK_NUDGE: f64 = 5.0;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    Left,
    #[default]
    Right,
}

impl Direction {
    pub fn sign(self) -> f64 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }

    pub fn flip(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// How the renderer should draw a piece. Collision always uses the rectangle.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default, Serialize, Deserialize)]
pub enum ShapeHint {
    #[default]
    Standard,
    /// Freshly spawned piece still growing to its full width.
    Compact,
}

/// Index into [`PALETTE`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default, Serialize, Deserialize)]
pub struct PieceColor(pub u8);

impl PieceColor {
    pub fn hex(self) -> &'static str {
        PALETTE[self.0 as usize % PALETTE.len()]
    }
}

#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Motion {
    pub direction: Direction,
    /// Displacement per `advance` call.
    pub speed: f64,
    pub is_moving: bool,
}

impl Default for Motion {
    fn default() -> Self {
        Self {
            direction: Direction::Right,
            speed: FALLBACK_SPEED,
            is_moving: false,
        }
    }
}

/// Horizontal intersection of two pieces.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Overlap {
    pub left: f64,
    pub right: f64,
    pub width: f64,
}

/// What happened during a single [`Piece::advance`] call.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct AdvanceReport {
    /// `x` was clamped to a field edge and the direction flipped.
    pub bounced: bool,
    /// Speed was zero and got restored to [`FALLBACK_SPEED`].
    pub speed_restored: bool,
    /// Position did not change; direction was forced and the piece nudged.
    pub unstuck: bool,
}

#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Piece {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: PieceColor,
    pub motion: Motion,
    pub is_placed: bool,
    pub shape_hint: ShapeHint,
}

impl Piece {
    /// A resting piece with no motion.
    pub fn new(x: f64, y: f64, width: f64, height: f64, color: PieceColor) -> Self {
        Self {
            x,
            y,
            width,
            height,
            color,
            motion: Motion::default(),
            is_placed: false,
            shape_hint: ShapeHint::Standard,
        }
    }

    /// A piece sliding horizontally under player control.
    pub fn moving(
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: PieceColor,
        direction: Direction,
        speed: f64,
    ) -> Self {
        Self {
            motion: Motion {
                direction,
                speed,
                is_moving: true,
            },
            ..Self::new(x, y, width, height, color)
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    /// Number of wavy bumps drawn along each edge.
    pub fn wave_count(&self) -> u32 {
        ((self.width / 20.0).floor() as u32).max(3)
    }

    /// Move one fixed step along the current direction, bouncing off the field edges.
    ///
    /// The step is `speed` per call regardless of `_dt`: motion is tied to the
    /// frame cadence, not to wall-clock time.
    pub fn advance(&mut self, field_width: f64, _dt: f64) -> AdvanceReport {
        let mut report = AdvanceReport::default();
        if !self.motion.is_moving || self.is_placed {
            return report;
        }

        if self.motion.speed == 0.0 {
            self.motion.speed = FALLBACK_SPEED;
            report.speed_restored = true;
        }

        let old_x = self.x;
        self.x += self.motion.direction.sign() * self.motion.speed;

        if self.x <= 0.0 {
            self.x = 0.0;
            self.motion.direction = Direction::Right;
            report.bounced = true;
        } else if self.right() >= field_width {
            self.x = (field_width - self.width).max(0.0);
            self.motion.direction = Direction::Left;
            report.bounced = true;
        }

        if !report.bounced && self.x == old_x {
            self.motion.direction = self.motion.direction.flip();
            self.x += self.motion.direction.sign() * STUCK_NUDGE;
            self.clamp_to(field_width);
            report.unstuck = true;
        }

        report
    }

    /// Keep the piece fully inside `[0, field_width]`.
    pub fn clamp_to(&mut self, field_width: f64) {
        let max_x = (field_width - self.width).max(0.0);
        self.x = self.x.clamp(0.0, max_x);
    }

    pub fn overlap_with(&self, other: &Piece) -> Option<Overlap> {
        let left = self.x.max(other.x);
        let right = self.right().min(other.right());
        if left >= right {
            return None;
        }
        Some(Overlap {
            left,
            right,
            width: right - left,
        })
    }

    /// True if any part of `self` hangs past either edge of `below`.
    pub fn overhangs(&self, below: &Piece) -> bool {
        self.x < below.x || self.right() > below.right()
    }
}
