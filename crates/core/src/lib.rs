//! Pancake core crate - fundamental types for the pancake tower game.

mod field;
mod piece;
mod report;
mod snapshot;

pub use field::{Field, Plate, PlateLayout};
pub use piece::{
    AdvanceReport, Direction, Motion, Overlap, Piece, PieceColor, ShapeHint, FALLBACK_SPEED,
    PALETTE, STUCK_NUDGE,
};
pub use report::ScoreReport;
pub use snapshot::GameSnapshot;
