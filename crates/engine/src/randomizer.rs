use pancake_core::{Direction, PieceColor, PALETTE};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded source for the cosmetic and motion choices made at spawn.
#[derive(Debug, Clone)]
pub struct Randomizer {
    rng: StdRng,
}

impl Randomizer {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn color(&mut self) -> PieceColor {
        PieceColor(self.rng.gen_range(0..PALETTE.len()) as u8)
    }

    pub fn direction(&mut self) -> Direction {
        if self.rng.gen_bool(0.5) {
            Direction::Right
        } else {
            Direction::Left
        }
    }
}
