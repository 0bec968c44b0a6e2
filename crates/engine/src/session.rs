//! The authoritative game: sliding piece, drop decision, landing animation,
//! camera and score.
//!
//! A session is driven from outside. The render loop calls [`GameSession::tick`]
//! once per frame and reads [`GameSession::snapshot`]; input calls
//! [`GameSession::request_drop`] and [`GameSession::nudge_current`]. Nothing
//! here blocks or touches a rendering surface.

use log::{debug, info, warn};
use pancake_core::{Field, GameSnapshot, Piece, ShapeHint};
use serde::{Deserialize, Serialize};

use crate::camera::Camera;
use crate::config::TowerConfig;
use crate::error::ConfigError;
use crate::growth::Growth;
use crate::input::Command;
use crate::randomizer::Randomizer;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum GameOverReason {
    /// The piece did not touch the one below it.
    Missed,
    /// Trimming left the piece narrower than the minimum width.
    TooNarrow,
    /// The tower reached the top of the field.
    ReachedCeiling,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum DropOutcome {
    /// The piece was trimmed if needed and is falling toward the stack.
    Committed,
    /// Nothing to drop: no piece, a drop already underway, or game over.
    Ignored,
    GameOver(GameOverReason),
}

/// A committed piece on its way down.
#[derive(Clone, Copy, PartialEq, Debug)]
struct Descent {
    piece: Piece,
    target_y: f64,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    config: TowerConfig,
    field: Field,
    stack: Vec<Piece>,
    current: Option<Piece>,
    growth: Option<Growth>,
    descent: Option<Descent>,
    /// Milliseconds left before the next piece spawns.
    respawn_in: Option<f64>,
    camera: Camera,
    score: u32,
    game_over: Option<GameOverReason>,
    randomizer: Randomizer,
}

fn check_field(width: f64, height: f64) -> Result<(), ConfigError> {
    if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidField { width, height })
    }
}

impl GameSession {
    /// Session with the classic tuning.
    pub fn new(width: f64, height: f64, seed: u64) -> Result<Self, ConfigError> {
        Self::with_config(TowerConfig::default(), width, height, seed)
    }

    pub fn with_config(
        config: TowerConfig,
        width: f64,
        height: f64,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        check_field(width, height)?;

        let field = Field::with_layout(width, height, config.plate);
        let mut session = Self {
            config,
            field,
            stack: Vec::new(),
            current: None,
            growth: None,
            descent: None,
            respawn_in: None,
            camera: Camera::default(),
            score: 0,
            game_over: None,
            randomizer: Randomizer::new(seed),
        };
        session.spawn_next();
        Ok(session)
    }

    pub fn config(&self) -> &TowerConfig {
        &self.config
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn stack(&self) -> &[Piece] {
        &self.stack
    }

    pub fn current(&self) -> Option<&Piece> {
        self.current.as_ref()
    }

    pub fn dropping(&self) -> Option<&Piece> {
        self.descent.as_ref().map(|d| &d.piece)
    }

    pub fn drop_target_y(&self) -> Option<f64> {
        self.descent.map(|d| d.target_y)
    }

    pub fn is_dropping(&self) -> bool {
        self.descent.is_some()
    }

    pub fn is_growing(&self) -> bool {
        self.growth.is_some()
    }

    pub fn respawn_pending(&self) -> bool {
        self.respawn_in.is_some()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over.is_some()
    }

    pub fn game_over_reason(&self) -> Option<GameOverReason> {
        self.game_over
    }

    pub fn camera_offset(&self) -> f64 {
        self.camera.offset()
    }

    pub fn target_camera_offset(&self) -> f64 {
        self.camera.target()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            field_width: self.field.width(),
            field_height: self.field.height(),
            plate: self.field.plate(),
            stack: self.stack.clone(),
            current: self.current,
            dropping: self.dropping().copied(),
            camera_offset: self.camera.offset(),
            target_camera_offset: self.camera.target(),
            score: self.score,
            game_over: self.is_game_over(),
        }
    }

    /// Put a fresh sliding piece at the top of the viewport.
    pub fn spawn_next(&mut self) {
        let config = &self.config;
        let field_width = self.field.width();
        // The top of the stack can be wider than a field that shrank since.
        let target_width = match self.stack.last() {
            Some(top) => top.width,
            None => config
                .first_width_max
                .min(field_width * config.first_width_fraction),
        }
        .min(field_width);
        let speed = config.base_speed
            + (self.score as f64 / config.speed_score_divisor).min(config.speed_cap);
        let y = config.spawn_y - self.camera.target();
        let grows = !self.stack.is_empty() && config.growth_ms > 0.0;
        let width = if grows {
            config.compact_width.min(field_width)
        } else {
            target_width
        };

        let mut piece = Piece::moving(
            self.field.centered_x(width),
            y,
            width,
            config.piece_height,
            self.randomizer.color(),
            self.randomizer.direction(),
            speed,
        );
        piece.clamp_to(field_width);

        self.growth = if grows {
            piece.shape_hint = ShapeHint::Compact;
            Some(Growth::new(width, target_width, config.growth_ms))
        } else {
            None
        };
        self.respawn_in = None;
        self.current = Some(piece);
        debug!(
            "spawned piece width={:.1} target_width={:.1} speed={:.2} dir={:?}",
            width, target_width, speed, piece.motion.direction
        );
    }

    /// Advance one animation frame of `dt` milliseconds.
    pub fn tick(&mut self, dt: f64) {
        if self.is_game_over() {
            return;
        }
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

        if self.descent.is_none() {
            self.advance_current(dt);
        }
        self.advance_respawn(dt);
        self.advance_descent();
        if self.config.camera_follow {
            self.camera.update(dt, &self.config.camera);
        }
    }

    fn advance_current(&mut self, dt: f64) {
        let field_width = self.field.width();
        let Some(current) = self.current.as_mut() else {
            return;
        };

        if let Some(growth) = self.growth.as_mut() {
            let center = current.center_x();
            current.width = growth.advance(dt);
            current.x = center - current.width / 2.0;
            current.clamp_to(field_width);
            if growth.is_finished() {
                current.shape_hint = ShapeHint::Standard;
                self.growth = None;
            }
        }

        let report = current.advance(field_width, dt);
        if report.speed_restored {
            warn!("moving piece had zero speed, restored to {}", current.motion.speed);
        }
        if report.unstuck {
            warn!(
                "moving piece was stuck at x={:.1}, direction forced to {:?}",
                current.x, current.motion.direction
            );
        }
    }

    fn advance_respawn(&mut self, dt: f64) {
        let Some(remaining) = self.respawn_in else {
            return;
        };
        let remaining = remaining - dt;
        if remaining <= 0.0 {
            self.spawn_next();
        } else {
            self.respawn_in = Some(remaining);
        }
    }

    fn advance_descent(&mut self) {
        let Some(descent) = self.descent.as_mut() else {
            return;
        };

        let distance = descent.target_y - descent.piece.y;
        if distance.abs() > self.config.drop_epsilon {
            if distance.abs() <= self.config.drop_speed {
                descent.piece.y = descent.target_y;
            } else {
                descent.piece.y += distance.signum() * self.config.drop_speed;
            }
        }

        if (descent.target_y - descent.piece.y).abs() <= self.config.drop_epsilon {
            let mut piece = descent.piece;
            piece.y = descent.target_y;
            self.descent = None;
            self.land(piece);
            if self.config.respawn_delay_ms > 0.0 {
                self.respawn_in = Some(self.config.respawn_delay_ms);
            } else {
                self.spawn_next();
            }
        }
    }

    fn land(&mut self, mut piece: Piece) {
        piece.motion.is_moving = false;
        piece.is_placed = true;
        piece.shape_hint = ShapeHint::Standard;
        self.stack.push(piece);
        debug!(
            "placed piece #{} at x={:.2} y={:.2} width={:.2}",
            self.stack.len(),
            piece.x,
            piece.y,
            piece.width
        );
    }

    /// Drop the sliding piece. Returns `true` when the game is over after the
    /// call, or when there was nothing to drop.
    pub fn request_drop(&mut self) -> bool {
        match self.try_drop() {
            DropOutcome::Committed => self.is_game_over(),
            DropOutcome::Ignored | DropOutcome::GameOver(_) => true,
        }
    }

    /// Decide trim, placement and game over for the sliding piece, then start
    /// its descent.
    pub fn try_drop(&mut self) -> DropOutcome {
        if self.is_game_over() || self.descent.is_some() {
            return DropOutcome::Ignored;
        }
        let Some(mut piece) = self.current else {
            return DropOutcome::Ignored;
        };

        let target_y = match self.stack.last().copied() {
            None => self.field.plate_y() - piece.height,
            Some(top) => {
                let Some(overlap) = piece.overlap_with(&top) else {
                    return self.finish(GameOverReason::Missed);
                };
                if piece.overhangs(&top) {
                    let width = overlap.width * self.config.narrowing_factor;
                    if width < self.config.min_width {
                        return self.finish(GameOverReason::TooNarrow);
                    }
                    piece.x = overlap.left + (overlap.width - width) / 2.0;
                    piece.width = width;
                    debug!(
                        "trimmed piece to width={:.2} at x={:.2} (overlap {:.2})",
                        width, piece.x, overlap.width
                    );
                }
                top.y - piece.height
            }
        };

        // Whatever growth was left is frozen at the width the piece has now.
        self.current = None;
        self.growth = None;
        piece.motion.is_moving = false;
        piece.shape_hint = ShapeHint::Standard;
        self.score += 1;

        if target_y < self.config.ceiling_margin {
            piece.y = target_y;
            self.land(piece);
            return self.finish(GameOverReason::ReachedCeiling);
        }

        self.descent = Some(Descent { piece, target_y });
        debug!("committed drop toward y={:.2}, score={}", target_y, self.score);

        if self.config.camera_follow {
            if let Some(deficit) = self.camera.follow(target_y, self.field.upper_third()) {
                debug!(
                    "camera target raised by {:.2} to {:.2}",
                    deficit,
                    self.camera.target()
                );
            }
        }
        DropOutcome::Committed
    }

    fn finish(&mut self, reason: GameOverReason) -> DropOutcome {
        self.game_over = Some(reason);
        info!("game over ({:?}) with score {}", reason, self.score);
        DropOutcome::GameOver(reason)
    }

    /// Shift the sliding piece horizontally, staying inside the field.
    /// Returns whether anything moved.
    pub fn nudge_current(&mut self, dx: f64) -> bool {
        if self.is_game_over() || self.descent.is_some() || !dx.is_finite() {
            return false;
        }
        let field_width = self.field.width();
        match self.current.as_mut() {
            Some(current) => {
                let before = current.x;
                current.x += dx;
                current.clamp_to(field_width);
                current.x != before
            }
            None => false,
        }
    }

    /// Run a translated input command. Only drops produce an outcome.
    pub fn apply(&mut self, command: Command) -> Option<DropOutcome> {
        match command {
            Command::Drop => Some(self.try_drop()),
            Command::Nudge(dx) => {
                self.nudge_current(dx);
                None
            }
        }
    }

    /// Back to an empty plate and a fresh piece, keeping the field and tuning.
    pub fn reset(&mut self) {
        self.score = 0;
        self.stack.clear();
        self.game_over = None;
        self.camera.reset();
        self.descent = None;
        self.growth = None;
        self.respawn_in = None;
        self.current = None;
        self.spawn_next();
        debug!("session reset");
    }

    /// New field size. Invalid sizes are ignored. The sliding piece is kept
    /// inside the new width; a falling piece keeps its absolute target.
    pub fn resize(&mut self, width: f64, height: f64) {
        if let Err(err) = check_field(width, height) {
            warn!("ignoring resize: {}", err);
            return;
        }
        self.field.resize(width, height);
        if let Some(growth) = self.growth.as_mut() {
            growth.cap(width);
        }
        if let Some(current) = self.current.as_mut() {
            current.width = current.width.min(width);
            current.clamp_to(width);
        }
        debug!("field resized to {}x{}", width, height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pancake_core::{Direction, PieceColor};

    fn arcade(width: f64, height: f64) -> GameSession {
        GameSession::with_config(TowerConfig::arcade(), width, height, 1).unwrap()
    }

    fn classic(width: f64, height: f64) -> GameSession {
        GameSession::with_config(TowerConfig::classic(), width, height, 1).unwrap()
    }

    fn placed(x: f64, y: f64, width: f64) -> Piece {
        let mut p = Piece::new(x, y, width, 20.0, PieceColor(0));
        p.is_placed = true;
        p
    }

    fn slider(x: f64, width: f64) -> Piece {
        Piece::moving(x, 50.0, width, 20.0, PieceColor(1), Direction::Right, 3.0)
    }

    fn finish_drop(session: &mut GameSession) {
        for _ in 0..1_000 {
            if session.current().is_some() && !session.is_dropping() {
                return;
            }
            session.tick(16.0);
        }
        panic!("drop never finished");
    }

    #[test]
    fn test_new_session_state() {
        let s = classic(600.0, 800.0);
        let current = s.current().unwrap();
        assert_eq!(s.score(), 0);
        assert!(s.stack().is_empty());
        assert!(!s.is_game_over());
        assert_eq!(current.width, 200.0);
        assert_eq!(current.x, 200.0);
        assert_eq!(current.y, 50.0);
        assert_eq!(current.motion.speed, 3.0);
        assert!(current.motion.is_moving);
        assert_eq!(current.shape_hint, ShapeHint::Standard);
    }

    #[test]
    fn test_first_width_is_fraction_of_narrow_field() {
        let s = classic(300.0, 800.0);
        assert_eq!(s.current().unwrap().width, 150.0);
    }

    #[test]
    fn test_rejects_bad_field() {
        assert_eq!(
            GameSession::new(0.0, 800.0, 1).unwrap_err(),
            ConfigError::InvalidField {
                width: 0.0,
                height: 800.0
            }
        );
        assert!(GameSession::new(600.0, f64::NAN, 1).is_err());
    }

    #[test]
    fn test_first_drop_lands_on_plate() {
        let mut s = arcade(600.0, 800.0);
        assert!(!s.request_drop());
        assert_eq!(s.score(), 1);
        assert!(s.current().is_none());
        assert_eq!(s.drop_target_y(), Some(680.0));

        finish_drop(&mut s);
        assert_eq!(s.stack().len(), 1);
        let base = s.stack()[0];
        assert_eq!(base.y, 680.0);
        assert!(base.is_placed);
        assert!(!base.motion.is_moving);
    }

    #[test]
    fn test_drop_ignored_while_descending() {
        let mut s = arcade(600.0, 800.0);
        assert_eq!(s.try_drop(), DropOutcome::Committed);
        assert_eq!(s.try_drop(), DropOutcome::Ignored);
        assert!(s.request_drop());
        assert!(!s.is_game_over());
        assert_eq!(s.score(), 1);
    }

    #[test]
    fn test_descent_never_overshoots() {
        let mut s = arcade(600.0, 800.0);
        s.try_drop();
        let target = s.drop_target_y().unwrap();
        while let Some(piece) = s.dropping() {
            assert!(piece.y <= target);
            s.tick(16.0);
        }
        assert_eq!(s.stack()[0].y, target);
    }

    #[test]
    fn test_miss_ends_game() {
        let mut s = arcade(600.0, 800.0);
        s.stack.push(placed(100.0, 680.0, 100.0));
        s.current = Some(slider(250.0, 50.0));

        assert!(s.request_drop());
        assert!(s.is_game_over());
        assert_eq!(s.game_over_reason(), Some(GameOverReason::Missed));
        assert_eq!(s.score(), 0);
        assert_eq!(s.stack().len(), 1);
    }

    #[test]
    fn test_trim_narrows_and_recenters() {
        let mut s = classic(600.0, 800.0);
        s.stack.push(placed(100.0, 680.0, 100.0));
        s.score = 1;
        s.current = Some(slider(150.0, 100.0));
        s.growth = None;

        assert_eq!(s.try_drop(), DropOutcome::Committed);
        assert_eq!(s.score(), 2);
        let dropping = s.dropping().unwrap();
        assert!((dropping.width - 42.5).abs() < 1e-9);
        assert!((dropping.x - 153.75).abs() < 1e-9);
        assert_eq!(s.drop_target_y(), Some(660.0));
    }

    #[test]
    fn test_contained_piece_is_not_trimmed() {
        let mut s = classic(600.0, 800.0);
        s.stack.push(placed(100.0, 680.0, 100.0));
        s.current = Some(slider(120.0, 50.0));
        s.growth = None;

        assert_eq!(s.try_drop(), DropOutcome::Committed);
        let dropping = s.dropping().unwrap();
        assert_eq!(dropping.width, 50.0);
        assert_eq!(dropping.x, 120.0);
    }

    #[test]
    fn test_too_narrow_ends_game() {
        let mut s = classic(600.0, 800.0);
        s.stack.push(placed(100.0, 680.0, 100.0));
        s.score = 1;
        // Overlap of 30 shrinks to 25.5.
        s.current = Some(slider(170.0, 100.0));
        s.growth = None;

        assert!(s.request_drop());
        assert_eq!(s.game_over_reason(), Some(GameOverReason::TooNarrow));
        assert_eq!(s.score(), 1);
        assert_eq!(s.stack().len(), 1);
    }

    #[test]
    fn test_ceiling_places_final_piece() {
        let mut s = arcade(600.0, 800.0);
        s.stack.push(placed(100.0, 60.0, 100.0));
        s.score = 30;
        s.current = Some(slider(100.0, 100.0));

        assert!(s.request_drop());
        assert_eq!(s.game_over_reason(), Some(GameOverReason::ReachedCeiling));
        assert_eq!(s.score(), 31);
        assert_eq!(s.stack().len(), 2);
        assert_eq!(s.stack()[1].y, 40.0);
        assert!(s.dropping().is_none());
    }

    #[test]
    fn test_game_over_freezes_tick() {
        let mut s = arcade(600.0, 800.0);
        s.stack.push(placed(100.0, 680.0, 100.0));
        s.current = Some(slider(250.0, 50.0));
        s.request_drop();

        let before = s.snapshot();
        for _ in 0..10 {
            s.tick(16.0);
        }
        assert_eq!(s.snapshot(), before);
        assert!(!s.nudge_current(10.0));
    }

    #[test]
    fn test_respawn_waits_for_delay() {
        let mut s = classic(600.0, 800.0);
        s.try_drop();
        while s.is_dropping() {
            s.tick(16.0);
        }
        assert!(s.current().is_none());
        assert!(s.respawn_pending());
        assert!(s.request_drop());
        assert!(!s.is_game_over());

        for _ in 0..7 {
            s.tick(16.0);
        }
        assert!(s.current().is_some());
        assert!(!s.respawn_pending());
    }

    #[test]
    fn test_spawn_after_placement_grows() {
        let mut s = classic(600.0, 800.0);
        s.try_drop();
        finish_drop(&mut s);

        let current = *s.current().unwrap();
        assert_eq!(current.width, 40.0);
        assert_eq!(current.shape_hint, ShapeHint::Compact);
        assert!(s.is_growing());

        for _ in 0..40 {
            s.tick(16.0);
        }
        let current = *s.current().unwrap();
        assert!(!s.is_growing());
        assert_eq!(current.width, 200.0);
        assert_eq!(current.shape_hint, ShapeHint::Standard);
    }

    #[test]
    fn test_drop_mid_growth_uses_current_width() {
        let mut s = classic(600.0, 800.0);
        s.try_drop();
        finish_drop(&mut s);
        s.tick(16.0);

        let width = s.current().unwrap().width;
        assert!(width > 40.0 && width < 200.0);
        let center = s.stack()[0].center_x();
        let current = s.current.as_mut().unwrap();
        current.x = center - current.width / 2.0;

        assert_eq!(s.try_drop(), DropOutcome::Committed);
        assert_eq!(s.dropping().unwrap().width, width);
        assert_eq!(s.dropping().unwrap().shape_hint, ShapeHint::Standard);
        assert!(!s.is_growing());
    }

    #[test]
    fn test_speed_grows_with_score_and_caps() {
        let mut s = arcade(600.0, 800.0);
        s.score = 10;
        s.spawn_next();
        assert_eq!(s.current().unwrap().motion.speed, 5.0);

        s.score = 500;
        s.spawn_next();
        assert_eq!(s.current().unwrap().motion.speed, 13.0);
    }

    #[test]
    fn test_nudge_clamps_to_field() {
        let mut s = arcade(600.0, 800.0);
        assert!(s.nudge_current(-1_000.0));
        assert_eq!(s.current().unwrap().x, 0.0);
        assert!(s.nudge_current(1_000.0));
        assert_eq!(s.current().unwrap().x, 400.0);
        assert!(!s.nudge_current(5.0));
    }

    #[test]
    fn test_nudge_ignored_mid_drop() {
        let mut s = arcade(600.0, 800.0);
        s.try_drop();
        assert!(!s.nudge_current(10.0));
    }

    #[test]
    fn test_apply_commands() {
        let mut s = arcade(600.0, 800.0);
        assert_eq!(s.apply(Command::Nudge(-1_000.0)), None);
        assert_eq!(s.current().unwrap().x, 0.0);
        assert_eq!(s.apply(Command::Drop), Some(DropOutcome::Committed));
    }

    #[test]
    fn test_camera_follows_tall_tower() {
        let mut s = classic(600.0, 600.0);
        // Upper third is 200; a top at 210 still fits.
        s.stack.push(placed(200.0, 230.0, 200.0));
        s.current = Some(slider(200.0, 200.0));
        s.growth = None;
        s.try_drop();
        assert_eq!(s.target_camera_offset(), 0.0);

        finish_drop(&mut s);
        s.growth = None;
        let current = s.current.as_mut().unwrap();
        current.width = 200.0;
        current.x = 200.0;
        s.try_drop();
        assert_eq!(s.drop_target_y(), Some(190.0));
        assert_eq!(s.target_camera_offset(), 10.0);
    }

    #[test]
    fn test_spawn_tracks_camera() {
        let mut s = classic(600.0, 600.0);
        s.camera.follow(100.0, 200.0);
        s.spawn_next();
        assert_eq!(s.current().unwrap().y, -50.0);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut s = classic(600.0, 800.0);
        s.stack.push(placed(100.0, 680.0, 100.0));
        s.score = 4;
        s.camera.follow(100.0, 300.0);
        s.current = Some(slider(250.0, 50.0));
        s.request_drop();
        assert!(s.is_game_over());

        s.reset();
        assert_eq!(s.score(), 0);
        assert!(s.stack().is_empty());
        assert!(!s.is_game_over());
        assert_eq!(s.camera_offset(), 0.0);
        assert_eq!(s.target_camera_offset(), 0.0);
        assert!(s.dropping().is_none());
        assert!(!s.respawn_pending());
        let current = s.current().unwrap();
        assert_eq!(current.width, 200.0);
        assert_eq!(current.y, 50.0);
    }

    #[test]
    fn test_reset_mid_descent_discards_animation() {
        let mut s = classic(600.0, 800.0);
        s.try_drop();
        s.tick(16.0);
        s.reset();
        assert!(!s.is_dropping());
        assert!(s.current().is_some());
        assert!(!s.is_growing());
    }

    #[test]
    fn test_resize_keeps_descent_target() {
        let mut s = arcade(600.0, 800.0);
        s.try_drop();
        s.resize(400.0, 500.0);
        assert_eq!(s.drop_target_y(), Some(680.0));
        assert_eq!(s.field().plate_y(), 400.0);
    }

    #[test]
    fn test_resize_clamps_current() {
        let mut s = arcade(600.0, 800.0);
        s.nudge_current(1_000.0);
        s.resize(300.0, 800.0);
        let current = s.current().unwrap();
        assert_eq!(current.x, 100.0);
        assert!(current.right() <= 300.0);

        s.resize(-1.0, 800.0);
        assert_eq!(s.field().width(), 300.0);
    }

    #[test]
    fn test_spawn_after_shrink_fits_field() {
        let mut s = arcade(600.0, 800.0);
        s.try_drop();
        s.resize(150.0, 800.0);
        finish_drop(&mut s);
        assert_eq!(s.stack()[0].width, 200.0);

        for _ in 0..200 {
            let current = s.current().unwrap();
            assert_eq!(current.width, 150.0);
            assert!(current.x >= 0.0);
            assert!(current.right() <= 150.0);
            s.tick(16.0);
        }
    }

    #[test]
    fn test_shrink_during_growth_caps_width() {
        let mut s = classic(600.0, 800.0);
        s.try_drop();
        finish_drop(&mut s);
        assert!(s.is_growing());
        s.tick(16.0);

        s.resize(180.0, 800.0);
        for _ in 0..60 {
            s.tick(16.0);
            let current = s.current().unwrap();
            assert!(current.right() <= 180.0, "right={}", current.right());
        }
        assert!(!s.is_growing());
        assert_eq!(s.current().unwrap().width, 180.0);
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut a = GameSession::new(600.0, 800.0, 99).unwrap();
        let mut b = GameSession::new(600.0, 800.0, 99).unwrap();
        for frame in 0..300 {
            if frame % 45 == 0 {
                a.request_drop();
                b.request_drop();
            }
            a.tick(16.0);
            b.tick(16.0);
        }
        assert_eq!(a.snapshot(), b.snapshot());
    }
}
