//! pancake-wasm - WebAssembly entry points and bindings for browser execution.
//!
//! The page owns the canvas, the animation frame loop and the host shell; it
//! drives a [`JsGameSession`] and draws whatever [`JsGameSession::snapshot`]
//! returns.

mod logger;

use log::LevelFilter;
use wasm_bindgen::prelude::*;

use pancake_core::ScoreReport;
use pancake_engine::{
    key_command, Command, DropOutcome, GameOverReason, GameSession, PointerTracker, TowerConfig,
};

pub const OUTCOME_COMMITTED: u8 = 0;
pub const OUTCOME_IGNORED: u8 = 1;
pub const OUTCOME_MISSED: u8 = 2;
pub const OUTCOME_TOO_NARROW: u8 = 3;
pub const OUTCOME_REACHED_CEILING: u8 = 4;
/// Input handled without a drop, e.g. a swipe.
pub const OUTCOME_NONE: u8 = 255;

#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logger::init(LevelFilter::Info);
}

/// Change console verbosity: "off", "error", "warn", "info", "debug" or "trace".
#[wasm_bindgen(js_name = setLogLevel)]
pub fn set_log_level(level: &str) -> Result<(), JsError> {
    let level: LevelFilter = level
        .parse()
        .map_err(|_| JsError::new(&format!("unknown log level `{level}`")))?;
    logger::init(level);
    Ok(())
}

#[wasm_bindgen]
pub struct JsGameSession {
    inner: GameSession,
    pointer: PointerTracker,
}

#[wasm_bindgen]
impl JsGameSession {
    /// Classic game with a random seed.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64) -> Result<JsGameSession, JsError> {
        Self::seeded(width, height, random_seed())
    }

    /// Classic game with a fixed seed, for replays and tests.
    pub fn seeded(width: f64, height: f64, seed: u32) -> Result<JsGameSession, JsError> {
        let inner = GameSession::new(width, height, seed as u64)?;
        Ok(Self::wrap(inner))
    }

    /// Game with a custom tuning object. Missing keys keep their classic values;
    /// `null` or `undefined` selects the classic tuning.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(
        width: f64,
        height: f64,
        config: JsValue,
        seed: Option<u32>,
    ) -> Result<JsGameSession, JsError> {
        let config = config_from_js(config)?;
        let seed = seed.unwrap_or_else(random_seed);
        let inner = GameSession::with_config(config, width, height, seed as u64)?;
        Ok(Self::wrap(inner))
    }

    /// Game with exact trimming, no camera and no spawn animation.
    pub fn arcade(width: f64, height: f64) -> Result<JsGameSession, JsError> {
        let inner =
            GameSession::with_config(TowerConfig::arcade(), width, height, random_seed() as u64)?;
        Ok(Self::wrap(inner))
    }

    fn wrap(inner: GameSession) -> Self {
        Self {
            inner,
            pointer: PointerTracker::default(),
        }
    }

    pub fn tick(&mut self, dt: f64) {
        self.inner.tick(dt);
    }

    /// `true` when the game is over or nothing could be dropped.
    #[wasm_bindgen(js_name = requestDrop)]
    pub fn request_drop(&mut self) -> bool {
        self.inner.request_drop()
    }

    /// Like `requestDrop`, returning one of the `OUTCOME_*` codes.
    #[wasm_bindgen(js_name = tryDrop)]
    pub fn try_drop(&mut self) -> u8 {
        outcome_to_u8(self.inner.try_drop())
    }

    #[wasm_bindgen(js_name = nudgeCurrent)]
    pub fn nudge_current(&mut self, dx: f64) -> bool {
        self.inner.nudge_current(dx)
    }

    pub fn reset(&mut self) {
        self.pointer.cancel();
        self.inner.reset();
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.inner.resize(width, height);
    }

    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(&mut self, x: f64) {
        self.pointer.press(x);
    }

    /// Finish a press: a swipe nudges, a tap drops. Returns an `OUTCOME_*` code.
    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(&mut self, x: f64) -> u8 {
        match self.pointer.release(x) {
            Some(command) => self.run(command),
            None => OUTCOME_NONE,
        }
    }

    /// Handle a `KeyboardEvent.key`. Returns an `OUTCOME_*` code.
    #[wasm_bindgen(js_name = keyDown)]
    pub fn key_down(&mut self, key: &str) -> u8 {
        match key_command(key, self.inner.config().nudge_step) {
            Some(command) => self.run(command),
            None => OUTCOME_NONE,
        }
    }

    fn run(&mut self, command: Command) -> u8 {
        match self.inner.apply(command) {
            Some(outcome) => outcome_to_u8(outcome),
            None => OUTCOME_NONE,
        }
    }

    /// Everything needed to draw a frame, as a plain JS object.
    pub fn snapshot(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&self.inner.snapshot())
            .map_err(|err| JsError::new(&err.to_string()))
    }

    #[wasm_bindgen(getter)]
    pub fn score(&self) -> u32 {
        self.inner.score()
    }

    #[wasm_bindgen(getter, js_name = gameOver)]
    pub fn game_over(&self) -> bool {
        self.inner.is_game_over()
    }

    #[wasm_bindgen(getter, js_name = isDropping)]
    pub fn is_dropping(&self) -> bool {
        self.inner.is_dropping()
    }

    #[wasm_bindgen(getter, js_name = cameraOffset)]
    pub fn camera_offset(&self) -> f64 {
        self.inner.camera_offset()
    }

    /// JSON payload for the host shell, stamped with the current time.
    /// The user is attached only when both the id and the name are known.
    #[wasm_bindgen(js_name = scoreReport)]
    pub fn score_report(
        &self,
        user_id: Option<f64>,
        username: Option<String>,
    ) -> Result<String, JsError> {
        let report = ScoreReport::new(self.inner.score(), js_sys::Date::now() as u64);
        let report = match (user_id, username) {
            (Some(id), Some(name)) => report.with_user(id as i64, name),
            _ => report,
        };
        Ok(serde_json::to_string(&report)?)
    }

    /// Message to show when there is no host to report to.
    #[wasm_bindgen(js_name = scoreSummary)]
    pub fn score_summary(&self) -> String {
        ScoreReport::new(self.inner.score(), 0).summary()
    }
}

fn config_from_js(value: JsValue) -> Result<TowerConfig, JsError> {
    if value.is_null() || value.is_undefined() {
        return Ok(TowerConfig::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(|err| JsError::new(&err.to_string()))
}

fn random_seed() -> u32 {
    (js_sys::Math::random() * u32::MAX as f64) as u32
}

fn outcome_to_u8(outcome: DropOutcome) -> u8 {
    match outcome {
        DropOutcome::Committed => OUTCOME_COMMITTED,
        DropOutcome::Ignored => OUTCOME_IGNORED,
        DropOutcome::GameOver(GameOverReason::Missed) => OUTCOME_MISSED,
        DropOutcome::GameOver(GameOverReason::TooNarrow) => OUTCOME_TOO_NARROW,
        DropOutcome::GameOver(GameOverReason::ReachedCeiling) => OUTCOME_REACHED_CEILING,
    }
}
