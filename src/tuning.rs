//! Game balance and world configuration
//!
//! Loaded from an optional JSON file; any field left out keeps its default.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Error raised while reading a tuning file
#[derive(Debug)]
pub enum TuningError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::Io(e) => write!(f, "failed to read tuning file: {}", e),
            TuningError::Parse(e) => write!(f, "invalid tuning file: {}", e),
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TuningError::Io(e) => Some(e),
            TuningError::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for TuningError {
    fn from(e: std::io::Error) -> Self {
        TuningError::Io(e)
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(e: serde_json::Error) -> Self {
        TuningError::Parse(e)
    }
}

/// Every gameplay constant, in logical world units and frames
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === World ===
    pub world_width: f32,
    pub world_height: f32,

    // === Bird ===
    pub bird_x: f32,
    pub bird_radius: f32,
    pub gravity: f32,
    pub flap_impulse: f32,
    pub pitch_down_threshold: f32,
    pub pitch_down_limit: f32,
    pub pitch_down_rate: f32,
    pub pitch_up_limit: f32,
    pub pitch_up_rate: f32,

    // === Pipes ===
    pub pipe_width: f32,
    pub pipe_gap: f32,
    pub spawn_interval: u64,
    pub spawn_margin: f32,
    pub ground_height: f32,
    pub reap_margin: f32,

    // === Difficulty ===
    pub base_speed: f32,
    pub speed_step: f32,
    pub speed_step_interval: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,

            bird_x: BIRD_X,
            bird_radius: BIRD_RADIUS,
            gravity: GRAVITY,
            flap_impulse: FLAP_IMPULSE,
            pitch_down_threshold: PITCH_DOWN_THRESHOLD,
            pitch_down_limit: PITCH_DOWN_LIMIT,
            pitch_down_rate: PITCH_DOWN_RATE,
            pitch_up_limit: PITCH_UP_LIMIT,
            pitch_up_rate: PITCH_UP_RATE,

            pipe_width: PIPE_WIDTH,
            pipe_gap: PIPE_GAP,
            spawn_interval: SPAWN_INTERVAL,
            spawn_margin: SPAWN_MARGIN,
            ground_height: GROUND_HEIGHT,
            reap_margin: REAP_MARGIN,

            base_speed: BASE_SPEED,
            speed_step: SPEED_STEP,
            speed_step_interval: SPEED_STEP_INTERVAL,
        }
    }
}

impl Tuning {
    /// Parse from JSON and sanitize
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        Ok(tuning.sanitized())
    }

    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read a tuning file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Read a tuning file, falling back to defaults on any failure
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path.display());
                tuning
            }
            Err(e) => {
                log::warn!("{} ({}), using default tuning", e, path.display());
                Self::default()
            }
        }
    }

    /// Clamp values the simulation cannot work with
    pub fn sanitized(mut self) -> Self {
        fn finite_or(v: f32, fallback: f32) -> f32 {
            if v.is_finite() { v } else { fallback }
        }

        self.world_width = finite_or(self.world_width, WORLD_WIDTH).max(1.0);
        self.world_height = finite_or(self.world_height, WORLD_HEIGHT).max(1.0);
        self.bird_x = finite_or(self.bird_x, BIRD_X);
        self.bird_radius = finite_or(self.bird_radius, BIRD_RADIUS).max(0.5);
        // Bird must fit between ceiling and floor
        self.bird_radius = self.bird_radius.min(self.world_height / 2.0);
        self.gravity = finite_or(self.gravity, GRAVITY).max(0.0);
        self.flap_impulse = finite_or(self.flap_impulse, FLAP_IMPULSE).max(0.0);
        self.pitch_down_threshold = finite_or(self.pitch_down_threshold, PITCH_DOWN_THRESHOLD);
        self.pitch_down_limit = finite_or(self.pitch_down_limit, PITCH_DOWN_LIMIT);
        self.pitch_down_rate = finite_or(self.pitch_down_rate, PITCH_DOWN_RATE).max(0.0);
        self.pitch_up_limit = finite_or(self.pitch_up_limit, PITCH_UP_LIMIT);
        self.pitch_up_rate = finite_or(self.pitch_up_rate, PITCH_UP_RATE).max(0.0);

        self.pipe_width = finite_or(self.pipe_width, PIPE_WIDTH).max(1.0);
        self.pipe_gap = finite_or(self.pipe_gap, PIPE_GAP).max(1.0);
        self.spawn_interval = self.spawn_interval.max(1);
        self.spawn_margin = finite_or(self.spawn_margin, SPAWN_MARGIN).max(0.0);
        self.ground_height = finite_or(self.ground_height, GROUND_HEIGHT).max(0.0);
        self.reap_margin = finite_or(self.reap_margin, REAP_MARGIN).max(0.0);

        self.base_speed = finite_or(self.base_speed, BASE_SPEED).max(0.0);
        self.speed_step = finite_or(self.speed_step, SPEED_STEP).max(0.0);
        self.speed_step_interval = self.speed_step_interval.max(1);
        self
    }

    /// Valid range for a new pipe's gap top, `(min, max)` with `min <= max`
    ///
    /// Collapses to `(margin, margin)` when the world is too short for the gap.
    pub fn gap_top_range(&self) -> (f32, f32) {
        let min = self.spawn_margin;
        let max = self.world_height - self.pipe_gap - self.spawn_margin - self.ground_height;
        (min, max.max(min))
    }

    /// Whether the world is too short to honor the spawn margins
    pub fn spawn_range_degenerate(&self) -> bool {
        self.world_height - self.pipe_gap - self.spawn_margin - self.ground_height
            < self.spawn_margin
    }

    /// Bird's resting height at session start
    pub fn bird_start_y(&self) -> f32 {
        self.world_height / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let t = Tuning::default();
        assert_eq!(t.pipe_gap, 180.0);
        assert_eq!(t.spawn_interval, 90);
        assert_eq!(t.speed_step_interval, 6);
        assert!((t.gravity - 0.10).abs() < 1e-6);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let t = Tuning::from_json(r#"{ "pipe_gap": 150.0, "gravity": 0.2 }"#).unwrap();
        assert_eq!(t.pipe_gap, 150.0);
        assert!((t.gravity - 0.2).abs() < 1e-6);
        assert_eq!(t.pipe_width, PIPE_WIDTH);
        assert_eq!(t.world_height, WORLD_HEIGHT);
    }

    #[test]
    fn test_json_roundtrip_preserves_values() {
        let mut t = Tuning::default();
        t.base_speed = 3.0;
        let json = t.to_json().unwrap();
        assert_eq!(Tuning::from_json(&json).unwrap(), t);
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = Tuning::from_json("{ not json").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let t = Tuning::load_or_default("/nonexistent/skyflap-tuning.json");
        assert_eq!(t, Tuning::default());
    }

    #[test]
    fn test_sanitize_clamps_degenerate_values() {
        let t = Tuning::from_json(
            r#"{ "bird_radius": -3.0, "pipe_gap": 0.0, "spawn_interval": 0,
                 "speed_step_interval": 0, "base_speed": -1.0 }"#,
        )
        .unwrap();
        assert!(t.bird_radius > 0.0);
        assert!(t.pipe_gap >= 1.0);
        assert_eq!(t.spawn_interval, 1);
        assert_eq!(t.speed_step_interval, 1);
        assert_eq!(t.base_speed, 0.0);
    }

    #[test]
    fn test_gap_top_range_default() {
        let (min, max) = Tuning::default().gap_top_range();
        assert_eq!(min, 40.0);
        // 600 - 180 - 40 - 40
        assert_eq!(max, 340.0);
        assert!(!Tuning::default().spawn_range_degenerate());
    }

    #[test]
    fn test_gap_top_range_collapses_on_small_world() {
        let t = Tuning {
            world_height: 200.0,
            ..Default::default()
        };
        assert!(t.spawn_range_degenerate());
        assert_eq!(t.gap_top_range(), (40.0, 40.0));
    }
}
