//! Skyflap - A single-screen gap-flying arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bird physics, pipe stream, collisions, scoring)
//! - `game`: Loop controller (Idle / Running / GameOver state machine)
//! - `renderer`: Render surface hand-off and frame tessellation
//! - `platform`: Frame scheduling, input mapping, display scaling
//! - `tuning`: Data-driven game balance
//! - `highscores`: In-memory best score tracking

pub mod game;
pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use game::{GameLoop, START_MESSAGE, game_over_message};
pub use highscores::HighScores;
pub use tuning::{Tuning, TuningError};

use glam::Vec2;

/// Default gameplay constants (all overridable through [`Tuning`])
pub mod consts {
    /// Logical world size (simulation units, independent of display scale)
    pub const WORLD_WIDTH: f32 = 400.0;
    pub const WORLD_HEIGHT: f32 = 600.0;

    /// Bird defaults - x never changes during a session
    pub const BIRD_X: f32 = 80.0;
    pub const BIRD_RADIUS: f32 = 16.0;
    /// Downward acceleration per frame
    pub const GRAVITY: f32 = 0.10;
    /// Upward velocity set by a flap (replaces current velocity)
    pub const FLAP_IMPULSE: f32 = 3.5;

    /// Pitch animation: nose dives once falling faster than this
    pub const PITCH_DOWN_THRESHOLD: f32 = 1.5;
    pub const PITCH_DOWN_LIMIT: f32 = std::f32::consts::FRAC_PI_2;
    pub const PITCH_DOWN_RATE: f32 = 0.08;
    pub const PITCH_UP_LIMIT: f32 = -0.6;
    pub const PITCH_UP_RATE: f32 = 0.12;

    /// Pipe defaults
    pub const PIPE_WIDTH: f32 = 60.0;
    pub const PIPE_GAP: f32 = 180.0;
    /// Frames between spawns
    pub const SPAWN_INTERVAL: u64 = 90;
    /// Minimum distance between a gap edge and the world edge
    pub const SPAWN_MARGIN: f32 = 40.0;
    /// Ground strip height (cosmetic, but kept out of the spawn range)
    pub const GROUND_HEIGHT: f32 = 40.0;
    /// Pipes are dropped once their right edge is this far left of the screen
    pub const REAP_MARGIN: f32 = 30.0;

    /// Scroll speed (units per frame)
    pub const BASE_SPEED: f32 = 2.2;
    pub const SPEED_STEP: f32 = 0.12;
    /// Every N points the speed steps up
    pub const SPEED_STEP_INTERVAL: u32 = 6;
}

/// Rotate a point around the origin by `angle` radians
#[inline]
pub fn rotate(point: Vec2, angle: f32) -> Vec2 {
    Vec2::from_angle(angle).rotate(point)
}
