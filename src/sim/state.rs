//! Game state and core simulation types
//!
//! The `Session` aggregate owns everything a tick mutates. Nothing outside the
//! crate can poke at step-internal state; input goes through `GameLoop`.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Termination;
use super::stream::PipeStream;
use crate::highscores::HighScores;
use crate::tuning::Tuning;

/// Current phase of the session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Not started yet, waiting for the first flap
    Idle,
    /// Simulation advancing one step per frame signal
    Running,
    /// Crashed, waiting for a flap to start over
    GameOver,
}

/// Which world boundary the bird touched during an update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryHit {
    None,
    /// Clamped and stopped, session continues
    Ceiling,
    /// Clamped, session ends
    Floor,
}

/// Pitch animation parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PitchProfile {
    /// Falling faster than this tips the nose down
    pub down_threshold: f32,
    pub down_limit: f32,
    pub down_rate: f32,
    pub up_limit: f32,
    pub up_rate: f32,
}

/// The player-controlled bird
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bird {
    /// Center position (x is fixed for the whole session)
    pub pos: Vec2,
    pub radius: f32,
    /// Vertical velocity (positive = down)
    pub vel_y: f32,
    /// Pitch in radians (positive = nose down)
    pub rotation: f32,
    pub gravity: f32,
    pub flap_impulse: f32,
    pub pitch: PitchProfile,
    start_y: f32,
}

impl Bird {
    pub fn new(tuning: &Tuning) -> Self {
        let start_y = tuning.bird_start_y();
        Self {
            pos: Vec2::new(tuning.bird_x, start_y),
            radius: tuning.bird_radius,
            vel_y: 0.0,
            rotation: 0.0,
            gravity: tuning.gravity,
            flap_impulse: tuning.flap_impulse,
            pitch: PitchProfile {
                down_threshold: tuning.pitch_down_threshold,
                down_limit: tuning.pitch_down_limit,
                down_rate: tuning.pitch_down_rate,
                up_limit: tuning.pitch_up_limit,
                up_rate: tuning.pitch_up_rate,
            },
            start_y,
        }
    }

    /// Back to the vertical center, at rest and level
    pub fn reset(&mut self) {
        self.pos.y = self.start_y;
        self.vel_y = 0.0;
        self.rotation = 0.0;
    }

    /// Set velocity to the upward impulse (replaces, never adds)
    pub fn flap(&mut self) {
        self.vel_y = -self.flap_impulse;
    }

    /// Advance one frame of gravity, pitch and boundary clamping
    pub fn update(&mut self, world_height: f32) -> BoundaryHit {
        self.vel_y += self.gravity;
        self.pos.y += self.vel_y;

        let p = self.pitch;
        if self.vel_y > p.down_threshold {
            self.rotation = (self.rotation + p.down_rate).min(p.down_limit);
        } else {
            self.rotation = (self.rotation - p.up_rate).max(p.up_limit);
        }

        let mut hit = BoundaryHit::None;
        if self.bottom() >= world_height {
            self.pos.y = world_height - self.radius;
            hit = BoundaryHit::Floor;
        }
        if self.top() <= 0.0 {
            self.pos.y = self.radius;
            self.vel_y = 0.0;
            if hit == BoundaryHit::None {
                hit = BoundaryHit::Ceiling;
            }
        }
        hit
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }
}

/// A gap obstacle: solid above `top` and below `bottom`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pipe {
    /// Left edge
    pub x: f32,
    top: f32,
    bottom: f32,
    passed: bool,
}

impl Pipe {
    pub fn new(x: f32, top: f32, gap: f32) -> Self {
        Self {
            x,
            top,
            bottom: top + gap,
            passed: false,
        }
    }

    /// Bottom edge of the upper body
    #[inline]
    pub fn top(&self) -> f32 {
        self.top
    }

    /// Top edge of the lower body
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.bottom
    }

    #[inline]
    pub fn gap(&self) -> f32 {
        self.bottom - self.top
    }

    #[inline]
    pub fn passed(&self) -> bool {
        self.passed
    }

    /// Mark as passed. Returns true only the first time.
    pub fn mark_passed(&mut self) -> bool {
        let newly = !self.passed;
        self.passed = true;
        newly
    }

    /// Height of the lower body, never negative
    pub fn lower_height(&self, world_height: f32) -> f32 {
        (world_height - self.bottom).max(0.0)
    }
}

/// Serializable view of a session (debug dumps)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub frame: u64,
    pub score: u32,
    pub best: u32,
    pub speed: f32,
    pub phase: GamePhase,
    pub bird: Bird,
    pub pipes: Vec<Pipe>,
}

/// Complete session state, exclusively owned by the loop controller
#[derive(Debug, Clone)]
pub struct Session {
    /// Seed for the pipe layout RNG
    pub(crate) seed: u64,
    pub(crate) rng: Pcg32,
    pub(crate) tuning: Tuning,
    pub(crate) bird: Bird,
    pub(crate) pipes: PipeStream,
    /// Frames since the session started
    pub(crate) frame: u64,
    pub(crate) score: u32,
    pub(crate) speed: f32,
    pub(crate) phase: GamePhase,
    pub(crate) high_scores: HighScores,
    pub(crate) last_termination: Option<Termination>,
}

impl Session {
    /// Create an idle session with the given tuning and seed
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        let tuning = tuning.sanitized();
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            bird: Bird::new(&tuning),
            pipes: PipeStream::new(),
            frame: 0,
            score: 0,
            speed: tuning.base_speed,
            phase: GamePhase::Idle,
            high_scores: HighScores::new(),
            last_termination: None,
            tuning,
        }
    }

    /// Start a fresh session (the RNG stream carries on)
    pub fn reset_session(&mut self) {
        self.pipes.clear();
        self.frame = 0;
        self.score = 0;
        self.speed = self.tuning.base_speed;
        self.phase = GamePhase::Running;
        self.last_termination = None;
        self.bird.reset();
        log::info!("Session started (seed {})", self.seed);
    }

    /// End the session and fold the score into the high scores
    pub fn record_game_over(&mut self, cause: Termination) {
        self.phase = GamePhase::GameOver;
        self.last_termination = Some(cause);
        self.high_scores.record(self.score, self.frame);
        log::info!(
            "Game over ({:?}): score {}, best {}, {} frames",
            cause,
            self.score,
            self.high_scores.best(),
            self.frame
        );
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn bird(&self) -> &Bird {
        &self.bird
    }

    pub fn pipes(&self) -> &PipeStream {
        &self.pipes
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_scores.best()
    }

    pub fn high_scores(&self) -> &HighScores {
        &self.high_scores
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Why the last session ended, if it has
    pub fn last_termination(&self) -> Option<Termination> {
        self.last_termination
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            frame: self.frame,
            score: self.score,
            best: self.high_scores.best(),
            speed: self.speed,
            phase: self.phase,
            bird: self.bird.clone(),
            pipes: self.pipes.as_slice().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bird() -> Bird {
        Bird::new(&Tuning::default())
    }

    #[test]
    fn test_bird_one_update_from_rest() {
        let mut b = bird();
        assert_eq!(b.pos.y, 300.0);

        let hit = b.update(600.0);
        assert_eq!(hit, BoundaryHit::None);
        assert!((b.vel_y - 0.10).abs() < 1e-6);
        assert!((b.pos.y - 300.10).abs() < 1e-4);
    }

    #[test]
    fn test_flap_overrides_velocity() {
        let mut b = bird();
        b.vel_y = 7.0;
        b.flap();
        assert_eq!(b.vel_y, -3.5);
        b.flap();
        assert_eq!(b.vel_y, -3.5);
    }

    #[test]
    fn test_ceiling_clamps_without_ending() {
        let mut b = bird();
        b.pos.y = 17.0;
        b.vel_y = -3.5;

        let hit = b.update(600.0);
        assert_eq!(hit, BoundaryHit::Ceiling);
        assert_eq!(b.pos.y, b.radius);
        assert_eq!(b.vel_y, 0.0);
    }

    #[test]
    fn test_floor_clamps_and_signals() {
        let mut b = bird();
        b.pos.y = 583.0;
        b.vel_y = 2.0;

        let hit = b.update(600.0);
        assert_eq!(hit, BoundaryHit::Floor);
        assert_eq!(b.pos.y, 600.0 - b.radius);
    }

    #[test]
    fn test_pitch_eases_down_when_falling_fast() {
        let mut b = bird();
        b.vel_y = 3.0;
        b.update(600.0);
        assert!((b.rotation - 0.08).abs() < 1e-6);

        for _ in 0..100 {
            b.vel_y = 3.0;
            b.pos.y = 300.0;
            b.update(600.0);
        }
        assert_eq!(b.rotation, std::f32::consts::FRAC_PI_2);
    }

    #[test]
    fn test_pitch_recovers_up_to_limit() {
        let mut b = bird();
        b.flap();
        b.update(600.0);
        assert!((b.rotation + 0.12).abs() < 1e-6);

        for _ in 0..20 {
            b.flap();
            b.pos.y = 300.0;
            b.update(600.0);
        }
        assert_eq!(b.rotation, -0.6);
    }

    #[test]
    fn test_bird_reset() {
        let mut b = bird();
        b.pos.y = 42.0;
        b.vel_y = 5.0;
        b.rotation = 1.0;
        b.reset();
        assert_eq!(b.pos, Vec2::new(80.0, 300.0));
        assert_eq!(b.vel_y, 0.0);
        assert_eq!(b.rotation, 0.0);
    }

    #[test]
    fn test_pipe_gap_and_pass_flag() {
        let mut p = Pipe::new(400.0, 40.0, 180.0);
        assert_eq!(p.bottom(), 220.0);
        assert_eq!(p.gap(), 180.0);
        assert!(p.mark_passed());
        assert!(!p.mark_passed());
        assert!(p.passed());
    }

    #[test]
    fn test_lower_height_never_negative() {
        let p = Pipe::new(400.0, 40.0, 180.0);
        assert_eq!(p.lower_height(600.0), 380.0);
        assert_eq!(p.lower_height(200.0), 0.0);
    }

    #[test]
    fn test_new_session_is_idle() {
        let s = Session::new(Tuning::default(), 7);
        assert_eq!(s.phase(), GamePhase::Idle);
        assert_eq!(s.score(), 0);
        assert_eq!(s.high_score(), 0);
        assert!((s.speed() - 2.2).abs() < 1e-6);
    }

    #[test]
    fn test_reset_and_game_over() {
        let mut s = Session::new(Tuning::default(), 7);
        s.reset_session();
        assert_eq!(s.phase(), GamePhase::Running);

        s.score = 4;
        s.frame = 500;
        s.speed = 3.0;
        s.record_game_over(Termination::Pipe);
        assert_eq!(s.phase(), GamePhase::GameOver);
        assert_eq!(s.high_score(), 4);
        assert_eq!(s.last_termination(), Some(Termination::Pipe));

        s.reset_session();
        assert_eq!(s.score(), 0);
        assert_eq!(s.frame(), 0);
        assert!((s.speed() - 2.2).abs() < 1e-6);
        assert!(s.pipes().is_empty());
        assert_eq!(s.last_termination(), None);

        s.score = 1;
        s.record_game_over(Termination::Floor);
        assert_eq!(s.high_score(), 4);
    }

    #[test]
    fn test_snapshot_serializes() {
        let s = Session::new(Tuning::default(), 1);
        let json = serde_json::to_string(&s.snapshot()).unwrap();
        assert!(json.contains("\"phase\":\"Idle\""));
    }
}
