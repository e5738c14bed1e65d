//! Collision detection and difficulty rules
//!
//! Pipes are tested against their rectangular gap boundaries only.

use serde::{Deserialize, Serialize};

use super::state::{Bird, Pipe};
use crate::tuning::Tuning;

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Termination {
    /// Bird fell onto the floor
    Floor,
    /// Bird hit a pipe body
    Pipe,
    /// Driver stopped a session that was still running
    Abandoned,
}

/// Check whether the bird overlaps a pipe's column outside of its gap
///
/// The bird is treated as its bounding square `[x - r, x + r] x [y - r, y + r]`.
pub fn collides(bird: &Bird, pipe: &Pipe, pipe_width: f32) -> bool {
    let overlaps_column = bird.right() > pipe.x && bird.left() < pipe.x + pipe_width;
    if !overlaps_column {
        return false;
    }
    bird.top() < pipe.top() || bird.bottom() > pipe.bottom()
}

/// Check the bird against every live pipe
pub fn hits_any<'a>(bird: &Bird, pipes: impl IntoIterator<Item = &'a Pipe>, pipe_width: f32) -> bool {
    pipes.into_iter().any(|p| collides(bird, p, pipe_width))
}

/// Speed after the score moved from `old_score` to `new_score`
///
/// Steps once per multiple of the interval crossed, so several pipes passing
/// in one frame can never double-count a milestone.
pub fn ramp_speed(speed: f32, old_score: u32, new_score: u32, tuning: &Tuning) -> f32 {
    let interval = tuning.speed_step_interval.max(1);
    let steps = (new_score / interval).saturating_sub(old_score / interval);
    if steps == 0 {
        return speed;
    }
    let new_speed = speed + steps as f32 * tuning.speed_step;
    log::debug!("Speed up at score {}: {:.2} -> {:.2}", new_score, speed, new_speed);
    new_speed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bird_at(y: f32) -> Bird {
        let mut bird = Bird::new(&Tuning::default());
        bird.pos.y = y;
        bird
    }

    #[test]
    fn test_bird_below_gap_collides() {
        let pipe = Pipe::new(60.0, 40.0, 180.0);
        assert_eq!(pipe.bottom(), 220.0);
        // 500 + 16 > 220
        assert!(collides(&bird_at(500.0), &pipe, 60.0));
    }

    #[test]
    fn test_bird_inside_gap_is_safe() {
        let pipe = Pipe::new(60.0, 40.0, 180.0);
        assert!(!collides(&bird_at(130.0), &pipe, 60.0));
        // Touching the boundary exactly is not a hit
        assert!(!collides(&bird_at(56.0), &pipe, 60.0));
        assert!(!collides(&bird_at(204.0), &pipe, 60.0));
    }

    #[test]
    fn test_bird_above_gap_collides() {
        let pipe = Pipe::new(60.0, 100.0, 180.0);
        assert!(collides(&bird_at(110.0), &pipe, 60.0));
    }

    #[test]
    fn test_no_collision_outside_column() {
        // Bird spans x in [64, 96]
        let ahead = Pipe::new(96.0, 40.0, 180.0);
        let behind = Pipe::new(4.0, 40.0, 180.0);
        assert!(!collides(&bird_at(500.0), &ahead, 60.0));
        assert!(!collides(&bird_at(500.0), &behind, 60.0));

        let clipping = Pipe::new(95.0, 40.0, 180.0);
        assert!(collides(&bird_at(500.0), &clipping, 60.0));
    }

    #[test]
    fn test_hits_any() {
        let pipes = [Pipe::new(300.0, 40.0, 180.0), Pipe::new(70.0, 40.0, 180.0)];
        assert!(hits_any(&bird_at(500.0), &pipes, 60.0));
        assert!(!hits_any(&bird_at(130.0), &pipes, 60.0));
        let none: [Pipe; 0] = [];
        assert!(!hits_any(&bird_at(500.0), &none, 60.0));
    }

    #[test]
    fn test_ramp_steps_on_milestone() {
        let tuning = Tuning::default();
        let speed = ramp_speed(2.2, 5, 6, &tuning);
        assert!((speed - 2.32).abs() < 1e-5);
        assert_eq!(ramp_speed(speed, 6, 7, &tuning), speed);
    }

    #[test]
    fn test_ramp_counts_each_milestone_once() {
        let tuning = Tuning::default();
        // Two pipes in one frame, 5 -> 7 crosses 6 once
        let speed = ramp_speed(2.2, 5, 7, &tuning);
        assert!((speed - 2.32).abs() < 1e-5);
        // 11 -> 13 crosses 12 once more
        let speed = ramp_speed(speed, 11, 13, &tuning);
        assert!((speed - 2.44).abs() < 1e-5);
    }

    #[test]
    fn test_ramp_no_change_without_score() {
        let tuning = Tuning::default();
        assert_eq!(ramp_speed(2.2, 6, 6, &tuning), 2.2);
        assert_eq!(ramp_speed(2.2, 0, 0, &tuning), 2.2);
    }
}
