//! Pipe stream: spawning, scrolling, pass detection and recycling
//!
//! Pipes are kept in spawn order, which is also left-to-right screen order.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::{Bird, Pipe};
use crate::tuning::Tuning;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipeStream {
    pipes: Vec<Pipe>,
}

impl PipeStream {
    pub fn new() -> Self {
        Self { pipes: Vec::new() }
    }

    pub fn clear(&mut self) {
        self.pipes.clear();
    }

    pub fn len(&self) -> usize {
        self.pipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pipes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pipe> {
        self.pipes.iter()
    }

    pub fn as_slice(&self) -> &[Pipe] {
        &self.pipes
    }

    /// Append a pipe at the right of the stream
    pub fn push(&mut self, pipe: Pipe) {
        self.pipes.push(pipe);
    }

    /// Spawn a pipe if `frame` lands on the spawn cadence
    pub fn maybe_spawn<R: Rng>(&mut self, frame: u64, rng: &mut R, tuning: &Tuning) -> bool {
        if !frame.is_multiple_of(tuning.spawn_interval) {
            return false;
        }
        self.spawn(rng, tuning);
        true
    }

    /// Spawn a pipe at the right edge with a uniformly random gap position
    pub fn spawn<R: Rng>(&mut self, rng: &mut R, tuning: &Tuning) {
        let (min, max) = tuning.gap_top_range();
        if tuning.spawn_range_degenerate() {
            log::warn!(
                "World height {} too small for gap {}, pinning gap top to {}",
                tuning.world_height,
                tuning.pipe_gap,
                min
            );
        }
        let top = rng.random_range(min..=max);
        let pipe = Pipe::new(tuning.world_width, top, tuning.pipe_gap);
        log::debug!("Pipe spawned at x={} top={:.1}", pipe.x, pipe.top());
        self.pipes.push(pipe);
    }

    /// Scroll every pipe left by `speed`
    pub fn advance(&mut self, speed: f32) {
        for pipe in &mut self.pipes {
            pipe.x -= speed;
        }
    }

    /// Drop pipes whose right edge is past the left reap margin.
    /// Returns how many were removed.
    pub fn reap(&mut self, tuning: &Tuning) -> usize {
        let before = self.pipes.len();
        let width = tuning.pipe_width;
        let limit = -tuning.reap_margin;
        self.pipes.retain(|p| p.x + width >= limit);
        before - self.pipes.len()
    }

    /// Mark pipes whose right edge is behind the bird's left edge.
    /// Returns the number of newly passed pipes.
    pub fn check_pass(&mut self, bird: &Bird, pipe_width: f32) -> u32 {
        let mut passed = 0;
        for pipe in &mut self.pipes {
            if !pipe.passed() && pipe.x + pipe_width < bird.left() && pipe.mark_passed() {
                passed += 1;
            }
        }
        passed
    }
}
