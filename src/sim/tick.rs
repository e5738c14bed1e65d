//! One simulation step
//!
//! Order per frame: bird, then pipes (spawn, scroll, pass, reap), then the
//! termination check. Only a `Running` session advances.

use super::collision::{Termination, hits_any, ramp_speed};
use super::state::{BoundaryHit, GamePhase, Session};

/// Something that happened during a tick (HUD / audio hooks)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    PipeSpawned,
    /// Score after the pass
    PipePassed { score: u32 },
    SpeedUp { speed: f32 },
    HitCeiling,
    /// Session ended this tick
    Crashed(Termination),
}

/// What a tick produced
#[derive(Debug, Clone, Default)]
pub struct TickReport {
    pub events: Vec<GameEvent>,
    pub termination: Option<Termination>,
}

impl TickReport {
    pub fn terminated(&self) -> bool {
        self.termination.is_some()
    }

    pub fn points(&self) -> u32 {
        self.events
            .iter()
            .filter(|e| matches!(e, GameEvent::PipePassed { .. }))
            .count() as u32
    }
}

/// Advance the session by one frame
pub fn tick(session: &mut Session) -> TickReport {
    let mut report = TickReport::default();
    if session.phase != GamePhase::Running {
        return report;
    }

    session.frame += 1;

    let world_height = session.tuning.world_height;
    let mut termination = match session.bird.update(world_height) {
        BoundaryHit::Floor => Some(Termination::Floor),
        BoundaryHit::Ceiling => {
            report.events.push(GameEvent::HitCeiling);
            None
        }
        BoundaryHit::None => None,
    };

    let tuning = &session.tuning;
    if session.pipes.maybe_spawn(session.frame, &mut session.rng, tuning) {
        report.events.push(GameEvent::PipeSpawned);
    }
    session.pipes.advance(session.speed);

    let passed = session.pipes.check_pass(&session.bird, tuning.pipe_width);
    if passed > 0 {
        let old_score = session.score;
        for _ in 0..passed {
            session.score += 1;
            log::debug!("Pipe passed, score {}", session.score);
            report.events.push(GameEvent::PipePassed {
                score: session.score,
            });
        }
        let speed = ramp_speed(session.speed, old_score, session.score, tuning);
        if speed != session.speed {
            session.speed = speed;
            report.events.push(GameEvent::SpeedUp { speed });
        }
    }

    session.pipes.reap(tuning);

    if termination.is_none() && hits_any(&session.bird, session.pipes.iter(), tuning.pipe_width) {
        termination = Some(Termination::Pipe);
    }

    if let Some(cause) = termination {
        session.record_game_over(cause);
        report.events.push(GameEvent::Crashed(cause));
        report.termination = Some(cause);
    }

    report
}
