//! Game loop controller
//!
//! Owns the session and drives it through Idle -> Running -> GameOver. Input
//! arrives between ticks through `handle_flap` / `handle_input`; the frame
//! signal arrives through `on_frame`.

use crate::platform::{FrameScheduler, InputEvent, InputSignal};
use crate::renderer::{FrameView, RenderSurface};
use crate::sim::{GamePhase, Session, Termination, TickReport, tick};
use crate::tuning::Tuning;

/// Shown before the first session
pub const START_MESSAGE: &str = "Tap or press Space to start";

/// Status line shown once a session has ended
pub fn game_over_message(score: u32, high_score: u32) -> String {
    format!(
        "Game over - Score: {} · Best: {} · Tap or press Space to play again",
        score, high_score
    )
}

pub struct GameLoop<S: FrameScheduler> {
    session: Session,
    scheduler: S,
}

impl<S: FrameScheduler> GameLoop<S> {
    pub fn new(tuning: Tuning, seed: u64, scheduler: S) -> Self {
        log::info!("Game loop ready (seed {})", seed);
        Self {
            session: Session::new(tuning, seed),
            scheduler,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn phase(&self) -> GamePhase {
        self.session.phase()
    }

    pub fn current_score(&self) -> u32 {
        self.session.score()
    }

    pub fn high_score(&self) -> u32 {
        self.session.high_score()
    }

    /// The one input entry point: flap while running, start a fresh session
    /// otherwise
    pub fn handle_flap(&mut self) {
        match self.session.phase() {
            GamePhase::Running => self.session.bird.flap(),
            GamePhase::Idle | GamePhase::GameOver => self.reset_session(),
        }
    }

    /// Route a raw input event
    pub fn handle_input(&mut self, event: InputEvent) {
        match event.signal() {
            Some(InputSignal::Flap) => self.handle_flap(),
            Some(InputSignal::Restart) if self.session.phase() != GamePhase::Running => {
                self.reset_session()
            }
            Some(InputSignal::Restart) | None => {}
        }
    }

    /// Full reset and (re)start of the loop
    fn reset_session(&mut self) {
        self.session.reset_session();
        self.schedule();
    }

    fn schedule(&mut self) {
        if !self.scheduler.is_pending() {
            self.scheduler.request_next_tick();
        }
    }

    /// End a running session from outside (frame cap, shutdown).
    /// The run is recorded and the outstanding frame request dropped, so the
    /// next flap starts a fresh session.
    pub fn abandon(&mut self) {
        if self.session.phase() != GamePhase::Running {
            return;
        }
        self.scheduler.take_request();
        self.session.record_game_over(Termination::Abandoned);
    }

    /// Frame signal from the scheduler: advance, render, reschedule
    ///
    /// Signals that arrive while not running are ignored.
    pub fn on_frame<R: RenderSurface>(&mut self, surface: &mut R) -> TickReport {
        if self.session.phase() != GamePhase::Running {
            return TickReport::default();
        }

        let report = tick(&mut self.session);
        surface.present(&FrameView::from_session(&self.session));

        if !report.terminated() {
            self.schedule();
        }
        report
    }

    /// Drive one frame if the scheduler has a request outstanding.
    /// Returns whether a tick ran.
    pub fn pump<R: RenderSurface>(&mut self, surface: &mut R) -> bool {
        if !self.scheduler.take_request() {
            return false;
        }
        self.on_frame(surface);
        true
    }

    /// Status message for the overlay, `None` while running
    pub fn status_message(&self) -> Option<String> {
        match self.session.phase() {
            GamePhase::Idle => Some(START_MESSAGE.to_string()),
            GamePhase::Running => None,
            GamePhase::GameOver => Some(game_over_message(
                self.session.score(),
                self.session.high_score(),
            )),
        }
    }

    /// Score text for the HUD
    pub fn score_text(&self) -> String {
        self.session.score().to_string()
    }
}
