//! Skyflap entry point
//!
//! Native headless driver: plays a few sessions with a simple autopilot and
//! logs the results. Set `RUST_LOG=debug` to follow every pipe.
//!
//! Usage: `skyflap [seed] [tuning.json] [--realtime]`

use skyflap::platform::{FixedRateScheduler, FrameScheduler, ManualScheduler};
use skyflap::renderer::{MeshSurface, RenderSurface};
use skyflap::sim::{GamePhase, Session};
use skyflap::{GameLoop, Tuning};

/// Sessions played per run
const SESSIONS: u32 = 3;
/// Give up on a session that survives this long
const MAX_FRAMES: u64 = 60 * 60 * 5;

/// Flap when the bird sinks below the middle of the next gap
fn autopilot_wants_flap(session: &Session) -> bool {
    let bird = session.bird();
    let tuning = session.tuning();
    let target = session
        .pipes()
        .iter()
        .find(|p| p.x + tuning.pipe_width >= bird.left())
        .map(|p| (p.top() + p.bottom()) / 2.0 + tuning.pipe_gap * 0.15)
        .unwrap_or(tuning.world_height / 2.0);
    bird.pos.y > target && bird.vel_y >= 0.0
}

fn play<S: FrameScheduler>(
    game: &mut GameLoop<S>,
    surface: &mut impl RenderSurface,
    mut next_frame: impl FnMut(&mut GameLoop<S>) -> bool,
) {
    for _ in 0..SESSIONS {
        game.handle_flap();
        while next_frame(game) {
            if autopilot_wants_flap(game.session()) {
                game.handle_flap();
            }
            game.on_frame(surface);
            if game.session().frame() >= MAX_FRAMES {
                log::info!("Session reached {} frames, stopping", MAX_FRAMES);
                game.abandon();
                break;
            }
        }
        if game.phase() == GamePhase::GameOver {
            if let Some(msg) = game.status_message() {
                log::info!("{}", msg);
            }
            match serde_json::to_string(&game.session().snapshot()) {
                Ok(json) => log::debug!("Final state: {}", json),
                Err(e) => log::warn!("Could not serialize final state: {}", e),
            }
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Skyflap (native) starting...");

    let mut seed = 0x5eed_f1a9_u64;
    let mut tuning = Tuning::default();
    let mut realtime = false;
    for (i, arg) in std::env::args().skip(1).enumerate() {
        if arg == "--realtime" {
            realtime = true;
        } else if let (0, Ok(parsed)) = (i, arg.parse::<u64>()) {
            seed = parsed;
        } else {
            tuning = Tuning::load_or_default(&arg);
        }
    }

    let mut surface = MeshSurface::new();
    if realtime {
        let mut game = GameLoop::new(tuning, seed, FixedRateScheduler::sixty_hz());
        log::info!("Pacing frames every {:?}", game.scheduler().interval());
        play(&mut game, &mut surface, |g| g.scheduler_mut().wait());
        report(&game);
    } else {
        let mut game = GameLoop::new(tuning, seed, ManualScheduler::new());
        play(&mut game, &mut surface, |g| g.scheduler_mut().take_request());
        report(&game);
    }
    log::info!(
        "Presented {} frames, last mesh {} bytes",
        surface.frames_presented(),
        surface.bytes().len()
    );
}

fn report<S: FrameScheduler>(game: &GameLoop<S>) {
    log::info!("Seed: {}", game.session().seed());
    let scores = game.session().high_scores();
    for (i, run) in scores.recent().iter().rev().enumerate() {
        log::info!("Run {}: score {} in {} frames", i + 1, run.score, run.frames);
    }
    log::info!("Best: {}", scores.best());
}
