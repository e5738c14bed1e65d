//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per frame signal, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod stream;
pub mod tick;

pub use collision::{Termination, collides, hits_any, ramp_speed};
pub use state::{Bird, BoundaryHit, GamePhase, Pipe, PitchProfile, Session, SessionSnapshot};
pub use stream::PipeStream;
pub use tick::{GameEvent, TickReport, tick};
