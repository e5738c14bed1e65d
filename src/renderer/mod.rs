//! Rendering hand-off
//!
//! The core never draws pixels itself. Every tick it hands a `FrameView` to a
//! `RenderSurface`; `scene` can tessellate that view into GPU-ready vertices.

pub mod scene;
pub mod shapes;
pub mod vertex;

pub use scene::{build_frame_mesh, ground_offset};
pub use vertex::Vertex;

use crate::sim::{Bird, GamePhase, Pipe, Session};

/// Everything a surface needs to draw one frame
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    pub bird: &'a Bird,
    pub pipes: &'a [Pipe],
    /// Session frame counter (drives cosmetic animation)
    pub frame: u64,
    pub score: u32,
    pub phase: GamePhase,
    pub world_width: f32,
    pub world_height: f32,
    pub pipe_width: f32,
    pub ground_height: f32,
}

impl<'a> FrameView<'a> {
    pub fn from_session(session: &'a Session) -> Self {
        let tuning = session.tuning();
        Self {
            bird: session.bird(),
            pipes: session.pipes().as_slice(),
            frame: session.frame(),
            score: session.score(),
            phase: session.phase(),
            world_width: tuning.world_width,
            world_height: tuning.world_height,
            pipe_width: tuning.pipe_width,
            ground_height: tuning.ground_height,
        }
    }
}

/// External drawing surface
pub trait RenderSurface {
    fn present(&mut self, frame: &FrameView<'_>);
}

/// Surface that tessellates every frame and keeps the latest mesh
///
/// Stands in for a GPU backend: `bytes()` is what would be uploaded.
#[derive(Debug, Default)]
pub struct MeshSurface {
    vertices: Vec<Vertex>,
    frames_presented: u64,
}

impl MeshSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn bytes(&self) -> &[u8] {
        vertex::as_bytes(&self.vertices)
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }
}

impl RenderSurface for MeshSurface {
    fn present(&mut self, frame: &FrameView<'_>) {
        self.vertices = build_frame_mesh(frame);
        self.frames_presented += 1;
    }
}
