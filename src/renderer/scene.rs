//! Frame tessellation
//!
//! Draw order: sky, ground strip, pipes, bird.

use glam::Vec2;

use super::FrameView;
use super::shapes::{circle, rect, rect_outline, triangle};
use super::vertex::{Vertex, colors};
use crate::rotate;
use crate::sim::Bird;

/// Number of scrolling marks on the ground strip
const GROUND_MARKS: u32 = 10;
const GROUND_MARK_SPACING: f32 = 80.0;
const GROUND_MARK_WIDTH: f32 = 60.0;
const GROUND_MARK_HEIGHT: f32 = 6.0;
/// Marks sit this far below the top of the ground strip
const GROUND_MARK_INSET: f32 = 2.0;
const PIPE_EDGE_WIDTH: f32 = 3.0;
const BIRD_SEGMENTS: u32 = 24;

/// Horizontal scroll offset of the ground marks, in `[0, 80)`
pub fn ground_offset(frame: u64) -> f32 {
    // frame * 0.5 mod 80, reduced in integers first to keep f32 precision
    (frame % 160) as f32 * 0.5
}

/// Tessellate a frame into triangles
pub fn build_frame_mesh(frame: &FrameView<'_>) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(1024);
    let (w, h) = (frame.world_width, frame.world_height);

    vertices.extend(rect(Vec2::ZERO, Vec2::new(w, h), colors::SKY));

    let ground_top = h - frame.ground_height;
    vertices.extend(rect(
        Vec2::new(0.0, ground_top),
        Vec2::new(w, frame.ground_height),
        colors::GROUND,
    ));
    let offset = ground_offset(frame.frame);
    for i in 0..GROUND_MARKS {
        vertices.extend(rect(
            Vec2::new(i as f32 * GROUND_MARK_SPACING + offset, ground_top + GROUND_MARK_INSET),
            Vec2::new(GROUND_MARK_WIDTH, GROUND_MARK_HEIGHT),
            colors::GROUND_MARK,
        ));
    }

    for pipe in frame.pipes {
        let upper = (Vec2::new(pipe.x, 0.0), Vec2::new(frame.pipe_width, pipe.top()));
        let lower = (
            Vec2::new(pipe.x, pipe.bottom()),
            Vec2::new(frame.pipe_width, pipe.lower_height(h)),
        );
        for (origin, size) in [upper, lower] {
            vertices.extend(rect(origin, size, colors::PIPE));
            vertices.extend(rect_outline(origin, size, PIPE_EDGE_WIDTH, colors::PIPE_EDGE));
        }
    }

    vertices.extend(bird_mesh(frame.bird));
    vertices
}

/// Body, beak and eye, rotated by the bird's pitch
fn bird_mesh(bird: &Bird) -> Vec<Vertex> {
    let r = bird.radius;
    let at = |local: Vec2| bird.pos + rotate(local, bird.rotation);

    let mut vertices = circle(bird.pos, r, colors::BIRD, BIRD_SEGMENTS);
    vertices.extend(triangle(
        at(Vec2::new(r - 2.0, 0.0)),
        at(Vec2::new(r + 12.0, -6.0)),
        at(Vec2::new(r + 12.0, 6.0)),
        colors::BEAK,
    ));
    vertices.extend(circle(at(Vec2::new(6.0, -4.0)), 3.2, colors::EYE, 12));
    vertices
}
