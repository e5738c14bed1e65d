//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Generate vertices for an axis-aligned filled rectangle
///
/// Non-positive sizes produce no geometry.
pub fn rect(origin: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    if size.x <= 0.0 || size.y <= 0.0 {
        return Vec::new();
    }
    let a = origin;
    let b = origin + Vec2::new(size.x, 0.0);
    let c = origin + size;
    let d = origin + Vec2::new(0.0, size.y);

    vec![
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(a.x, a.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(d.x, d.y, color),
    ]
}

/// Generate vertices for a rectangle outline centered on its edges
pub fn rect_outline(origin: Vec2, size: Vec2, line_width: f32, color: [f32; 4]) -> Vec<Vertex> {
    if size.x <= 0.0 || size.y <= 0.0 {
        return Vec::new();
    }
    let half = line_width / 2.0;
    let mut vertices = Vec::with_capacity(24);
    // Top, bottom, left, right
    vertices.extend(rect(
        origin - Vec2::splat(half),
        Vec2::new(size.x + line_width, line_width),
        color,
    ));
    vertices.extend(rect(
        origin + Vec2::new(-half, size.y - half),
        Vec2::new(size.x + line_width, line_width),
        color,
    ));
    vertices.extend(rect(
        origin + Vec2::new(-half, half),
        Vec2::new(line_width, size.y - line_width),
        color,
    ));
    vertices.extend(rect(
        origin + Vec2::new(size.x - half, half),
        Vec2::new(line_width, size.y - line_width),
        color,
    ));
    vertices
}

/// Generate vertices for a single triangle
pub fn triangle(a: Vec2, b: Vec2, c: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    vec![
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let segments = segments.max(3);
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_two_triangles() {
        let v = rect(Vec2::new(10.0, 20.0), Vec2::new(60.0, 40.0), [1.0; 4]);
        assert_eq!(v.len(), 6);
        assert_eq!(v[2].position, [70.0, 60.0]);
    }

    #[test]
    fn test_degenerate_rect_is_empty() {
        assert!(rect(Vec2::ZERO, Vec2::new(60.0, 0.0), [1.0; 4]).is_empty());
        assert!(rect(Vec2::ZERO, Vec2::new(60.0, -5.0), [1.0; 4]).is_empty());
        assert!(rect_outline(Vec2::ZERO, Vec2::new(-1.0, 5.0), 3.0, [1.0; 4]).is_empty());
    }

    #[test]
    fn test_circle_vertices_on_radius() {
        let center = Vec2::new(80.0, 300.0);
        let v = circle(center, 16.0, [1.0; 4], 24);
        assert_eq!(v.len(), 72);
        for tri in v.chunks(3) {
            let edge = Vec2::from(tri[1].position);
            assert!(((edge - center).length() - 16.0).abs() < 1e-3);
        }
    }
}
