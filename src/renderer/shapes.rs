//! Shape generation for 2D primitives
//!
//! Output is in arena pixel space; the pipeline maps it to NDC.

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::Vertex;
use crate::sim::{Circle, DrawList, Rect};

/// Segments used for the ball outline
pub const CIRCLE_SEGMENTS: u32 = 24;

/// Two triangles covering a rectangle
pub fn rect(r: &Rect, color: [f32; 4]) -> [Vertex; 6] {
    let (x0, y0) = (r.x as f32, r.y as f32);
    let (x1, y1) = (x0 + r.w as f32, y0 + r.h as f32);
    [
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;

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

/// Tessellate a whole draw list in one color
pub fn tessellate(list: &DrawList, color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(
        list.rects.len() * 6 + list.circles.len() * CIRCLE_SEGMENTS as usize * 3,
    );
    for r in &list.rects {
        if !r.is_empty() {
            vertices.extend_from_slice(&rect(r, color));
        }
    }
    for Circle { center, radius } in &list.circles {
        vertices.extend(circle(center.as_vec2(), *radius as f32, color, CIRCLE_SEGMENTS));
    }
    vertices
}
