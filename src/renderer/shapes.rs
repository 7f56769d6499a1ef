//! Shape generation for wireframe primitives

use glam::{Mat4, Vec3};

use super::vertex::Vertex;

/// Corners of the unit cube spanning [-1, 1] on every axis
pub const CUBE_CORNERS: [Vec3; 8] = [
    Vec3::new(1.0, -1.0, -1.0),
    Vec3::new(1.0, 1.0, -1.0),
    Vec3::new(-1.0, 1.0, -1.0),
    Vec3::new(-1.0, -1.0, -1.0),
    Vec3::new(1.0, -1.0, 1.0),
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(-1.0, -1.0, 1.0),
    Vec3::new(-1.0, 1.0, 1.0),
];

/// Corner index pairs forming the 12 cube edges
pub const CUBE_EDGES: [(usize, usize); 12] = [
    (0, 1),
    (0, 3),
    (0, 4),
    (2, 1),
    (2, 3),
    (2, 7),
    (6, 3),
    (6, 4),
    (6, 7),
    (5, 1),
    (5, 4),
    (5, 7),
];

/// Vertices per wireframe cube in a line list
pub const CUBE_LINE_VERTICES: usize = CUBE_EDGES.len() * 2;

/// Line-list vertices for a cube transformed by `transform`
pub fn wireframe_cube(transform: Mat4, color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(CUBE_LINE_VERTICES);
    for &(a, b) in &CUBE_EDGES {
        vertices.push(Vertex::at(transform.transform_point3(CUBE_CORNERS[a]), color));
        vertices.push(Vertex::at(transform.transform_point3(CUBE_CORNERS[b]), color));
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_are_unit_axis_aligned() {
        for &(a, b) in &CUBE_EDGES {
            let d = (CUBE_CORNERS[a] - CUBE_CORNERS[b]).abs();
            // Exactly one axis differs, by the full side length
            assert_eq!(d.x + d.y + d.z, 2.0, "edge {a}-{b}");
        }
    }

    #[test]
    fn test_every_corner_has_three_edges() {
        let mut degree = [0; 8];
        for &(a, b) in &CUBE_EDGES {
            degree[a] += 1;
            degree[b] += 1;
        }
        assert_eq!(degree, [3; 8]);
    }

    #[test]
    fn test_translated_cube() {
        let verts = wireframe_cube(Mat4::from_translation(Vec3::new(4.0, 0.0, -2.0)), [1.0; 4]);
        assert_eq!(verts.len(), CUBE_LINE_VERTICES);
        for v in &verts {
            assert!((3.0..=5.0).contains(&v.position[0]));
            assert!((-1.0..=1.0).contains(&v.position[1]));
            assert!((-3.0..=-1.0).contains(&v.position[2]));
        }
    }
}
