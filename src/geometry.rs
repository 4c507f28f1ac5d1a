use crate::vertex::Vector3;

/// Half the edge length of the cube
pub const CUBE_HALF_EXTENT: i32 = 10;

const H: i32 = CUBE_HALF_EXTENT;

/// Cube vertices in object space
pub const CUBE_VERTICES: [Vector3; 8] = [
    Vector3::new(-H, -H, -H), // 0
    Vector3::new(H, -H, -H),  // 1
    Vector3::new(H, H, -H),   // 2
    Vector3::new(-H, H, -H),  // 3
    Vector3::new(-H, -H, H),  // 4
    Vector3::new(H, -H, H),   // 5
    Vector3::new(H, H, H),    // 6
    Vector3::new(-H, H, H),   // 7
];

/// Cube edges (pairs of vertex indices)
pub const CUBE_EDGES: [(usize, usize); 12] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 0), // Front face
    (4, 5),
    (5, 6),
    (6, 7),
    (7, 4), // Back face
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7), // Connecting edges
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn tables_have_expected_sizes() {
        assert_eq!(CUBE_VERTICES.len(), 8);
        assert_eq!(CUBE_EDGES.len(), 12);
    }

    #[test]
    fn edge_indices_are_in_range() {
        for &(a, b) in &CUBE_EDGES {
            assert!(a < CUBE_VERTICES.len(), "edge start {a} out of range");
            assert!(b < CUBE_VERTICES.len(), "edge end {b} out of range");
        }
    }

    #[test]
    fn edges_are_distinct_and_axis_aligned() {
        let mut seen = HashSet::new();
        for &(a, b) in &CUBE_EDGES {
            assert!(seen.insert((a.min(b), a.max(b))), "duplicate edge ({a}, {b})");
            let (p, q) = (CUBE_VERTICES[a], CUBE_VERTICES[b]);
            let differing = [p.x != q.x, p.y != q.y, p.z != q.z]
                .iter()
                .filter(|&&d| d)
                .count();
            assert_eq!(differing, 1, "edge ({a}, {b}) is not a cube edge");
        }
    }

    #[test]
    fn vertices_are_centered_corners() {
        let sum = CUBE_VERTICES
            .iter()
            .fold(Vector3::ZERO, |acc, &v| acc + v);
        assert_eq!(sum, Vector3::ZERO);
        for v in &CUBE_VERTICES {
            assert_eq!(v.x.abs(), CUBE_HALF_EXTENT);
            assert_eq!(v.y.abs(), CUBE_HALF_EXTENT);
            assert_eq!(v.z.abs(), CUBE_HALF_EXTENT);
        }
    }
}
