use trisoup_mesh::{cross_2d, point_in_triangle, polygon_area, Triangle, Vector3};

/// Turns a polygon into a set of triangles that cover it.
///
/// Implementations never fail. Input they cannot handle yields fewer
/// triangles (possibly none) rather than an error.
pub trait Triangulator {
    /// Triangulates the polygon described by `polygon` in vertex order.
    ///
    /// The returned triangles carry a computed normal but no shading
    /// attributes, and a `face_index` of zero.
    fn triangulate(&self, polygon: &[Vector3]) -> Vec<Triangle>;
}

/// Greedy ear clipping in the xy projection.
///
/// Each pass clips the first ear found in scan order. If a full scan turns up
/// no ear (self-intersecting or degenerate input, or a polygon that is edge-on
/// in the xy projection) the remaining vertices are dropped.
#[derive(Debug, Default, Clone, Copy)]
pub struct EarClipping;

impl EarClipping {
    /// Tests whether the corner at `curr` can be clipped off.
    ///
    /// The corner must turn strictly counter-clockwise and no other vertex
    /// still in `remaining` may lie inside or on the candidate triangle.
    fn is_ear(vertices: &[Vector3], remaining: &[usize], prev: usize, curr: usize, next: usize) -> bool {
        let a = vertices[prev];
        let b = vertices[curr];
        let c = vertices[next];

        if cross_2d(a, b, c) <= 0.0 {
            return false;
        }

        !remaining
            .iter()
            .filter(|&&i| i != prev && i != curr && i != next)
            .any(|&i| point_in_triangle(a, b, c, vertices[i]))
    }

    /// Finds the position in `remaining` of the first clippable corner.
    fn find_ear(vertices: &[Vector3], remaining: &[usize]) -> Option<usize> {
        let n = remaining.len();
        (0..n).find(|&i| {
            let prev = remaining[(i + n - 1) % n];
            let next = remaining[(i + 1) % n];
            Self::is_ear(vertices, remaining, prev, remaining[i], next)
        })
    }
}

impl Triangulator for EarClipping {
    fn triangulate(&self, polygon: &[Vector3]) -> Vec<Triangle> {
        match polygon.len() {
            0..=2 => return Vec::new(),
            // Taken verbatim, even if it winds clockwise.
            3 => return vec![Triangle::from_points(polygon[0], polygon[1], polygon[2])],
            _ => (),
        }

        // Work on a counter-clockwise copy so that convex corners always have a
        // positive turn.
        let mut vertices = polygon.to_vec();
        if polygon_area(&vertices) < 0.0 {
            vertices.reverse();
        }

        let mut remaining: Vec<usize> = (0..vertices.len()).collect();
        let mut triangles = Vec::with_capacity(vertices.len() - 2);

        while remaining.len() > 3 {
            let Some(i) = Self::find_ear(&vertices, &remaining) else {
                log::debug!(
                    "no ear among {} remaining vertices, dropping them",
                    remaining.len()
                );
                break;
            };
            let n = remaining.len();
            let prev = remaining[(i + n - 1) % n];
            let next = remaining[(i + 1) % n];
            triangles.push(Triangle::from_points(
                vertices[prev],
                vertices[remaining[i]],
                vertices[next],
            ));
            remaining.remove(i);
        }

        if let [a, b, c] = remaining[..] {
            triangles.push(Triangle::from_points(vertices[a], vertices[b], vertices[c]));
        }

        triangles
    }
}
