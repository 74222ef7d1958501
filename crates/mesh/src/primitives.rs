use cgmath::InnerSpace;

use crate::geometry::{Vector3, ZERO};

/// Returns twice the signed area of the triangle `a, b, c` projected onto the
/// xy plane.
///
/// The result is positive when the triple turns counter-clockwise, negative
/// when it turns clockwise and zero when the points are collinear.
#[inline]
pub fn cross_2d(a: Vector3, b: Vector3, c: Vector3) -> f32 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Tests if `p` lies inside the triangle `a, b, c` in the xy projection.
///
/// Points on an edge or a corner count as inside. The orientation of the
/// triangle does not matter, only whether `p` sees the edges with mixed signs.
pub fn point_in_triangle(a: Vector3, b: Vector3, c: Vector3, p: Vector3) -> bool {
    let d1 = cross_2d(p, a, b);
    let d2 = cross_2d(p, b, c);
    let d3 = cross_2d(p, c, a);

    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;

    !(has_neg && has_pos)
}

#[inline]
pub fn is_zero(v: Vector3) -> bool {
    v.x == 0.0 && v.y == 0.0 && v.z == 0.0
}

/// Scales `v` to unit length, or returns the zero vector if `v` has no length.
///
/// `cgmath`'s own `normalize` divides by zero here and yields NaNs.
pub fn normalize_or_zero(v: Vector3) -> Vector3 {
    let length = v.magnitude();
    if length == 0.0 {
        return ZERO;
    }
    v / length
}

/// Computes the unit normal of the triangle `v1, v2, v3` from its winding.
///
/// Degenerate (collinear or repeated) points produce the zero vector rather
/// than an error, so callers must check for it.
pub fn triangle_normal(v1: Vector3, v2: Vector3, v3: Vector3) -> Vector3 {
    normalize_or_zero((v2 - v1).cross(v3 - v1))
}

/// Signed area of a polygon projected onto the xy plane (shoelace formula).
///
/// Counter-clockwise polygons have a positive area. Fewer than 3 points have
/// no area.
pub fn polygon_area(polygon: &[Vector3]) -> f32 {
    let n = polygon.len();
    if n < 3 {
        return 0.0;
    }
    let mut area = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        area += polygon[i].x * polygon[j].y;
        area -= polygon[j].x * polygon[i].y;
    }
    area / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    fn v(x: f32, y: f32, z: f32) -> Vector3 {
        Vector3 { x, y, z }
    }

    #[test]
    fn cross_2d_orientation() {
        let a = v(0.0, 0.0, 0.0);
        let b = v(1.0, 0.0, 0.0);
        let c = v(0.0, 1.0, 0.0);
        assert!(cross_2d(a, b, c) > 0.0);
        assert!(cross_2d(a, c, b) < 0.0);
        assert_eq!(0.0, cross_2d(a, b, v(2.0, 0.0, 0.0)));
    }

    #[test]
    fn cross_2d_ignores_z() {
        let a = v(0.0, 0.0, 5.0);
        let b = v(1.0, 0.0, -3.0);
        let c = v(0.0, 1.0, 1.0);
        assert_eq!(1.0, cross_2d(a, b, c));
    }

    #[test]
    fn point_in_triangle_inside_and_outside() {
        let a = v(0.0, 0.0, 0.0);
        let b = v(4.0, 0.0, 0.0);
        let c = v(0.0, 4.0, 0.0);
        assert!(point_in_triangle(a, b, c, v(1.0, 1.0, 0.0)));
        assert!(!point_in_triangle(a, b, c, v(3.0, 3.0, 0.0)));
        assert!(!point_in_triangle(a, b, c, v(-1.0, 1.0, 0.0)));
    }

    #[test]
    fn point_in_triangle_boundary_counts_as_inside() {
        let a = v(0.0, 0.0, 0.0);
        let b = v(4.0, 0.0, 0.0);
        let c = v(0.0, 4.0, 0.0);
        // On an edge.
        assert!(point_in_triangle(a, b, c, v(2.0, 2.0, 0.0)));
        // On a corner.
        assert!(point_in_triangle(a, b, c, b));
    }

    #[test]
    fn point_in_triangle_either_winding() {
        let a = v(0.0, 0.0, 0.0);
        let b = v(4.0, 0.0, 0.0);
        let c = v(0.0, 4.0, 0.0);
        let p = v(1.0, 1.0, 0.0);
        assert_eq!(point_in_triangle(a, b, c, p), point_in_triangle(a, c, b, p));
    }

    #[test]
    fn normal_of_ccw_triangle_faces_up() {
        let n = triangle_normal(v(0.0, 0.0, 0.0), v(1.0, 0.0, 0.0), v(0.0, 1.0, 0.0));
        assert_eq!(v(0.0, 0.0, 1.0), n);
    }

    #[test]
    fn normal_is_unit_length() {
        let n = triangle_normal(v(0.0, 0.0, 0.0), v(3.0, 1.0, 2.0), v(-1.0, 5.0, 0.5));
        assert_float_eq!(n.magnitude(), 1.0, abs <= 0.0001);
    }

    #[test]
    fn normal_of_degenerate_triangle_is_zero() {
        let n = triangle_normal(v(0.0, 0.0, 0.0), v(1.0, 1.0, 1.0), v(2.0, 2.0, 2.0));
        assert!(is_zero(n));
        let n = triangle_normal(v(1.0, 1.0, 1.0), v(1.0, 1.0, 1.0), v(1.0, 1.0, 1.0));
        assert!(is_zero(n));
    }

    #[test]
    fn polygon_area_of_unit_square() {
        let square = [
            v(0.0, 0.0, 0.0),
            v(1.0, 0.0, 0.0),
            v(1.0, 1.0, 0.0),
            v(0.0, 1.0, 0.0),
        ];
        assert_eq!(1.0, polygon_area(&square));
    }

    #[test]
    fn polygon_area_is_antisymmetric() {
        let mut polygon = vec![
            v(0.0, 0.0, 0.0),
            v(3.0, 0.5, 0.0),
            v(2.5, 2.0, 1.0),
            v(1.0, 3.0, 0.0),
            v(-0.5, 1.5, 0.0),
        ];
        let forward = polygon_area(&polygon);
        polygon.reverse();
        assert_float_eq!(forward, -polygon_area(&polygon), abs <= 0.0001);
        assert!(forward > 0.0);
    }

    #[test]
    fn polygon_area_of_too_few_points() {
        assert_eq!(0.0, polygon_area(&[]));
        assert_eq!(0.0, polygon_area(&[v(0.0, 0.0, 0.0), v(1.0, 1.0, 0.0)]));
    }
}
