use cgmath::InnerSpace;
use trisoup_mesh::{is_zero, triangle_normal, Triangle};

/// Makes the stored normal of `t` agree with its vertex winding.
///
/// An unset (zero) normal is simply filled in. Otherwise a stored normal that
/// points away from the computed one (negative dot product) is taken as the
/// intended facing: `p1` and `p2` are swapped so the winding matches it. In
/// every case the normal is recomputed from the final winding.
///
/// Returns `true` if the winding was reversed.
pub fn fix_winding(t: &mut Triangle) -> bool {
    let computed = triangle_normal(t.p0, t.p1, t.p2);

    if is_zero(t.normal) {
        t.normal = computed;
        return false;
    }

    if computed.dot(t.normal) < 0.0 {
        std::mem::swap(&mut t.p1, &mut t.p2);
        t.normal = triangle_normal(t.p0, t.p1, t.p2);
        return true;
    }

    t.normal = computed;
    false
}

/// Runs [`fix_winding`] over every triangle once and returns how many were
/// reversed.
///
/// Triangles are treated independently; neighbours are never compared.
pub fn ensure_consistent_winding(triangles: &mut [Triangle]) -> usize {
    triangles.iter_mut().map(fix_winding).filter(|&flipped| flipped).count()
}
