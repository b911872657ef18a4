//! Quaternion, vector and matrix helpers on top of glam.
//!
//! The helpers here never fail. Degenerate inputs fall back to a sensible
//! value (identity rotation, unchanged vector, identity inverse) and the
//! fallback is reported at `trace` level.

use glam::{Mat4, Quat, Vec3};
use log::trace;

use crate::easing::Easing;

/// Tolerance used when comparing vectors for the shortest-arc rotation.
pub const VECTOR_EPSILON: f32 = 0.001;

/// Vectors shorter than this are left untouched by [`normalize_or_keep`].
pub const LENGTH_EPSILON: f32 = 1e-6;

/// Matrices whose determinant magnitude is at or below this are treated as
/// singular.
pub const DETERMINANT_EPSILON: f32 = 1e-5;

/// Above this cosine, [`slerp`] blends linearly.
const SLERP_LINEAR_THRESHOLD: f32 = 0.9995;

/// Component-wise comparison with an absolute tolerance.
pub fn approx_eq(a: Vec3, b: Vec3, eps: f32) -> bool {
    (a - b).abs().cmplt(Vec3::splat(eps)).all()
}

/// Normalize `v` unless it is too short to have a direction.
pub fn normalize_or_keep(v: Vec3) -> Vec3 {
    let length = v.length();
    if length > LENGTH_EPSILON { v / length } else { v }
}

/// Unit quaternion; the zero quaternion maps to identity.
pub fn normalize_quat(q: Quat) -> Quat {
    let length = q.length();
    if length == 0.0 {
        trace!("zero quaternion normalized to identity");
        return Quat::IDENTITY;
    }
    q / length
}

/// Rotation of `angle` radians about `axis`.
///
/// The axis is used as given, so a zero axis yields identity rather than NaN.
pub fn quat_from_axis_angle(axis: Vec3, angle: f32) -> Quat {
    let (sin, cos) = (angle * 0.5).sin_cos();
    let v = axis * sin;
    normalize_quat(Quat::from_xyzw(v.x, v.y, v.z, cos))
}

/// Shortest-arc rotation taking direction `v1` onto direction `v2`.
pub fn quat_from_vectors(v1: Vec3, v2: Vec3) -> Quat {
    if approx_eq(v1, v2, VECTOR_EPSILON) {
        return Quat::IDENTITY;
    }

    if approx_eq(v1, -v2, VECTOR_EPSILON) {
        // Half turn about any axis perpendicular to v1.
        let axis = if v1.x.abs() < VECTOR_EPSILON {
            Vec3::X
        } else if v1.y.abs() < VECTOR_EPSILON {
            Vec3::Y
        } else if v1.z.abs() < VECTOR_EPSILON {
            Vec3::Z
        } else {
            trace!("antiparallel vectors off every axis plane, using an orthonormal axis");
            normalize_or_keep(v1).any_orthonormal_vector()
        };
        return quat_from_axis_angle(axis, std::f32::consts::PI);
    }

    let a = normalize_or_keep(v1);
    let b = normalize_or_keep(v2);
    let axis = normalize_or_keep(a.cross(b));
    let angle = a.dot(b).clamp(-1.0, 1.0).acos();
    quat_from_axis_angle(axis, angle)
}

/// Spherical interpolation from `from` to `to`.
///
/// Unlike [`Quat::slerp`] this never flips `to` onto the short path, so
/// `slerp(a, b, 1.0)` is `b` component for component.
pub fn slerp(from: Quat, to: Quat, t: f32) -> Quat {
    let cos = from.dot(to);

    let (scale_from, scale_to) = if cos > SLERP_LINEAR_THRESHOLD {
        (1.0 - t, t)
    } else {
        let theta = cos.clamp(-1.0, 1.0).acos();
        let sin = theta.sin();
        if sin == 0.0 {
            trace!("degenerate slerp, blending linearly");
            (1.0 - t, t)
        } else {
            (((1.0 - t) * theta).sin() / sin, (t * theta).sin() / sin)
        }
    };

    normalize_quat(from * scale_from + to * scale_to)
}

/// Inverse of `m`, or `None` when it is singular.
pub fn try_inverse(m: &Mat4) -> Option<Mat4> {
    let det = m.determinant();
    if det.abs() <= DETERMINANT_EPSILON {
        trace!("matrix with determinant {det} has no inverse");
        return None;
    }
    Some(m.inverse())
}

/// Per-axis tween from `from` to `to` at `time` into `duration`.
pub fn tween_vec3(from: Vec3, to: Vec3, easing: Easing, time: f32, duration: f32) -> Vec3 {
    let delta = to - from;
    Vec3::new(
        easing.tween(time, from.x, delta.x, duration),
        easing.tween(time, from.y, delta.y, duration),
        easing.tween(time, from.z, delta.z, duration),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn quat_close(a: Quat, b: Quat, eps: f32) -> bool {
        (a.x - b.x).abs() < eps
            && (a.y - b.y).abs() < eps
            && (a.z - b.z).abs() < eps
            && (a.w - b.w).abs() < eps
    }

    #[test]
    fn normalize_quat_handles_zero() {
        assert_eq!(normalize_quat(Quat::from_xyzw(0.0, 0.0, 0.0, 0.0)), Quat::IDENTITY);
        let q = normalize_quat(Quat::from_xyzw(0.0, 0.0, 0.0, 2.0));
        assert!(quat_close(q, Quat::IDENTITY, 1e-6));
    }

    #[test]
    fn axis_angle_matches_glam() {
        let q = quat_from_axis_angle(Vec3::X, FRAC_PI_2);
        assert!(quat_close(q, Quat::from_rotation_x(FRAC_PI_2), 1e-6));
    }

    #[test]
    fn zero_axis_is_identity() {
        assert_eq!(quat_from_axis_angle(Vec3::ZERO, 1.0).w, 1.0);
    }

    #[test]
    fn equal_vectors_give_identity() {
        let q = quat_from_vectors(Vec3::new(0.3, 0.4, 0.5), Vec3::new(0.3, 0.4, 0.5));
        assert_eq!(q, Quat::IDENTITY);
    }

    #[test]
    fn antiparallel_vectors_turn_half_way_round() {
        let q = quat_from_vectors(Vec3::Z, Vec3::NEG_Z);
        // z has zero x component, so the half turn is about X.
        assert!(quat_close(q, Quat::from_xyzw(1.0, 0.0, 0.0, 0.0), 1e-6));
        assert!(approx_eq(q * Vec3::Z, Vec3::NEG_Z, 1e-5));
    }

    #[test]
    fn antiparallel_off_axis_still_maps_onto_target() {
        let v = Vec3::new(1.0, 1.0, 1.0).normalize();
        let q = quat_from_vectors(v, -v);
        assert!(approx_eq(q * v, -v, 1e-4));
    }

    #[test]
    fn shortest_arc_rotates_first_onto_second() {
        let q = quat_from_vectors(Vec3::X, Vec3::Y);
        assert!(approx_eq(q * Vec3::X, Vec3::Y, 1e-5));
        assert!((q.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn slerp_endpoints_are_exact() {
        let a = Quat::from_rotation_y(0.3);
        let b = Quat::from_rotation_x(2.0);
        assert!(quat_close(slerp(a, b, 0.0), a, 1e-6));
        assert!(quat_close(slerp(a, b, 1.0), b, 1e-6));
    }

    #[test]
    fn slerp_does_not_flip_to_short_path() {
        let a = Quat::IDENTITY;
        let b = Quat::from_xyzw(0.0, 0.0, 0.0, -1.0);
        let end = slerp(a, Quat::from_rotation_z(PI * 1.5), 1.0);
        assert!(quat_close(end, Quat::from_rotation_z(PI * 1.5), 1e-5));
        // Opposite signs of the same rotation blend through a valid quaternion.
        assert!((slerp(a, b, 0.25).length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn slerp_halfway() {
        let half = slerp(Quat::IDENTITY, Quat::from_rotation_y(FRAC_PI_2), 0.5);
        assert!(quat_close(half, Quat::from_rotation_y(FRAC_PI_2 * 0.5), 1e-5));
    }

    #[test]
    fn vector_helpers_keep_degenerate_input() {
        assert_eq!(normalize_or_keep(Vec3::ZERO), Vec3::ZERO);
        assert_eq!(normalize_or_keep(Vec3::new(0.0, 3.0, 0.0)), Vec3::Y);
    }

    #[test]
    fn singular_matrix_has_no_inverse() {
        assert!(try_inverse(&Mat4::ZERO).is_none());
        let m = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        let inv = try_inverse(&m).unwrap();
        assert!((m * inv).abs_diff_eq(Mat4::IDENTITY, 1e-5));
    }

    #[test]
    fn tween_vec3_runs_per_axis() {
        let mid = tween_vec3(Vec3::ZERO, Vec3::new(2.0, -4.0, 8.0), Easing::Linear, 1.0, 2.0);
        assert!(approx_eq(mid, Vec3::new(1.0, -2.0, 4.0), 1e-6));
    }

    #[test]
    fn slerp_blends_linearly_for_close_rotations() {
        let a = Quat::from_rotation_z(0.01);
        let b = Quat::from_rotation_z(0.03);
        assert!(a.dot(b) > SLERP_LINEAR_THRESHOLD);

        let blended = slerp(a, b, 0.25);
        let expected = (a * 0.75 + b * 0.25).normalize();
        assert!(quat_close(blended, expected, 1e-6));
        assert!(quat_close(blended, Quat::from_rotation_z(0.015), 1e-5));
    }
}
