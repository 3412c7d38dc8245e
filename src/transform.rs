// src/transform.rs
// Stateless geometric-transform builders and quaternion interpolation.
// All matrices here follow the row-vector convention: points premultiply,
// so a translation lives in the last row.

use crate::types::matrix::Matrix;
use crate::types::quaternion::Quaternion;
use crate::types::traits::{FloatingPoint, Scalar};
use crate::types::vector::{Vector, Vector3};

/// Coordinate space selector for [`transformation_matrix`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Space {
    Local,
    Global,
}

/// Nearly-parallel threshold above which [`slerp`] falls back to
/// normalized linear interpolation.
const SLERP_DOT_THRESHOLD: f64 = 0.9995;

/// Degrees to radians.
pub fn to_radians<S: FloatingPoint>(degrees: S) -> S {
    degrees * S::PI / S::from_f64(180.0)
}

/// Right-handed cross product of two 3-vectors.
pub fn cross<S: Scalar>(v1: &Vector3<S>, v2: &Vector3<S>) -> Vector3<S> {
    Vector3::from([
        v1.y() * v2.z() - v1.z() * v2.y(),
        v1.z() * v2.x() - v1.x() * v2.z(),
        v1.x() * v2.y() - v1.y() * v2.x(),
    ])
}

/// Dot product of two column vectors of any fixed length.
pub fn dot<const R: usize, S: Scalar>(v1: &Vector<R, S>, v2: &Vector<R, S>) -> S {
    let mut product = S::zero();
    for (a, b) in v1.values().iter().zip(v2.values()) {
        product = product + *a * *b;
    }

    product
}

/// Rotate a 3-vector by a quaternion: `q * v * conjugate(q)` with the
/// vector lifted to a pure quaternion.
pub fn rotate_vector<S: FloatingPoint>(vector: &Vector3<S>, rotation: &Quaternion<S>) -> Vector3<S> {
    let rotated = (*rotation * *vector) * rotation.conjugated();

    Vector3::from(rotated)
}

/// Rotate a 3-vector about an axis by an angle in degrees.
pub fn rotate_vector_axis_angle<S: FloatingPoint>(
    vector: &Vector3<S>,
    axis: &Vector3<S>,
    angle_degrees: S,
) -> Vector3<S> {
    rotate_vector(vector, &Quaternion::from_axis_angle(*axis, angle_degrees))
}

/// 4x4 translation by `position`; the offset occupies the last row.
pub fn translation_matrix<S: FloatingPoint>(position: &Vector3<S>) -> Matrix<4, 4, S> {
    let o = S::zero();
    let l = S::one();

    Matrix::from([
        [l, o, o, o],
        [o, l, o, o],
        [o, o, l, o],
        [position.x(), position.y(), position.z(), l],
    ])
}

/// 4x4 rotation composed from axis angles (degrees) about X, then Y,
/// then Z.
pub fn rotation_matrix<S: FloatingPoint>(rot_x: S, rot_y: S, rot_z: S) -> Matrix<4, 4, S> {
    let o = S::zero();
    let l = S::one();

    let qx = Quaternion::from_axis_angle(Vector3::from([l, o, o]), rot_x);
    let qy = Quaternion::from_axis_angle(Vector3::from([o, l, o]), rot_y);
    let qz = Quaternion::from_axis_angle(Vector3::from([o, o, l]), rot_z);

    (qx * qy * qz).to_matrix()
}

/// 4x4 uniform scale.
pub fn scale_matrix<S: FloatingPoint>(factor: S) -> Matrix<4, 4, S> {
    nonuniform_scale_matrix(factor, factor, factor)
}

/// 4x4 per-axis scale.
pub fn nonuniform_scale_matrix<S: FloatingPoint>(
    factor_x: S,
    factor_y: S,
    factor_z: S,
) -> Matrix<4, 4, S> {
    let o = S::zero();
    let l = S::one();

    Matrix::from([
        [factor_x, o, o, o],
        [o, factor_y, o, o],
        [o, o, factor_z, o],
        [o, o, o, l],
    ])
}

/// Compose translation, rotation (axis angles in degrees) and uniform
/// scale into one transform. `Space::Global` applies
/// `rotation * translation * scale`; `Space::Local` applies
/// `translation * rotation * scale`.
pub fn transformation_matrix<S: FloatingPoint>(
    translation: &Vector3<S>,
    rot_x: S,
    rot_y: S,
    rot_z: S,
    scale: S,
    space: Space,
) -> Matrix<4, 4, S> {
    match space {
        Space::Global => {
            rotation_matrix(rot_x, rot_y, rot_z) * translation_matrix(translation)
                * scale_matrix(scale)
        }
        Space::Local => {
            translation_matrix(translation) * rotation_matrix(rot_x, rot_y, rot_z)
                * scale_matrix(scale)
        }
    }
}

/// Perspective projection mapping the view frustum into clip space.
/// `field_of_view` is in degrees.
pub fn projection_matrix<S: FloatingPoint>(
    aspect_ratio: S,
    field_of_view: S,
    near_plane: S,
    far_plane: S,
) -> Matrix<4, 4, S> {
    let o = S::zero();
    let two = S::from_f64(2.0);

    let scale_x = S::one() / (to_radians(field_of_view) / two).tan();
    let scale_y = scale_x * aspect_ratio;
    let frustum_length = far_plane - near_plane;

    Matrix::from([
        [scale_x, o, o, o],
        [o, scale_y, o, o],
        [
            o,
            o,
            -((far_plane + near_plane) / frustum_length),
            -S::one(),
        ],
        [
            o,
            o,
            -((two * far_plane * near_plane) / frustum_length),
            o,
        ],
    ])
}

/// Spherical linear interpolation from `q0` to `q1` at `time` in `[0, 1]`,
/// along the shorter arc. Nearly-parallel inputs fall back to normalized
/// linear interpolation to keep `sin(theta)` out of the denominator.
pub fn slerp<S: FloatingPoint>(
    mut q0: Quaternion<S>,
    mut q1: Quaternion<S>,
    time: S,
) -> Quaternion<S> {
    if !q0.is_normalized() {
        q0 = q0.normalized();
    }

    if !q1.is_normalized() {
        q1 = q1.normalized();
    }

    let mut dot_product = q0.dot(&q1);

    if dot_product < S::zero() {
        q1 = -q1;
        dot_product = -dot_product;
    }

    if dot_product > S::from_f64(SLERP_DOT_THRESHOLD) {
        return (q0 + (q1 - q0) * time).normalized();
    }

    let theta = dot_product.acos();
    let theta_time = theta * time;
    let sin_theta_time = theta_time.sin();
    let sin_theta = theta.sin();

    let s0 = theta_time.cos() - dot_product * sin_theta_time / sin_theta;
    let s1 = sin_theta_time / sin_theta;

    q0 * s0 + q1 * s1
}
