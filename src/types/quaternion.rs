// src/types/quaternion.rs
// Rotation/orientation algebra. Quaternions are plain value types; nothing
// normalizes implicitly except `to_matrix`, which needs unit length.

use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::types::matrix::Matrix;
use crate::types::traits::FloatingPoint;
use crate::types::vector::Vector3;

/// Unit-length tolerance for [`Quaternion::is_normalized`].
const NORMALIZED_TOLERANCE: f64 = 1e-6;

/// Quaternion with vector part `(x, y, z)` and scalar part `w`.
///
/// No operation normalizes the receiver behind the caller's back; call
/// [`Quaternion::normalized`] before relying on unit-length semantics.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Quaternion<S: FloatingPoint = f32> {
    pub x: S,
    pub y: S,
    pub z: S,
    pub w: S,
}

impl<S: FloatingPoint> Quaternion<S> {
    /// Construct a quaternion from its four components.
    pub fn new(x: S, y: S, z: S, w: S) -> Self {
        Self { x, y, z, w }
    }

    /// Rotation quaternion for a right-handed rotation of `angle_degrees`
    /// about `axis`. The axis is assumed to be unit length.
    pub fn from_axis_angle(axis: Vector3<S>, angle_degrees: S) -> Self {
        let half_angle = angle_degrees.to_radians() / S::from_f64(2.0);
        let sin_half = half_angle.sin();

        Self::new(
            axis.x() * sin_half,
            axis.y() * sin_half,
            axis.z() * sin_half,
            half_angle.cos(),
        )
    }

    /// Squared magnitude `x² + y² + z² + w²` (the quadratic form, not its
    /// root).
    pub fn norm(&self) -> S {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    /// Euclidean magnitude.
    pub fn magnitude(&self) -> S {
        self.norm().sqrt()
    }

    /// Whether the magnitude is within a small tolerance of one.
    pub fn is_normalized(&self) -> bool {
        (self.magnitude() - S::one()).abs() <= S::from_f64(NORMALIZED_TOLERANCE)
    }

    /// Return this quaternion scaled to unit length; the receiver is
    /// untouched.
    pub fn normalized(&self) -> Self {
        let inverse_magnitude = S::one() / self.magnitude();

        Self::new(
            self.x * inverse_magnitude,
            self.y * inverse_magnitude,
            self.z * inverse_magnitude,
            self.w * inverse_magnitude,
        )
    }

    /// Negated vector part, unchanged scalar part.
    pub fn conjugated(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// General inverse: the conjugate scaled by `1/norm()`. For unit
    /// quaternions this is the conjugate.
    pub fn inversed(&self) -> Self {
        let inverse_norm = S::one() / self.norm();
        let conjugate = self.conjugated();

        Self::new(
            conjugate.x * inverse_norm,
            conjugate.y * inverse_norm,
            conjugate.z * inverse_norm,
            conjugate.w * inverse_norm,
        )
    }

    /// Sum of componentwise products across `x, y, z, w`.
    pub fn dot(&self, rhs: &Self) -> S {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z + self.w * rhs.w
    }

    /// Expand to the equivalent 4x4 homogeneous rotation matrix
    /// (row-vector convention). The receiver is normalized internally.
    pub fn to_matrix(&self) -> Matrix<4, 4, S> {
        let q = self.normalized();
        let two = S::from_f64(2.0);

        let qxx = two * q.x * q.x;
        let qyy = two * q.y * q.y;
        let qzz = two * q.z * q.z;

        let qxy = two * q.x * q.y;
        let qxz = two * q.x * q.z;
        let qxw = two * q.x * q.w;

        let qyz = two * q.y * q.z;
        let qyw = two * q.y * q.w;

        let qzw = two * q.z * q.w;

        Matrix::from([
            [S::one() - qyy - qzz, qxy + qzw, qxz - qyw, S::zero()],
            [qxy - qzw, S::one() - qxx - qzz, qyz + qxw, S::zero()],
            [qxz + qyw, qyz - qxw, S::one() - qxx - qyy, S::zero()],
            [S::zero(), S::zero(), S::zero(), S::one()],
        ])
    }
}

impl<S: FloatingPoint> Default for Quaternion<S> {
    fn default() -> Self {
        Self::new(S::zero(), S::zero(), S::zero(), S::zero())
    }
}

impl<S: FloatingPoint> Add for Quaternion<S> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.x + rhs.x,
            self.y + rhs.y,
            self.z + rhs.z,
            self.w + rhs.w,
        )
    }
}

impl<S: FloatingPoint> AddAssign for Quaternion<S> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<S: FloatingPoint> Sub for Quaternion<S> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.x - rhs.x,
            self.y - rhs.y,
            self.z - rhs.z,
            self.w - rhs.w,
        )
    }
}

impl<S: FloatingPoint> SubAssign for Quaternion<S> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<S: FloatingPoint> Neg for Quaternion<S> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

// Hamilton product; not commutative.
impl<S: FloatingPoint> Mul for Quaternion<S> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
            self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        )
    }
}

impl<S: FloatingPoint> MulAssign for Quaternion<S> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

// A column vector on the right is lifted to the pure quaternion
// (x, y, z, 0) and Hamilton-multiplied.
impl<S: FloatingPoint> Mul<Vector3<S>> for Quaternion<S> {
    type Output = Self;

    fn mul(self, rhs: Vector3<S>) -> Self {
        self * Self::from(rhs)
    }
}

impl<S: FloatingPoint> MulAssign<Vector3<S>> for Quaternion<S> {
    fn mul_assign(&mut self, rhs: Vector3<S>) {
        *self = *self * rhs;
    }
}

impl<S: FloatingPoint> Mul<S> for Quaternion<S> {
    type Output = Self;

    fn mul(self, scalar: S) -> Self {
        Self::new(
            self.x * scalar,
            self.y * scalar,
            self.z * scalar,
            self.w * scalar,
        )
    }
}

macro_rules! impl_prefix_scalar_mul {
    ($($t:ty),*) => {$(
        impl Mul<Quaternion<$t>> for $t {
            type Output = Quaternion<$t>;

            fn mul(self, rhs: Quaternion<$t>) -> Self::Output {
                rhs * self
            }
        }
    )*};
}

impl_prefix_scalar_mul!(f32, f64);

impl<S: FloatingPoint> Div for Quaternion<S> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        self * rhs.inversed()
    }
}

impl<S: FloatingPoint> DivAssign for Quaternion<S> {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl<S: FloatingPoint> From<Vector3<S>> for Quaternion<S> {
    fn from(vector: Vector3<S>) -> Self {
        Self::new(vector.x(), vector.y(), vector.z(), S::zero())
    }
}

impl<S: FloatingPoint> From<Quaternion<S>> for Vector3<S> {
    fn from(quaternion: Quaternion<S>) -> Self {
        Self::from([quaternion.x, quaternion.y, quaternion.z])
    }
}

impl<S: FloatingPoint + fmt::Display> fmt::Display for Quaternion<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:11.6} {:11.6} {:11.6} {:11.6}",
            self.x, self.y, self.z, self.w
        )
    }
}

// Serde integration: a quaternion travels as its component tuple.

impl<S> Serialize for Quaternion<S>
where
    S: FloatingPoint + Serialize,
{
    fn serialize<Se>(&self, serializer: Se) -> Result<Se::Ok, Se::Error>
    where
        Se: Serializer,
    {
        (&self.x, &self.y, &self.z, &self.w).serialize(serializer)
    }
}

impl<'de, S> Deserialize<'de> for Quaternion<S>
where
    S: FloatingPoint + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (x, y, z, w) = <(S, S, S, S)>::deserialize(deserializer)?;
        Ok(Self::new(x, y, z, w))
    }
}

pub type Quaternionf = Quaternion<f32>;
pub type Quaterniond = Quaternion<f64>;

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(q: Quaternion<f32>, expected: (f32, f32, f32, f32)) {
        assert!((q.x - expected.0).abs() < 1e-6, "x: {} vs {}", q.x, expected.0);
        assert!((q.y - expected.1).abs() < 1e-6, "y: {} vs {}", q.y, expected.1);
        assert!((q.z - expected.2).abs() < 1e-6, "z: {} vs {}", q.z, expected.2);
        assert!((q.w - expected.3).abs() < 1e-6, "w: {} vs {}", q.w, expected.3);
    }

    #[test]
    fn test_default_and_new() {
        let d = Quaternionf::default();
        assert_eq!(d, Quaternion::new(0.0, 0.0, 0.0, 0.0));

        let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!((q.x, q.y, q.z, q.w), (1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn test_componentwise_arithmetic() {
        let a = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        let b = Quaternion::new(0.5, -1.0, 1.5, -2.0);

        assert_eq!(a + b, Quaternion::new(1.5, 1.0, 4.5, 2.0));
        assert_eq!(a - b, Quaternion::new(0.5, 3.0, 1.5, 6.0));
        assert_eq!(-a, Quaternion::new(-1.0, -2.0, -3.0, -4.0));

        let mut acc = a;
        acc += b;
        acc -= b;
        assert_eq!(acc, a);
    }

    #[test]
    fn test_hamilton_product_unit_identities() {
        let i = Quaternionf::new(1.0, 0.0, 0.0, 0.0);
        let j = Quaternionf::new(0.0, 1.0, 0.0, 0.0);
        let k = Quaternionf::new(0.0, 0.0, 1.0, 0.0);

        assert_eq!(i * j, k);
        assert_eq!(j * i, -k);
        assert_eq!(i * i, Quaternion::new(0.0, 0.0, 0.0, -1.0));
    }

    #[test]
    fn test_mul_assign_matches_mul() {
        let a = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        let b = Quaternion::new(-2.0, 1.0, 0.5, 3.0);

        let mut acc = a;
        acc *= b;
        assert_eq!(acc, a * b);
    }

    #[test]
    fn test_norm_and_magnitude() {
        let q = Quaternionf::new(1.0, 2.0, 2.0, 0.0);

        assert_eq!(q.norm(), 9.0);
        assert_eq!(q.magnitude(), 3.0);
    }

    #[test]
    fn test_normalization() {
        let q = Quaternionf::new(0.0, 3.0, 0.0, 4.0);
        assert!(!q.is_normalized());

        let unit = q.normalized();
        assert!(unit.is_normalized());
        assert_close(unit, (0.0, 0.6, 0.0, 0.8));

        // The receiver stays as it was.
        assert_eq!(q.magnitude(), 5.0);
    }

    #[test]
    fn test_conjugation_property() {
        let q = Quaternionf::new(1.0, 2.0, 3.0, 4.0);
        let product = q * q.conjugated();

        assert_close(product, (0.0, 0.0, 0.0, q.norm()));
    }

    #[test]
    fn test_inverse_and_division() {
        let q = Quaternionf::new(1.0, -2.0, 0.5, 2.0);

        assert_close(q * q.inversed(), (0.0, 0.0, 0.0, 1.0));
        assert_close(q / q, (0.0, 0.0, 0.0, 1.0));

        let mut acc = q;
        acc /= q;
        assert_close(acc, (0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_scalar_multiplication() {
        let q = Quaternionf::new(1.0, -2.0, 3.0, -4.0);
        let expected = Quaternion::new(2.0, -4.0, 6.0, -8.0);

        assert_eq!(2.0 * q, expected);
        assert_eq!(q * 2.0, expected);
    }

    #[test]
    fn test_dot() {
        let a = Quaternionf::new(1.0, 2.0, 3.0, 4.0);
        let b = Quaternionf::new(2.0, 3.0, 4.0, 5.0);

        assert_eq!(a.dot(&b), 2.0 + 6.0 + 12.0 + 20.0);
    }

    #[test]
    fn test_vector_lifting() {
        let v = Vector3::<f32>::from([1.0, 2.0, 3.0]);
        let lifted = Quaternionf::from(v);

        assert_eq!(lifted, Quaternion::new(1.0, 2.0, 3.0, 0.0));

        let back: Vector3<f32> = lifted.into();
        assert_eq!(back, v);

        let q = Quaternionf::new(0.0, 0.0, 0.0, 1.0);
        assert_eq!(q * v, lifted);
    }

    #[test]
    fn test_from_axis_angle() {
        let axis = Vector3::<f32>::from([0.0, 0.0, 1.0]);
        let q = Quaternionf::from_axis_angle(axis, 90.0);

        let half_sqrt2 = core::f32::consts::FRAC_1_SQRT_2;
        assert_close(q, (0.0, 0.0, half_sqrt2, half_sqrt2));
        assert!(q.is_normalized());
    }

    #[test]
    fn test_to_matrix_rotates_homogeneous_point() {
        let q = Quaternionf::from_axis_angle(Vector3::from([0.0, 0.0, 1.0]), 90.0);
        let rotation = q.to_matrix();

        // Row-vector convention: the point premultiplies the matrix.
        let point = Matrix::<1, 4, f32>::from_values(&[1.0, 0.0, 0.0, 1.0]).unwrap();
        let rotated = point * rotation;

        let expected = [0.0, 1.0, 0.0, 1.0];
        for (value, expected) in rotated.values().iter().zip(expected) {
            assert!((value - expected).abs() < 1e-6);
        }
    }

    #[test]
    fn test_to_matrix_normalizes_internally() {
        let q = Quaternionf::from_axis_angle(Vector3::from([0.0, 1.0, 0.0]), 30.0);
        let scaled = q * 5.0;

        let a = q.to_matrix();
        let b = scaled.to_matrix();

        for (x, y) in a.values().iter().zip(b.values()) {
            assert!((x - y).abs() < 1e-6);
        }
    }

    #[test]
    fn test_display_format() {
        let q = Quaternionf::new(0.0, -1.5, 0.25, 1.0);
        assert_eq!(
            q.to_string(),
            "   0.000000   -1.500000    0.250000    1.000000"
        );
    }

    #[test]
    fn test_bincode_roundtrip() {
        let q = Quaterniond::new(0.1, -0.2, 0.3, 0.9);

        let encoded = bincode::serialize(&q).unwrap();
        let decoded: Quaterniond = bincode::deserialize(&encoded).unwrap();

        assert_eq!(q, decoded);
    }
}
