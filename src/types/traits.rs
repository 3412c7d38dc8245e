// src/types/traits.rs
// Numeric element traits for the matrix and quaternion types.

use core::ops::{Add, Div, Mul, Neg, Sub};

/// Minimal abstraction over the numeric element types the containers
/// accept.
///
/// Note: We require Copy, the comparison traits and the basic arithmetic
/// ops on Self.
pub trait Scalar:
    Copy
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    fn zero() -> Self;
    fn one() -> Self;
}

/// Floating-point elements: everything the quaternion algebra and the
/// transform builders need on top of [`Scalar`].
pub trait FloatingPoint: Scalar + Neg<Output = Self> {
    const PI: Self;

    /// Lossy conversion for numeric literals in generic code.
    fn from_f64(value: f64) -> Self;

    fn to_radians(self) -> Self;
    fn sqrt(self) -> Self;
    fn abs(self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn tan(self) -> Self;
    fn acos(self) -> Self;
}

macro_rules! impl_scalar_int {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            fn zero() -> Self { 0 }
            fn one() -> Self { 1 }
        }
    )*};
}

impl_scalar_int!(i32, u32);

macro_rules! impl_scalar_float {
    ($($t:ty => $pi:expr),*) => {$(
        impl Scalar for $t {
            fn zero() -> Self { 0.0 }
            fn one() -> Self { 1.0 }
        }

        impl FloatingPoint for $t {
            const PI: Self = $pi;

            fn from_f64(value: f64) -> Self { value as $t }

            fn to_radians(self) -> Self { <$t>::to_radians(self) }
            fn sqrt(self) -> Self { <$t>::sqrt(self) }
            fn abs(self) -> Self { <$t>::abs(self) }
            fn sin(self) -> Self { <$t>::sin(self) }
            fn cos(self) -> Self { <$t>::cos(self) }
            fn tan(self) -> Self { <$t>::tan(self) }
            fn acos(self) -> Self { <$t>::acos(self) }
        }
    )*};
}

impl_scalar_float!(f32 => core::f32::consts::PI, f64 => core::f64::consts::PI);
