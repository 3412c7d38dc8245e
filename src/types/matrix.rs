// src/types/matrix.rs
// Generic fixed-shape matrix with row-major storage. The shape is part of
// the type, so mismatched arithmetic is a compile error; only element
// access and the construction preconditions are checked at run time.

use core::fmt;
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Rem, Sub, SubAssign};

use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::MatrixError;
use crate::types::traits::Scalar;

/// Fixed-shape `R`x`C` matrix over the scalar type `S`, stored row-major.
///
/// A matrix with a single column is the vector convention used throughout
/// the crate; see the aliases and accessors in [`crate::types::vector`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Matrix<const R: usize, const C: usize, S: Scalar = f32> {
    pub(crate) rows: [[S; C]; R],
}

impl<const R: usize, const C: usize, S: Scalar> Matrix<R, C, S> {
    pub(crate) fn zeroed() -> Self {
        Self {
            rows: [[S::zero(); C]; R],
        }
    }

    /// Construct a zero-filled matrix.
    ///
    /// Fails with [`MatrixError::ZeroDimension`] when either shape
    /// parameter is zero.
    pub fn new() -> Result<Self, MatrixError> {
        if R == 0 || C == 0 {
            return Err(MatrixError::ZeroDimension);
        }

        Ok(Self::zeroed())
    }

    /// Construct from a row-major value list covering the shape exactly.
    pub fn from_values(values: &[S]) -> Result<Self, MatrixError> {
        if R == 0 || C == 0 {
            return Err(MatrixError::ZeroDimension);
        }

        if values.len() != R * C {
            return Err(MatrixError::ValueCountMismatch {
                rows: R,
                cols: C,
                expected: R * C,
                provided: values.len(),
            });
        }

        let mut mat = Self::zeroed();
        mat.values_mut().copy_from_slice(values);

        Ok(mat)
    }

    /// Number of rows.
    pub const fn rows(&self) -> usize {
        R
    }

    /// Number of columns.
    pub const fn cols(&self) -> usize {
        C
    }

    /// Bounds-checked element read.
    pub fn at(&self, row: usize, col: usize) -> Result<S, MatrixError> {
        if row >= R || col >= C {
            return Err(MatrixError::IndexOutOfBounds {
                row,
                col,
                rows: R,
                cols: C,
            });
        }

        Ok(self.rows[row][col])
    }

    /// Bounds-checked element access for writing.
    pub fn at_mut(&mut self, row: usize, col: usize) -> Result<&mut S, MatrixError> {
        if row >= R || col >= C {
            return Err(MatrixError::IndexOutOfBounds {
                row,
                col,
                rows: R,
                cols: C,
            });
        }

        Ok(&mut self.rows[row][col])
    }

    /// The backing buffer as a flat row-major slice.
    pub fn values(&self) -> &[S] {
        self.rows.as_flattened()
    }

    /// The backing buffer as a mutable flat row-major slice.
    pub fn values_mut(&mut self) -> &mut [S] {
        self.rows.as_flattened_mut()
    }

    /// Fill every element with the scalar zero.
    pub fn set_zero(&mut self) {
        for value in self.values_mut() {
            *value = S::zero();
        }
    }

    /// Zero-fill, then set the diagonal to one.
    ///
    /// Fails with [`MatrixError::NotSquare`] when `R != C`.
    pub fn set_identity(&mut self) -> Result<(), MatrixError> {
        if R != C {
            return Err(MatrixError::NotSquare { rows: R, cols: C });
        }

        self.set_zero();
        for i in 0..R {
            self.rows[i][i] = S::one();
        }

        Ok(())
    }

    /// Return the transposed `C`x`R` matrix; the receiver is untouched.
    pub fn transposed(&self) -> Matrix<C, R, S> {
        let mut result = Matrix::zeroed();
        for i in 0..R {
            for j in 0..C {
                result.rows[j][i] = self.rows[i][j];
            }
        }

        result
    }
}

impl<const N: usize, S: Scalar> Matrix<N, N, S> {
    /// Identity matrix, available on square shapes.
    pub fn identity() -> Self {
        let mut mat = Self::zeroed();
        for i in 0..N {
            mat.rows[i][i] = S::one();
        }

        mat
    }
}

impl<const R: usize, const C: usize, S: Scalar> From<[[S; C]; R]> for Matrix<R, C, S> {
    fn from(rows: [[S; C]; R]) -> Self {
        Self { rows }
    }
}

impl<const R: usize, const C: usize, S: Scalar> Add for Matrix<R, C, S> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        let mut result = self.rows;
        for i in 0..R {
            for j in 0..C {
                result[i][j] = self.rows[i][j] + other.rows[i][j];
            }
        }

        Self { rows: result }
    }
}

impl<const R: usize, const C: usize, S: Scalar> AddAssign for Matrix<R, C, S> {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl<const R: usize, const C: usize, S: Scalar> Sub for Matrix<R, C, S> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        let mut result = self.rows;
        for i in 0..R {
            for j in 0..C {
                result[i][j] = self.rows[i][j] - other.rows[i][j];
            }
        }

        Self { rows: result }
    }
}

impl<const R: usize, const C: usize, S: Scalar> SubAssign for Matrix<R, C, S> {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl<const R: usize, const C: usize, S> Neg for Matrix<R, C, S>
where
    S: Scalar + Neg<Output = S>,
{
    type Output = Self;

    fn neg(self) -> Self {
        let mut result = self.rows;
        for i in 0..R {
            for j in 0..C {
                result[i][j] = -self.rows[i][j];
            }
        }

        Self { rows: result }
    }
}

impl<const M: usize, const N: usize, const O: usize, S: Scalar> Mul<Matrix<N, O, S>>
    for Matrix<M, N, S>
{
    type Output = Matrix<M, O, S>;

    fn mul(self, rhs: Matrix<N, O, S>) -> Self::Output {
        let mut result = Matrix::zeroed();
        for row in 0..M {
            for col in 0..O {
                let mut cell = S::zero();
                for i in 0..N {
                    cell = cell + self.rows[row][i] * rhs.rows[i][col];
                }
                result.rows[row][col] = cell;
            }
        }

        result
    }
}

impl<const R: usize, const C: usize, S: Scalar> MulAssign<Matrix<C, C, S>> for Matrix<R, C, S> {
    fn mul_assign(&mut self, rhs: Matrix<C, C, S>) {
        *self = *self * rhs;
    }
}

impl<const R: usize, const C: usize, S: Scalar> Mul<S> for Matrix<R, C, S> {
    type Output = Self;

    fn mul(self, scalar: S) -> Self {
        let mut result = self.rows;
        for i in 0..R {
            for j in 0..C {
                result[i][j] = self.rows[i][j] * scalar;
            }
        }

        Self { rows: result }
    }
}

impl<const R: usize, const C: usize, S> Rem<S> for Matrix<R, C, S>
where
    S: Scalar + Rem<Output = S>,
{
    type Output = Self;

    fn rem(self, scalar: S) -> Self {
        let mut result = self.rows;
        for i in 0..R {
            for j in 0..C {
                result[i][j] = self.rows[i][j] % scalar;
            }
        }

        Self { rows: result }
    }
}

macro_rules! impl_prefix_scalar_mul {
    ($($t:ty),*) => {$(
        impl<const R: usize, const C: usize> Mul<Matrix<R, C, $t>> for $t {
            type Output = Matrix<R, C, $t>;

            fn mul(self, rhs: Matrix<R, C, $t>) -> Self::Output {
                rhs * self
            }
        }
    )*};
}

impl_prefix_scalar_mul!(f32, f64, i32, u32);

impl<const R: usize, const C: usize, S: Scalar + fmt::Display> fmt::Display for Matrix<R, C, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if C == 1 {
            for row in &self.rows {
                write!(f, "{} ", row[0])?;
            }
            writeln!(f)?;
        } else {
            for row in &self.rows {
                for value in row {
                    write!(f, "{:11.6} ", value)?;
                }
                writeln!(f)?;
            }
        }

        Ok(())
    }
}

// Serde integration: a matrix travels as a flat row-major sequence of
// exactly R*C scalars.

impl<const R: usize, const C: usize, S> Serialize for Matrix<R, C, S>
where
    S: Scalar + Serialize,
{
    fn serialize<Se>(&self, serializer: Se) -> Result<Se::Ok, Se::Error>
    where
        Se: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(R * C))?;
        for value in self.values() {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

struct MatrixVisitor<const R: usize, const C: usize, S> {
    marker: PhantomData<S>,
}

impl<'de, const R: usize, const C: usize, S> Visitor<'de> for MatrixVisitor<R, C, S>
where
    S: Scalar + Deserialize<'de>,
{
    type Value = Matrix<R, C, S>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "a sequence of {} scalars", R * C)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut mat = Matrix::zeroed();
        let values = mat.values_mut();

        for index in 0..R * C {
            values[index] = seq
                .next_element::<S>()?
                .ok_or_else(|| de::Error::invalid_length(index, &self))?;
        }

        if seq.next_element::<S>()?.is_some() {
            return Err(de::Error::invalid_length(R * C + 1, &self));
        }

        Ok(mat)
    }
}

impl<'de, const R: usize, const C: usize, S> Deserialize<'de> for Matrix<R, C, S>
where
    S: Scalar + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(MatrixVisitor {
            marker: PhantomData,
        })
    }
}

// Shape/precision aliases mirroring the common graphics shapes.

pub type Matrix2f = Matrix<2, 2, f32>;
pub type Matrix22f = Matrix<2, 2, f32>;
pub type Matrix23f = Matrix<2, 3, f32>;
pub type Matrix32f = Matrix<3, 2, f32>;
pub type Matrix3f = Matrix<3, 3, f32>;
pub type Matrix33f = Matrix<3, 3, f32>;
pub type Matrix34f = Matrix<3, 4, f32>;
pub type Matrix42f = Matrix<4, 2, f32>;
pub type Matrix43f = Matrix<4, 3, f32>;
pub type Matrix4f = Matrix<4, 4, f32>;
pub type Matrix44f = Matrix<4, 4, f32>;

pub type Matrix2d = Matrix<2, 2, f64>;
pub type Matrix22d = Matrix<2, 2, f64>;
pub type Matrix23d = Matrix<2, 3, f64>;
pub type Matrix32d = Matrix<3, 2, f64>;
pub type Matrix3d = Matrix<3, 3, f64>;
pub type Matrix33d = Matrix<3, 3, f64>;
pub type Matrix34d = Matrix<3, 4, f64>;
pub type Matrix42d = Matrix<4, 2, f64>;
pub type Matrix43d = Matrix<4, 3, f64>;
pub type Matrix4d = Matrix<4, 4, f64>;
pub type Matrix44d = Matrix<4, 4, f64>;

pub type Matrix2i = Matrix<2, 2, i32>;
pub type Matrix22i = Matrix<2, 2, i32>;
pub type Matrix23i = Matrix<2, 3, i32>;
pub type Matrix32i = Matrix<3, 2, i32>;
pub type Matrix3i = Matrix<3, 3, i32>;
pub type Matrix33i = Matrix<3, 3, i32>;
pub type Matrix34i = Matrix<3, 4, i32>;
pub type Matrix42i = Matrix<4, 2, i32>;
pub type Matrix43i = Matrix<4, 3, i32>;
pub type Matrix4i = Matrix<4, 4, i32>;
pub type Matrix44i = Matrix<4, 4, i32>;

pub type Matrix2ui = Matrix<2, 2, u32>;
pub type Matrix22ui = Matrix<2, 2, u32>;
pub type Matrix23ui = Matrix<2, 3, u32>;
pub type Matrix32ui = Matrix<3, 2, u32>;
pub type Matrix3ui = Matrix<3, 3, u32>;
pub type Matrix33ui = Matrix<3, 3, u32>;
pub type Matrix34ui = Matrix<3, 4, u32>;
pub type Matrix42ui = Matrix<4, 2, u32>;
pub type Matrix43ui = Matrix<4, 3, u32>;
pub type Matrix4ui = Matrix<4, 4, u32>;
pub type Matrix44ui = Matrix<4, 4, u32>;
