// src/types/vector.rs
// Column-vector conveniences over the matrix type: named component
// accessors, array/tuple conversions and the shape/precision aliases.

use crate::error::MatrixError;
use crate::types::matrix::Matrix;
use crate::types::traits::Scalar;

/// Column vector of `R` components: a matrix with a single column.
pub type Vector<const R: usize, S = f32> = Matrix<R, 1, S>;

pub type Vector2<S = f32> = Vector<2, S>;
pub type Vector3<S = f32> = Vector<3, S>;
pub type Vector4<S = f32> = Vector<4, S>;

pub type Vector2f = Vector<2, f32>;
pub type Vector3f = Vector<3, f32>;
pub type Vector4f = Vector<4, f32>;

pub type Vector2d = Vector<2, f64>;
pub type Vector3d = Vector<3, f64>;
pub type Vector4d = Vector<4, f64>;

pub type Vector2i = Vector<2, i32>;
pub type Vector3i = Vector<3, i32>;
pub type Vector4i = Vector<4, i32>;

pub type Vector2ui = Vector<2, u32>;
pub type Vector3ui = Vector<3, u32>;
pub type Vector4ui = Vector<4, u32>;

impl<const R: usize, S: Scalar> Matrix<R, 1, S> {
    /// Bounds-checked component read; shorthand for `at(index, 0)`.
    pub fn component(&self, index: usize) -> Result<S, MatrixError> {
        self.at(index, 0)
    }

    /// Bounds-checked component access for writing.
    pub fn component_mut(&mut self, index: usize) -> Result<&mut S, MatrixError> {
        self.at_mut(index, 0)
    }
}

macro_rules! impl_component_accessors {
    ($rows:literal, $(($get:ident, $get_mut:ident, $index:literal)),+) => {
        impl<S: Scalar> Matrix<$rows, 1, S> {
            $(
                pub fn $get(&self) -> S {
                    self.rows[$index][0]
                }

                pub fn $get_mut(&mut self) -> &mut S {
                    &mut self.rows[$index][0]
                }
            )+
        }
    };
}

impl_component_accessors!(2, (x, x_mut, 0), (y, y_mut, 1));
impl_component_accessors!(3, (x, x_mut, 0), (y, y_mut, 1), (z, z_mut, 2));
impl_component_accessors!(4, (x, x_mut, 0), (y, y_mut, 1), (z, z_mut, 2), (w, w_mut, 3));

// Conversions between column vectors and arrays.

impl<const R: usize, S: Scalar> From<[S; R]> for Matrix<R, 1, S> {
    fn from(components: [S; R]) -> Self {
        Self {
            rows: components.map(|value| [value]),
        }
    }
}

impl<const R: usize, S: Scalar> From<&[S; R]> for Matrix<R, 1, S> {
    fn from(components: &[S; R]) -> Self {
        Self::from(*components)
    }
}

impl<const R: usize, S: Scalar> From<Matrix<R, 1, S>> for [S; R] {
    fn from(vector: Matrix<R, 1, S>) -> Self {
        vector.rows.map(|row| row[0])
    }
}

// Conversions between the small column vectors and tuples.

impl<S: Scalar> From<(S, S)> for Vector2<S> {
    fn from(tuple: (S, S)) -> Self {
        Self::from([tuple.0, tuple.1])
    }
}

impl<S: Scalar> From<Vector2<S>> for (S, S) {
    fn from(vector: Vector2<S>) -> Self {
        (vector.x(), vector.y())
    }
}

impl<S: Scalar> From<(S, S, S)> for Vector3<S> {
    fn from(tuple: (S, S, S)) -> Self {
        Self::from([tuple.0, tuple.1, tuple.2])
    }
}

impl<S: Scalar> From<Vector3<S>> for (S, S, S) {
    fn from(vector: Vector3<S>) -> Self {
        (vector.x(), vector.y(), vector.z())
    }
}

impl<S: Scalar> From<(S, S, S, S)> for Vector4<S> {
    fn from(tuple: (S, S, S, S)) -> Self {
        Self::from([tuple.0, tuple.1, tuple.2, tuple.3])
    }
}

impl<S: Scalar> From<Vector4<S>> for (S, S, S, S) {
    fn from(vector: Vector4<S>) -> Self {
        (vector.x(), vector.y(), vector.z(), vector.w())
    }
}
