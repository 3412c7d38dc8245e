pub mod error;
pub mod transform;

pub mod types {
    pub mod matrix;
    pub mod quaternion;
    pub mod traits;
    pub mod vector;
}

pub use error::MatrixError;
pub use transform::Space;
pub use types::matrix::Matrix;
pub use types::quaternion::{Quaternion, Quaterniond, Quaternionf};
pub use types::traits::{FloatingPoint, Scalar};
pub use types::vector::{Vector, Vector2, Vector3, Vector4};
