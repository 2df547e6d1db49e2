//! 3D transformation utilities

use nalgebra::{Matrix3, Matrix4, Point3, Rotation3, Vector3};
use serde::{Deserialize, Serialize};

/// A 3D homogeneous transformation that can be applied to points and landmarks
///
/// Alignment operations only ever produce pure rotations (orthonormal 3x3
/// block, zero translation); the type itself can hold any invertible 4x4
/// matrix so composed results stay representable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform3D {
    pub matrix: Matrix4<f64>,
}

impl Transform3D {
    /// Create an identity transformation
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// Create a rotation of `angle` radians about the X axis
    pub fn from_rotation_x(angle: f64) -> Self {
        Self::from_rotation(Rotation3::from_axis_angle(&Vector3::x_axis(), angle))
    }

    /// Create a rotation of `angle` radians about the Y axis
    pub fn from_rotation_y(angle: f64) -> Self {
        Self::from_rotation(Rotation3::from_axis_angle(&Vector3::y_axis(), angle))
    }

    /// Create a rotation of `angle` radians about the Z axis
    pub fn from_rotation_z(angle: f64) -> Self {
        Self::from_rotation(Rotation3::from_axis_angle(&Vector3::z_axis(), angle))
    }

    /// Create a transformation from a rotation
    pub fn from_rotation(rotation: Rotation3<f64>) -> Self {
        Self {
            matrix: rotation.to_homogeneous(),
        }
    }

    /// Apply the transformation to a point
    pub fn transform_point(&self, point: &Point3<f64>) -> Point3<f64> {
        let homogeneous = self.matrix * point.to_homogeneous();
        Point3::from_homogeneous(homogeneous).unwrap_or(*point)
    }

    /// Apply the transformation to a vector
    pub fn transform_vector(&self, vector: &Vector3<f64>) -> Vector3<f64> {
        self.matrix.fixed_view::<3, 3>(0, 0) * vector
    }

    /// Compose this transformation with another
    ///
    /// `a.compose(b)` applies `b` first, then `a`.
    pub fn compose(self, other: Self) -> Self {
        Self {
            matrix: self.matrix * other.matrix,
        }
    }

    /// Get the inverse transformation
    pub fn inverse(self) -> Option<Self> {
        self.matrix.try_inverse().map(|inv_matrix| Self {
            matrix: inv_matrix,
        })
    }

    /// The 3x3 rotation block
    pub fn rotation(&self) -> Matrix3<f64> {
        self.matrix.fixed_view::<3, 3>(0, 0).into_owned()
    }

    /// The translation component
    pub fn translation(&self) -> Vector3<f64> {
        self.matrix.fixed_view::<3, 1>(0, 3).into_owned()
    }

    /// Check if this is approximately the identity transformation
    pub fn is_identity(&self, epsilon: f64) -> bool {
        (self.matrix - Matrix4::identity()).norm() < epsilon
    }

    /// Check that this is a pure rotation: orthonormal 3x3 block with
    /// determinant +1 and zero translation
    pub fn is_rigid_rotation(&self, epsilon: f64) -> bool {
        let r = self.rotation();
        (r.transpose() * r - Matrix3::identity()).norm() < epsilon
            && (r.determinant() - 1.0).abs() < epsilon
            && self.translation().norm() < epsilon
    }
}

impl Default for Transform3D {
    fn default() -> Self {
        Self::identity()
    }
}

impl std::ops::Mul for Transform3D {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.compose(rhs)
    }
}

impl From<Matrix4<f64>> for Transform3D {
    fn from(matrix: Matrix4<f64>) -> Self {
        Self { matrix }
    }
}

impl From<Rotation3<f64>> for Transform3D {
    fn from(rotation: Rotation3<f64>) -> Self {
        Self::from_rotation(rotation)
    }
}
