//! Core data structures and traits for cranialign
//!
//! This crate provides the fundamental types for anatomical landmark
//! processing: fiducial lists, landmark name tables, rigid transforms,
//! and the errors shared by the alignment algorithms.

pub mod point;
pub mod fiducial;
pub mod landmark;
pub mod traits;
pub mod transform;
pub mod error;

pub use point::*;
pub use fiducial::*;
pub use landmark::*;
pub use traits::*;
pub use transform::*;
pub use error::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Point3, Vector3, Matrix3, Matrix4, Rotation3};

/// Common result type for cranialign operations
pub type Result<T> = std::result::Result<T, Error>;
