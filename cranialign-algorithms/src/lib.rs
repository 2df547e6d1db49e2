//! # Cranialign Algorithms
//!
//! Rigid alignment of a scene to canonical anatomical reference frames.
//!
//! This crate computes pure rotation matrices from sparse named landmark
//! positions: the Frankfort horizontal plane from the bilateral porions and
//! a zygoorbitale, and the Opisthion-Sella / Opisthion-Nasion sagittal
//! references from the porions and two midline points.

pub mod alignment;
pub mod protocols;

// Re-export commonly used items
pub use alignment::*;
pub use protocols::*;
