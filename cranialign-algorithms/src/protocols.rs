//! Craniometric alignment protocols
//!
//! The named entry points used by annotation hosts: each resolves its
//! required landmarks against the project's name table and the placed
//! fiducials, then hands the positions to the pure geometry in
//! [`crate::alignment`]. The four host actions (Frankfort left/right,
//! O-Se, O-Na) collapse onto two parameterized operations.

use crate::alignment::{frankfort_alignment, sagittal_alignment};
use cranialign_core::{landmark, FiducialSource, LandmarkNames, Result, Transform3D};
use log::debug;

/// Right porion
pub const PORION_RIGHT: &str = "poR";
/// Left porion
pub const PORION_LEFT: &str = "poL";
/// Left zygoorbitale
pub const ZYGOORBITALE_LEFT: &str = "zyoL";
/// Right zygoorbitale
pub const ZYGOORBITALE_RIGHT: &str = "zyoR";
/// Sella
pub const SELLA: &str = "se";
/// Opisthion
pub const OPISTHION: &str = "o";
/// Nasion
pub const NASION: &str = "n";

/// Which zygoorbitale constrains the Frankfort plane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrankfortSide {
    Left,
    Right,
}

impl FrankfortSide {
    /// Landmark name of the zygoorbitale on this side
    pub fn zygoorbitale(self) -> &'static str {
        match self {
            Self::Left => ZYGOORBITALE_LEFT,
            Self::Right => ZYGOORBITALE_RIGHT,
        }
    }
}

/// Which midline landmark the opisthion line is drawn to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MidlineReference {
    /// Opisthion-Sella reference
    Sella,
    /// Opisthion-Nasion reference
    Nasion,
}

impl MidlineReference {
    /// Landmark name of the apex of the midline vector
    pub fn apex(self) -> &'static str {
        match self {
            Self::Sella => SELLA,
            Self::Nasion => NASION,
        }
    }
}

/// Frankfort alignment from named landmarks
///
/// Resolves `poR`, `poL` and the side's zygoorbitale against the name
/// table and the placed fiducials, then computes the Frankfort rotation.
/// Refuses without producing a matrix when any required landmark is
/// unconfigured or not placed yet; nothing is mutated either way.
pub fn frankfort_from_landmarks(
    names: &LandmarkNames,
    fiducials: &impl FiducialSource,
    side: FrankfortSide,
) -> Result<Transform3D> {
    let po_r = landmark::resolve(names, fiducials, PORION_RIGHT)?;
    let po_l = landmark::resolve(names, fiducials, PORION_LEFT)?;
    let zyo = landmark::resolve(names, fiducials, side.zygoorbitale())?;

    debug!("frankfort alignment using {}", side.zygoorbitale());
    Ok(frankfort_alignment(po_r, po_l, zyo))
}

/// Sagittal midline alignment from named landmarks
///
/// Resolves `poR`, `poL`, the opisthion and the reference apex (`se` or
/// `n`), then computes the sagittal rotation. Same refusal behavior as
/// [`frankfort_from_landmarks`].
pub fn midline_from_landmarks(
    names: &LandmarkNames,
    fiducials: &impl FiducialSource,
    reference: MidlineReference,
) -> Result<Transform3D> {
    let po_r = landmark::resolve(names, fiducials, PORION_RIGHT)?;
    let po_l = landmark::resolve(names, fiducials, PORION_LEFT)?;
    let origin = landmark::resolve(names, fiducials, OPISTHION)?;
    let apex = landmark::resolve(names, fiducials, reference.apex())?;

    debug!("midline alignment from {} to {}", OPISTHION, reference.apex());
    Ok(sagittal_alignment(po_r, po_l, origin, apex))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cranialign_core::{Error, Point3d};

    fn names() -> LandmarkNames {
        LandmarkNames::from_lines("poR\npoL\nzyoL\nzyoR\nse\no\nn")
    }

    fn fiducials() -> Vec<Point3d> {
        vec![
            Point3d::new(62.0, -4.0, -36.0),  // poR
            Point3d::new(-60.0, -2.0, -38.0), // poL
            Point3d::new(-42.0, 61.0, -44.0), // zyoL
            Point3d::new(43.0, 62.0, -45.0),  // zyoR
            Point3d::new(0.5, -14.0, 14.0),   // se
            Point3d::new(1.0, -94.0, -28.0),  // o
            Point3d::new(0.0, 88.0, 22.0),    // n
        ]
    }

    #[test]
    fn test_side_selects_zygoorbitale() {
        assert_eq!(FrankfortSide::Left.zygoorbitale(), "zyoL");
        assert_eq!(FrankfortSide::Right.zygoorbitale(), "zyoR");
        assert_eq!(MidlineReference::Sella.apex(), "se");
        assert_eq!(MidlineReference::Nasion.apex(), "n");
    }

    #[test]
    fn test_frankfort_both_sides() {
        for side in [FrankfortSide::Left, FrankfortSide::Right] {
            let t = frankfort_from_landmarks(&names(), &fiducials(), side).unwrap();
            assert!(t.is_rigid_rotation(1e-9));
        }
    }

    #[test]
    fn test_midline_both_references() {
        for reference in [MidlineReference::Sella, MidlineReference::Nasion] {
            let t = midline_from_landmarks(&names(), &fiducials(), reference).unwrap();
            assert!(t.is_rigid_rotation(1e-9));
        }
    }

    #[test]
    fn test_references_share_the_math() {
        // with sella and nasion at the same position, O-Se and O-Na agree
        let mut points = fiducials();
        points[6] = points[4];

        let o_se = midline_from_landmarks(&names(), &points, MidlineReference::Sella).unwrap();
        let o_na = midline_from_landmarks(&names(), &points, MidlineReference::Nasion).unwrap();
        assert_eq!(o_se.matrix, o_na.matrix);
    }

    #[test]
    fn test_unconfigured_landmark_refused() {
        let names = LandmarkNames::from_lines("poR\npoL\nzyoR");
        let err = frankfort_from_landmarks(&names, &fiducials(), FrankfortSide::Left).unwrap_err();
        assert_eq!(
            err,
            Error::MissingLandmark {
                name: "zyoL".to_string()
            }
        );
    }

    #[test]
    fn test_unplaced_landmark_refused() {
        let placed = fiducials()[..5].to_vec();
        let err =
            midline_from_landmarks(&names(), &placed, MidlineReference::Sella).unwrap_err();
        assert_eq!(
            err,
            Error::InsufficientPlacedPoints {
                name: "o".to_string(),
                index: 5,
                placed: 5,
            }
        );
    }
}
