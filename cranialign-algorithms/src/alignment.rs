//! Anatomical frame alignment from landmark positions
//!
//! Both alignments share the same three-stage construction: a roll
//! correction about Z levels the bilateral porion pair in the horizontal
//! plane, a pitch correction about Y levels it front-to-back, and a final
//! rotation about X levels the reference plane or midline vector. The
//! stages compose into a single pure rotation with zero translation.

use cranialign_core::{midpoint, Point3d, Transform3D};

/// Compute the Frankfort horizontal alignment
///
/// Levels the bilateral porion pair, then rotates the plane through the
/// porions and the zygoorbitale into the horizontal. The zygoorbitale may
/// be the left or right variant; the math is the same.
///
/// The returned transform is a pure rotation: its 3x3 block is orthonormal
/// with determinant +1 and its translation is zero. Inputs are read only.
///
/// Degenerate input (coincident porions, or a zygoorbitale on the porion
/// midpoint) does not fail: `f64::atan2(0.0, 0.0)` is `0.0`, so the
/// affected stage contributes no correction.
///
/// # Arguments
/// * `po_r` - Right porion
/// * `po_l` - Left porion
/// * `zygoorbitale` - Unilateral zygoorbitale reference point
///
/// # Returns
/// * `Transform3D` - Rotation re-expressing the scene in the Frankfort frame
pub fn frankfort_alignment(po_r: Point3d, po_l: Point3d, zygoorbitale: Point3d) -> Transform3D {
    let (leveled, po_r, po_l) = level_porion_pair(po_r, po_l);
    let zyo = leveled.transform_point(&zygoorbitale);

    let v = zyo - midpoint(&po_r, &po_l);
    let plane_level = Transform3D::from_rotation_x(-v.z.atan2(v.y));

    plane_level * leveled
}

/// Compute a sagittal midline alignment
///
/// Levels the bilateral porion pair exactly as [`frankfort_alignment`],
/// then levels the midline vector from `origin` to `apex` within the
/// sagittal plane. Used for the Opisthion-Sella and Opisthion-Nasion
/// references, which differ only in which landmark plays `apex`.
///
/// Same guarantees as [`frankfort_alignment`]: pure rotation, no input
/// mutation, degenerate geometry yields no correction rather than a panic.
pub fn sagittal_alignment(
    po_r: Point3d,
    po_l: Point3d,
    origin: Point3d,
    apex: Point3d,
) -> Transform3D {
    let (leveled, _, _) = level_porion_pair(po_r, po_l);
    let origin = leveled.transform_point(&origin);
    let apex = leveled.transform_point(&apex);

    let v = apex - origin;
    let midline_level = Transform3D::from_rotation_x(-v.z.atan2(v.y));

    midline_level * leveled
}

/// Stages 1 and 2: level the porion pair so it differs only laterally
///
/// Returns the composed rotation together with the pair re-expressed
/// through it.
fn level_porion_pair(po_r: Point3d, po_l: Point3d) -> (Transform3D, Point3d, Point3d) {
    // roll about Z from the horizontal-plane components of the difference
    let d = po_r - po_l;
    let roll = Transform3D::from_rotation_z(-d.y.atan2(d.x));

    let po_r = roll.transform_point(&po_r);
    let po_l = roll.transform_point(&po_l);

    // pitch about Y from the partially leveled difference
    let d = po_r - po_l;
    let pitch = Transform3D::from_rotation_y(d.z.atan2(d.x));

    (
        pitch * roll,
        pitch.transform_point(&po_r),
        pitch.transform_point(&po_l),
    )
}
