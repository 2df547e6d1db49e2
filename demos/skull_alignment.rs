//! Skull alignment example for cranialign
//!
//! This example demonstrates the full flow an annotation host performs:
//! - Configuring a landmark name table
//! - Filling a fiducial list in table order
//! - Computing Frankfort and Opisthion-Sella alignments
//! - Applying the returned matrix to the landmarks the caller owns

use anyhow::Result;
use cranialign_algorithms::{
    frankfort_from_landmarks, midline_from_landmarks, FrankfortSide, MidlineReference,
};
use cranialign_core::{FiducialList, LandmarkNames, Point3d, Transform3D};

fn print_fiducials(title: &str, fiducials: &FiducialList) {
    println!("{title}");
    for i in 0..fiducials.len() {
        let p = fiducials.position(i).unwrap();
        println!(
            "  {:<5} ({:8.3}, {:8.3}, {:8.3})",
            fiducials.label(i).unwrap_or("?"),
            p.x,
            p.y,
            p.z
        );
    }
}

fn print_matrix(title: &str, transform: &Transform3D) {
    println!("{title}");
    for row in 0..4 {
        println!(
            "  [{:8.4} {:8.4} {:8.4} {:8.4}]",
            transform.matrix[(row, 0)],
            transform.matrix[(row, 1)],
            transform.matrix[(row, 2)],
            transform.matrix[(row, 3)]
        );
    }
}

fn main() -> Result<()> {
    env_logger::init();

    // the host loads this table from the project configuration
    let names = LandmarkNames::from_lines("poR\npoL\nzyoL\nzyoR\nse\no\nn");

    // a digitized skull, tilted off every principal axis
    let mut fiducials = FiducialList::from_points(vec![
        Point3d::new(64.2, -6.8, -31.4),
        Point3d::new(-58.9, 1.2, -42.6),
        Point3d::new(-44.1, 58.3, -49.0),
        Point3d::new(46.8, 60.9, -41.7),
        Point3d::new(2.1, -12.5, 16.8),
        Point3d::new(3.4, -91.0, -33.2),
        Point3d::new(-0.7, 86.2, 19.5),
    ]);
    fiducials.apply_labels(&names);

    print_fiducials("Digitized landmarks:", &fiducials);

    let frankfort = frankfort_from_landmarks(&names, &fiducials, FrankfortSide::Left)?;
    print_matrix("\nFrankfort (L) rotation:", &frankfort);

    let mut aligned = fiducials.clone();
    aligned.transform(&frankfort);
    print_fiducials("\nLandmarks in the Frankfort frame:", &aligned);

    let o_se = midline_from_landmarks(&names, &fiducials, MidlineReference::Sella)?;
    print_matrix("\nO-Se rotation:", &o_se);

    let mut aligned = fiducials.clone();
    aligned.transform(&o_se);
    print_fiducials("\nLandmarks in the O-Se frame:", &aligned);

    Ok(())
}
