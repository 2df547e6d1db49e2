//! Fiducial list container
//!
//! Models the host application's markup node: an ordered list of
//! operator-placed control points with optional labels. The point at
//! index `i` corresponds to the `i`-th entry of the project's landmark
//! name table.

use crate::landmark::LandmarkNames;
use crate::point::Point3d;
use crate::transform::Transform3D;
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// An ordered collection of placed fiducial points
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FiducialList {
    points: Vec<Point3d>,
    labels: Vec<Option<String>>,
}

impl FiducialList {
    /// Create a new empty fiducial list
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            labels: Vec::new(),
        }
    }

    /// Create a new fiducial list with specified capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
            labels: Vec::with_capacity(capacity),
        }
    }

    /// Create a fiducial list from a vector of points, without labels
    pub fn from_points(points: Vec<Point3d>) -> Self {
        let labels = vec![None; points.len()];
        Self { points, labels }
    }

    /// Get the number of placed points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the fiducial list is empty
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Add an unlabeled point
    pub fn push(&mut self, point: Point3d) {
        self.points.push(point);
        self.labels.push(None);
    }

    /// Add a labeled point
    pub fn push_labeled(&mut self, point: Point3d, label: impl Into<String>) {
        self.points.push(point);
        self.labels.push(Some(label.into()));
    }

    /// Get the position at `index`, if placed
    pub fn position(&self, index: usize) -> Option<Point3d> {
        self.points.get(index).copied()
    }

    /// Get the label at `index`, if one has been assigned
    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).and_then(|l| l.as_deref())
    }

    /// Label every placed point from the ordered name table
    ///
    /// Points beyond the table length keep their current label.
    pub fn apply_labels(&mut self, names: &LandmarkNames) {
        for (i, label) in self.labels.iter_mut().enumerate() {
            if let Some(name) = names.get(i) {
                *label = Some(name.to_string());
            }
        }
    }

    /// Get an iterator over the placed positions
    pub fn iter(&self) -> std::slice::Iter<'_, Point3d> {
        self.points.iter()
    }

    /// Clear all points from the list
    pub fn clear(&mut self) {
        self.points.clear();
        self.labels.clear();
    }

    /// Apply a transformation to all placed points
    pub fn transform(&mut self, transform: &Transform3D) {
        for point in &mut self.points {
            *point = transform.transform_point(point);
        }
    }
}

impl Default for FiducialList {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<usize> for FiducialList {
    type Output = Point3d;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl Extend<Point3d> for FiducialList {
    fn extend<I: IntoIterator<Item = Point3d>>(&mut self, iter: I) {
        for point in iter {
            self.push(point);
        }
    }
}

impl FromIterator<Point3d> for FiducialList {
    fn from_iter<I: IntoIterator<Item = Point3d>>(iter: I) -> Self {
        Self::from_points(Vec::from_iter(iter))
    }
}

impl<'a> IntoIterator for &'a FiducialList {
    type Item = &'a Point3d;
    type IntoIter = std::slice::Iter<'a, Point3d>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_push_and_index() {
        let mut fiducials = FiducialList::new();
        fiducials.push(Point3d::new(1.0, 2.0, 3.0));
        fiducials.push_labeled(Point3d::new(4.0, 5.0, 6.0), "se");

        assert_eq!(fiducials.len(), 2);
        assert_eq!(fiducials[1], Point3d::new(4.0, 5.0, 6.0));
        assert_eq!(fiducials.label(0), None);
        assert_eq!(fiducials.label(1), Some("se"));
        assert_eq!(fiducials.position(2), None);
    }

    #[test]
    fn test_apply_labels() {
        let names = LandmarkNames::from_lines("poR\npoL");
        let mut fiducials = FiducialList::from_points(vec![
            Point3d::new(60.0, 0.0, 0.0),
            Point3d::new(-60.0, 0.0, 0.0),
            Point3d::new(0.0, 80.0, 0.0),
        ]);
        fiducials.apply_labels(&names);

        assert_eq!(fiducials.label(0), Some("poR"));
        assert_eq!(fiducials.label(1), Some("poL"));
        // third point has no table entry
        assert_eq!(fiducials.label(2), None);
    }

    #[test]
    fn test_transform_all_points() {
        let mut fiducials = FiducialList::from_points(vec![
            Point3d::new(1.0, 0.0, 0.0),
            Point3d::new(0.0, 1.0, 0.0),
        ]);
        fiducials.transform(&Transform3D::from_rotation_z(std::f64::consts::FRAC_PI_2));

        assert_relative_eq!(fiducials[0], Point3d::new(0.0, 1.0, 0.0), epsilon = 1e-12);
        assert_relative_eq!(fiducials[1], Point3d::new(-1.0, 0.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_from_iterator() {
        let fiducials: FiducialList =
            (0..4).map(|i| Point3d::new(i as f64, 0.0, 0.0)).collect();
        assert_eq!(fiducials.len(), 4);
        assert!(fiducials.iter().all(|p| p.y == 0.0));
    }
}
