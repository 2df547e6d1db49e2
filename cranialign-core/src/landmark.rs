//! Landmark name tables and named landmark sets

use crate::error::{Error, Result};
use crate::point::Point3d;
use crate::traits::FiducialSource;
use crate::transform::Transform3D;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Ordered table of landmark names
///
/// The order is defined by the project configuration: the name at table
/// index `i` belongs to the `i`-th placed control point. If a name appears
/// more than once, the first occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandmarkNames {
    names: Vec<String>,
}

impl LandmarkNames {
    /// Create a name table from an ordered list of names
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    /// Create a name table from newline-separated text, one name per line
    ///
    /// This matches the layout of the project configuration files the host
    /// application reads; blank lines are kept so indices stay aligned with
    /// the source file.
    pub fn from_lines(text: &str) -> Self {
        Self {
            names: text.lines().map(str::to_string).collect(),
        }
    }

    /// Index of the first occurrence of `name`, if present
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// The name at `index`, if the table is that long
    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Check whether `name` is present in the table
    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    /// Number of configured names
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Get an iterator over the configured names
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl FromIterator<String> for LandmarkNames {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::new(Vec::from_iter(iter))
    }
}

/// Resolve a named landmark against the placed fiducials
///
/// Looks the name up in the ordered table, verifies the fiducial source has
/// at least `index + 1` placed points, and returns the position. Fails
/// without touching any state when the landmark is not configured or not
/// placed yet.
pub fn resolve(
    names: &LandmarkNames,
    fiducials: &impl FiducialSource,
    name: &str,
) -> Result<Point3d> {
    let index = match names.index_of(name) {
        Some(index) => index,
        None => {
            debug!("landmark \"{name}\" is not in the configured name table");
            return Err(Error::MissingLandmark {
                name: name.to_string(),
            });
        }
    };

    let placed = fiducials.num_placed();
    if placed <= index {
        debug!("landmark \"{name}\" (index {index}) not placed yet, {placed} points placed");
        return Err(Error::InsufficientPlacedPoints {
            name: name.to_string(),
            index,
            placed,
        });
    }

    Ok(fiducials.position(index))
}

/// Mapping from landmark name to position
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LandmarkSet {
    positions: HashMap<String, Point3d>,
}

impl LandmarkSet {
    /// Create a new empty landmark set
    pub fn new() -> Self {
        Self {
            positions: HashMap::new(),
        }
    }

    /// Build a set by resolving each of `required` against the fiducials
    ///
    /// Fails on the first landmark that is unconfigured or unplaced; no
    /// partial set is returned.
    pub fn from_fiducials(
        names: &LandmarkNames,
        fiducials: &impl FiducialSource,
        required: &[&str],
    ) -> Result<Self> {
        let mut set = Self::new();
        for name in required {
            set.insert(*name, resolve(names, fiducials, name)?);
        }
        Ok(set)
    }

    /// Insert or replace a landmark position
    pub fn insert(&mut self, name: impl Into<String>, position: Point3d) {
        self.positions.insert(name.into(), position);
    }

    /// Get the position of `name`, if present
    pub fn get(&self, name: &str) -> Option<Point3d> {
        self.positions.get(name).copied()
    }

    /// Check whether `name` is present
    pub fn contains(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    /// Number of landmarks in the set
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Get an iterator over name/position pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Point3d)> {
        self.positions.iter().map(|(n, p)| (n.as_str(), p))
    }

    /// Apply a transformation to all positions in the set
    pub fn transform(&mut self, transform: &Transform3D) {
        for position in self.positions.values_mut() {
            *position = transform.transform_point(position);
        }
    }
}
