//! Rotation of vectors about an arbitrary axis
//!
//! A `Rotator` holds an axis and rotates headings about it by a given angle in
//! radians using the right-hand rule. The rotation for the last (axis, angle)
//! pair is cached, so stepping many headings through the same rotation only
//! builds the rotation once.

use super::Space;
use crate::errors::Result;
use log::debug;
use nalgebra::{Rotation3, Unit};

#[derive(Debug, Clone, Copy)]
struct CachedRotation {
    radians: f64,
    rotation: Rotation3<f64>,
}

/// Rotates `Space` vectors about an axis
///
/// # Examples
///
/// ```rust
/// use cartesian_space::{Rotator, Space};
/// use std::f64::consts::FRAC_PI_2;
///
/// let mut rotator = Rotator::new(Space::UZ);
/// let turned = rotator.rotate(&Space::UX, FRAC_PI_2).unwrap();
/// assert!((turned - Space::UY).magnitude() < 1e-15);
/// ```
#[derive(Debug, Clone)]
pub struct Rotator {
    axis: Space,
    cached: Option<CachedRotation>,
}

impl Rotator {
    /// Creates a rotator about `axis`; the axis need not be normalized
    pub fn new(axis: Space) -> Self {
        Rotator { axis, cached: None }
    }

    /// Degrees to radians
    pub fn deg2rad(degrees: f64) -> f64 {
        degrees.to_radians()
    }

    /// Radians to degrees
    pub fn rad2deg(radians: f64) -> f64 {
        radians.to_degrees()
    }

    /// The current rotation axis
    pub fn axis(&self) -> &Space {
        &self.axis
    }

    /// Replaces the rotation axis
    ///
    /// The cached rotation is only discarded when the axis actually changes.
    pub fn set_axis(&mut self, axis: Space) {
        if axis != self.axis {
            self.axis = axis;
            self.cached = None;
        }
    }

    /// Rotates `heading` by `radians` about the axis
    ///
    /// # Errors
    ///
    /// Returns a divide-by-zero error when the axis is the zero vector, which
    /// has no direction to rotate about.
    pub fn rotate(&mut self, heading: &Space, radians: f64) -> Result<Space> {
        let rotation = match self.cached {
            Some(cached) if cached.radians == radians => cached.rotation,
            _ => {
                let normal = self.axis.normalized()?;
                debug!(
                    "rebuilding rotation about {:?} by {} rad",
                    normal, radians
                );
                let rotation = Rotation3::from_axis_angle(
                    &Unit::new_unchecked(normal.to_vector3()),
                    radians,
                );
                self.cached = Some(CachedRotation { radians, rotation });
                rotation
            }
        };

        Ok(Space::from_vector3(rotation * heading.to_vector3()))
    }
}
