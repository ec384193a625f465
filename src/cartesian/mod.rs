//! # Cartesian Three-Space Module
//!
//! This module provides `Space`, the classic Cartesian three-space vector used
//! as the geometric primitive of orbital calculations: positions, velocities,
//! accelerations and headings are all carried as `Space` values.
//!
//! ## Coordinate System Convention
//!
//! The basis is orthonormal and right-handed:
//! - `Space::UX × Space::UY = Space::UZ`
//! - `Space::UY × Space::UZ = Space::UX`
//! - `Space::UZ × Space::UX = Space::UY`
//!
//! Angles taken by this module are in radians.
//!
//! ## Internal Storage
//!
//! Components are stored as three independent `f64` values with no cached or
//! derived state. Any real triple is a legal vector, including the zero vector.
//! `Space` is `Copy`, so assigning one vector to another always produces an
//! independent instance.
//!
//! ## Operators
//!
//! - `-a`, `a + b`, `a - b`, `a += b`, `a -= b` work component-wise
//! - `a * b` between two vectors is the dot product and yields `f64`
//! - `a / k` divides by a scalar and yields `Result<Space>`, failing with
//!   [`SpaceError::DivideByZero`](crate::SpaceError::DivideByZero) when `k == 0`
//! - scaling by a scalar is spelled out with [`scaled`] so it can never be
//!   confused with the dot product
//!
//! Vectors have no order, so `Space` implements `PartialEq` but not `PartialOrd`.
//!
//! ## Examples
//!
//! ```rust
//! use cartesian_space::{cross, Space};
//!
//! let a = Space::new(1.0, 2.0, 3.0);
//! let b = Space::new(4.0, 5.0, 6.0);
//!
//! assert_eq!(a * b, 32.0);
//! assert_eq!(cross(&Space::UX, &Space::UY), Space::UZ);
//! assert_eq!(format!("{:?}", a + b), "(5, 7, 9)");
//! ```

pub mod format;
pub mod parse;
pub mod rotator;

use crate::errors::{divide_by_zero, Result};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// Three-dimensional Cartesian vector
///
/// Represents a point, direction or rate in three-space. Fields are public and
/// may be read or written independently at any time; writing one field leaves
/// the other two untouched.
///
/// Construction defaults missing trailing components to zero:
///
/// ```rust
/// use cartesian_space::Space;
///
/// assert_eq!(Space::default(), Space::new(0.0, 0.0, 0.0));
/// assert_eq!(Space::from_x(2.0), Space::new(2.0, 0.0, 0.0));
/// assert_eq!(Space::from_xy(2.0, 3.0), Space::new(2.0, 3.0, 0.0));
///
/// // Components by name, in any order, others default to zero
/// let v = Space { z: 4.0, x: 1.0, ..Space::default() };
/// assert_eq!(v, Space::new(1.0, 0.0, 4.0));
/// ```
#[derive(Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Space {
    /// X-component
    pub x: f64,
    /// Y-component
    pub y: f64,
    /// Z-component
    pub z: f64,
}

impl Space {
    /// Nominal machine tolerance for comparisons of derived values
    pub const EPSILON: f64 = 1e-16;

    /// The zero vector (origin)
    pub const UO: Space = Space::new(0.0, 0.0, 0.0);
    /// Unit vector along the x axis
    pub const UX: Space = Space::new(1.0, 0.0, 0.0);
    /// Unit vector along the y axis
    pub const UY: Space = Space::new(0.0, 1.0, 0.0);
    /// Unit vector along the z axis
    pub const UZ: Space = Space::new(0.0, 0.0, 1.0);

    /// Creates a new vector from all three components
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cartesian_space::Space;
    ///
    /// let v = Space::new(1.0, -2.0, 3.5);
    /// assert_eq!(v.x, 1.0);
    /// assert_eq!(v.y, -2.0);
    /// assert_eq!(v.z, 3.5);
    /// ```
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Space { x, y, z }
    }

    /// Creates `(x, 0, 0)`
    pub const fn from_x(x: f64) -> Self {
        Space::new(x, 0.0, 0.0)
    }

    /// Creates `(x, y, 0)`
    pub const fn from_xy(x: f64, y: f64) -> Self {
        Space::new(x, y, 0.0)
    }

    /// Creates a vector from polar coordinates
    ///
    /// # Arguments
    ///
    /// * `radius` - Distance from the origin
    /// * `theta` - Angle in the x-y plane, from the x axis, in radians
    /// * `phi` - Polar angle measured from the z axis, in radians
    ///
    /// # Mathematical Conversion
    ///
    /// - `x = radius * sin(phi) * cos(theta)`
    /// - `y = radius * sin(phi) * sin(theta)`
    /// - `z = radius * cos(phi)`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cartesian_space::Space;
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// let v = Space::from_polar(2.0, 0.0, FRAC_PI_2);
    /// assert!((v.x - 2.0).abs() < 1e-15);
    /// assert!(v.z.abs() < 1e-15);
    /// ```
    pub fn from_polar(radius: f64, theta: f64, phi: f64) -> Self {
        let mut v = Space::default();
        v.set_using_polar_coords(radius, theta, phi);
        v
    }

    /// Creates a vector in the x-y plane from a radius and an angle
    ///
    /// Equivalent to [`Space::from_polar`] with `phi = π/2`.
    pub fn from_planar_polar(radius: f64, theta: f64) -> Self {
        Space::from_polar(radius, theta, FRAC_PI_2)
    }

    /// Overwrites all three components from polar coordinates
    ///
    /// See [`Space::from_polar`] for the conventions.
    pub fn set_using_polar_coords(&mut self, radius: f64, theta: f64, phi: f64) {
        let sin_phi = phi.sin();
        self.x = radius * sin_phi * theta.cos();
        self.y = radius * sin_phi * theta.sin();
        self.z = radius * phi.cos();
    }

    /// Resets every component to zero
    pub fn zero(&mut self) {
        *self = Space::UO;
    }

    /// Calculates the magnitude (Euclidean norm) of the vector
    ///
    /// # Mathematical Formula
    ///
    /// `magnitude = sqrt(x² + y² + z²)`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cartesian_space::Space;
    ///
    /// assert_eq!(Space::new(3.0, 4.0, 0.0).magnitude(), 5.0);
    /// assert_eq!(Space::UO.magnitude(), 0.0);
    /// ```
    pub fn magnitude(&self) -> f64 {
        self.magnitude2().sqrt()
    }

    /// Squared magnitude, `x² + y² + z²`
    pub fn magnitude2(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Returns the unit vector in the same direction
    ///
    /// # Errors
    ///
    /// Returns [`SpaceError::DivideByZero`](crate::SpaceError::DivideByZero)
    /// for the zero vector, which has no direction.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cartesian_space::Space;
    ///
    /// let unit = Space::new(3.0, 4.0, 0.0).normalized().unwrap();
    /// assert_eq!(unit, Space::new(0.6, 0.8, 0.0));
    /// assert!(Space::UO.normalized().is_err());
    /// ```
    pub fn normalized(&self) -> Result<Space> {
        let mag = self.magnitude();
        if mag == 0.0 {
            return Err(divide_by_zero("Space::normalized()"));
        }
        Ok(Space::new(self.x / mag, self.y / mag, self.z / mag))
    }

    /// Calculates the dot product with another vector
    ///
    /// `dot = x₁*x₂ + y₁*y₂ + z₁*z₂`
    pub fn dot(&self, other: &Space) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Calculates the right-handed cross product with another vector
    ///
    /// ```text
    /// cross = (y₁*z₂ - z₁*y₂, z₁*x₂ - x₁*z₂, x₁*y₂ - y₁*x₂)
    /// ```
    pub fn cross(&self, other: &Space) -> Space {
        Space {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Returns this vector multiplied component-wise by `factor`
    pub fn scaled(&self, factor: f64) -> Space {
        Space::new(self.x * factor, self.y * factor, self.z * factor)
    }

    /// Multiplies every component by `factor` in place
    pub fn scale_in_place(&mut self, factor: f64) -> Space {
        *self = self.scaled(factor);
        *self
    }

    /// In-place division by a scalar
    ///
    /// Divides every component by `divisor`, stores the result in `self` and
    /// returns it.
    ///
    /// # Errors
    ///
    /// Fails with [`SpaceError::DivideByZero`](crate::SpaceError::DivideByZero)
    /// when `divisor == 0`, leaving `self` unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cartesian_space::Space;
    ///
    /// let mut v = Space::new(2.0, 4.0, 6.0);
    /// assert_eq!(v.try_div_assign(2.0).unwrap(), Space::new(1.0, 2.0, 3.0));
    /// assert!(v.try_div_assign(0.0).is_err());
    /// assert_eq!(v, Space::new(1.0, 2.0, 3.0));
    /// ```
    pub fn try_div_assign(&mut self, divisor: f64) -> Result<Space> {
        if divisor == 0.0 {
            return Err(divide_by_zero("Space::try_div_assign()"));
        }
        self.x /= divisor;
        self.y /= divisor;
        self.z /= divisor;
        Ok(*self)
    }

    /// Converts to nalgebra Vector3 for linear algebra operations
    pub fn to_vector3(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Creates from nalgebra Vector3
    pub fn from_vector3(vec: Vector3<f64>) -> Self {
        Space::new(vec.x, vec.y, vec.z)
    }
}

// ---------------------
// ----- functions -----
// ---------------------

/// Dot product of two vectors, identical to `a * b`
pub fn dot(a: &Space, b: &Space) -> f64 {
    a.dot(b)
}

/// Right-handed cross product of two vectors
pub fn cross(a: &Space, b: &Space) -> Space {
    a.cross(b)
}

/// Euclidean norm of a vector
pub fn magnitude(v: &Space) -> f64 {
    v.magnitude()
}

/// Squared Euclidean norm of a vector
pub fn magnitude2(v: &Space) -> f64 {
    v.magnitude2()
}

/// Unit vector in the direction of `v`; fails for the zero vector
pub fn normalized(v: &Space) -> Result<Space> {
    v.normalized()
}

/// `v` multiplied component-wise by `factor`
pub fn scaled(v: &Space, factor: f64) -> Space {
    v.scaled(factor)
}

/// Divides the scalar `numerator` by each component of `v`
///
/// Fails with a divide-by-zero error if any component of `v` is zero.
pub fn scalar_div(numerator: f64, v: &Space) -> Result<Space> {
    if v.x == 0.0 || v.y == 0.0 || v.z == 0.0 {
        return Err(divide_by_zero("cartesian::scalar_div()"));
    }
    Ok(Space::new(numerator / v.x, numerator / v.y, numerator / v.z))
}

// ---------------------
// ----- operators -----
// ---------------------

impl Neg for Space {
    type Output = Space;

    fn neg(self) -> Space {
        Space::new(-self.x, -self.y, -self.z)
    }
}

impl Add for Space {
    type Output = Space;

    fn add(self, other: Space) -> Space {
        Space {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl AddAssign for Space {
    fn add_assign(&mut self, other: Space) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}

impl Sub for Space {
    type Output = Space;

    fn sub(self, other: Space) -> Space {
        Space {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl SubAssign for Space {
    fn sub_assign(&mut self, other: Space) {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
    }
}

/// `Space * Space` is the dot product
impl Mul for Space {
    type Output = f64;

    fn mul(self, other: Space) -> f64 {
        self.dot(&other)
    }
}

/// Division by a scalar is checked: dividing by zero is an error, never inf/NaN
impl Div<f64> for Space {
    type Output = Result<Space>;

    fn div(self, divisor: f64) -> Result<Space> {
        if divisor == 0.0 {
            return Err(divide_by_zero("Space::div()"));
        }
        Ok(Space {
            x: self.x / divisor,
            y: self.y / divisor,
            z: self.z / divisor,
        })
    }
}

impl From<[f64; 3]> for Space {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Space::new(x, y, z)
    }
}

impl From<(f64, f64, f64)> for Space {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Space::new(x, y, z)
    }
}

impl From<Space> for [f64; 3] {
    fn from(v: Space) -> Self {
        [v.x, v.y, v.z]
    }
}

// ----------------------
// ----- formatting -----
// ----------------------

/// `<space><x>X</x><y>Y</y><z>Z</z></space>`
impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<space><x>{}</x><y>{}</y><z>{}</z></space>",
            format::format_g(self.x),
            format::format_g(self.y),
            format::format_g(self.z)
        )
    }
}

/// `(X, Y, Z)`
impl fmt::Debug for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {})",
            format::format_g(self.x),
            format::format_g(self.y),
            format::format_g(self.z)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[test]
    fn test_space_creation() {
        let v = Space::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[rstest]
    #[case(Space::default(), (0.0, 0.0, 0.0))]
    #[case(Space::from_x(-7.5), (-7.5, 0.0, 0.0))]
    #[case(Space::from_xy(-7.5, 2.25), (-7.5, 2.25, 0.0))]
    #[case(Space { y: 3.0, ..Space::default() }, (0.0, 3.0, 0.0))]
    #[case(Space { z: 1.0, x: 2.0, ..Space::default() }, (2.0, 0.0, 1.0))]
    fn test_construction_defaults(#[case] v: Space, #[case] expected: (f64, f64, f64)) {
        assert_eq!((v.x, v.y, v.z), expected);
    }

    #[test]
    fn test_unit_vectors() {
        assert_eq!(Space::UO, Space::new(0.0, 0.0, 0.0));
        assert_eq!(Space::UX, Space::from_x(1.0));
        assert_eq!(Space::UY, Space::new(0.0, 1.0, 0.0));
        assert_eq!(Space::UZ, Space::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_copies_are_independent() {
        let original = Space::new(1.0, 2.0, 3.0);
        let mut copy = original;
        copy.x = 10.0;
        copy.z = -3.0;
        assert_eq!(original, Space::new(1.0, 2.0, 3.0));
        assert_eq!(copy, Space::new(10.0, 2.0, -3.0));
    }

    #[test]
    fn test_field_write_touches_one_field() {
        let mut v = Space::new(1.0, 2.0, 3.0);
        v.y = 42.0;
        assert_eq!(v, Space::new(1.0, 42.0, 3.0));
    }

    #[test]
    fn test_zero() {
        let mut v = Space::new(1.0, 2.0, 3.0);
        v.zero();
        assert_eq!(v, Space::UO);
    }

    #[test]
    fn test_equality_is_exact() {
        let a = Space::new(0.1, 0.2, 0.3);
        assert_eq!(a, Space::new(0.1, 0.2, 0.3));
        assert_ne!(a, Space::new(0.1, 0.2, 0.3 + 1e-15));
    }

    #[test]
    fn test_magnitude_calculation() {
        assert_eq!(Space::new(3.0, 4.0, 0.0).magnitude(), 5.0);
        assert_eq!(magnitude(&Space::new(1.0, 2.0, 3.0)), 14.0_f64.sqrt());
        assert_eq!(magnitude2(&Space::new(1.0, 2.0, 3.0)), 14.0);
        assert_eq!(Space::UO.magnitude(), 0.0);
    }

    #[test]
    fn test_normalized() {
        let v = Space::new(1.0, 2.0, 3.0);
        let unit = normalized(&v).unwrap();
        let root14 = 14.0_f64.sqrt();

        assert_relative_eq!(unit.magnitude(), 1.0, epsilon = 1e-15);
        assert_relative_eq!(unit.x, 1.0 / root14, epsilon = 1e-15);
        assert_relative_eq!(unit.y, 2.0 / root14, epsilon = 1e-15);
        assert_relative_eq!(unit.z, 3.0 / root14, epsilon = 1e-15);
    }

    #[test]
    fn test_normalized_zero_vector_fails() {
        let err = Space::UO.normalized().unwrap_err();
        assert!(matches!(err, crate::SpaceError::DivideByZero(_)));
    }

    #[test]
    fn test_dot_product() {
        let a = Space::new(1.0, 2.0, 3.0);
        let b = Space::new(0.123456789, -2.71828, 3.14159);
        let expected = 1.0 * 0.123456789 + 2.0 * -2.71828 + 3.0 * 3.14159;

        assert_eq!(dot(&a, &b), expected);
        assert_eq!(a * b, expected);
        assert_eq!(Space::UX * Space::UY, 0.0);
    }

    #[rstest]
    #[case(Space::UX, Space::UY, Space::UZ)]
    #[case(Space::UY, Space::UZ, Space::UX)]
    #[case(Space::UZ, Space::UX, Space::UY)]
    #[case(Space::new(1.0, 1.0, 1.0), Space::new(0.0, 0.0, 0.5), Space::new(0.5, -0.5, 0.0))]
    fn test_cross_product(#[case] a: Space, #[case] b: Space, #[case] expected: Space) {
        assert_eq!(cross(&a, &b), expected);
    }

    #[test]
    fn test_arithmetic_operations() {
        let a = Space::new(1.0, 2.0, 3.0);
        let b = Space::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Space::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Space::new(3.0, 3.0, 3.0));
        assert_eq!(-a, Space::new(-1.0, -2.0, -3.0));
        assert_eq!(scaled(&a, 2.0), Space::new(2.0, 4.0, 6.0));
        assert_eq!((a / 2.0).unwrap(), Space::new(0.5, 1.0, 1.5));

        // Operands are untouched
        assert_eq!(a, Space::new(1.0, 2.0, 3.0));
        assert_eq!(b, Space::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_compound_assignment() {
        let mut a = Space::new(1.0, 2.0, 3.0);
        a += Space::new(1.0, 1.0, 1.0);
        assert_eq!(a, Space::new(2.0, 3.0, 4.0));

        a -= Space::new(2.0, 2.0, 2.0);
        assert_eq!(a, Space::new(0.0, 1.0, 2.0));

        assert_eq!(a.scale_in_place(3.0), Space::new(0.0, 3.0, 6.0));
        assert_eq!(a.try_div_assign(3.0).unwrap(), Space::new(0.0, 1.0, 2.0));
        assert_eq!(a, Space::new(0.0, 1.0, 2.0));
    }

    #[test]
    fn test_divide_by_zero() {
        let a = Space::new(1.0, 2.0, 3.0);
        assert!(matches!(a / 0.0, Err(crate::SpaceError::DivideByZero(_))));
        assert!(matches!(a / -0.0, Err(crate::SpaceError::DivideByZero(_))));

        let mut b = a;
        assert!(b.try_div_assign(0.0).is_err());
        assert_eq!(b, a);
    }

    #[test]
    fn test_scalar_div() {
        let v = Space::new(1.0, 2.0, 4.0);
        assert_eq!(scalar_div(1.0, &v).unwrap(), Space::new(1.0, 0.5, 0.25));
        assert!(scalar_div(1.0, &Space::UO).is_err());
        assert!(scalar_div(1.0, &Space::UX).is_err());
    }

    #[test]
    fn test_polar_coords() {
        let v = Space::from_planar_polar(1.0, FRAC_PI_2);
        assert_relative_eq!(v.x, 0.0, epsilon = 1e-15);
        assert_relative_eq!(v.y, 1.0, epsilon = 1e-15);
        assert_relative_eq!(v.z, 0.0, epsilon = 1e-15);

        let mut w = Space::new(9.0, 9.0, 9.0);
        w.set_using_polar_coords(2.0, 0.0, 0.0);
        assert_relative_eq!(w.x, 0.0, epsilon = 1e-15);
        assert_relative_eq!(w.y, 0.0, epsilon = 1e-15);
        assert_relative_eq!(w.z, 2.0, epsilon = 1e-15);
    }

    #[test]
    fn test_display_and_debug() {
        let v = Space::new(1.23, -4.56, 7.89);
        assert_eq!(
            v.to_string(),
            "<space><x>1.23</x><y>-4.56</y><z>7.89</z></space>"
        );
        assert_eq!(format!("{:?}", Space::new(1.0, 2.0, 3.0)), "(1, 2, 3)");
        assert_eq!(
            format!("{:?}", Space::new(0.123456789, 0.0, -1e7)),
            "(0.123457, 0, -1e+07)"
        );
    }

    #[test]
    fn test_vector3_conversions() {
        let v = Space::new(1.0, 2.0, 3.0);
        let vec = v.to_vector3();
        assert_eq!((vec.x, vec.y, vec.z), (1.0, 2.0, 3.0));
        assert_eq!(Space::from_vector3(vec), v);
    }

    #[test]
    fn test_array_conversions() {
        let v: Space = [1.0, 2.0, 3.0].into();
        assert_eq!(v, Space::from((1.0, 2.0, 3.0)));
        assert_eq!(<[f64; 3]>::from(v), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_serde_round_trip_keeps_fields() {
        let v = Space::new(1.5, -2.0, 0.25);
        let json = serde_json::to_value(v).unwrap();
        assert_eq!(json, serde_json::json!({"x": 1.5, "y": -2.0, "z": 0.25}));
    }
}
