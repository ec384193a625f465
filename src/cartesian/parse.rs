//! Building vectors from text
//!
//! Vectors can be read back from either of their renderings:
//! - the display form `<space><x>1</x><y>2</y><z>3</z></space>`
//! - the debug form `(1, 2, 3)`
//!
//! or built from three separate component strings, as when reading XML
//! attributes. Any component that is not a real number is a
//! [`SpaceError::TypeConversion`] and no vector is produced.

use super::Space;
use crate::errors::{Result, SpaceError};
use regex::Regex;
use std::str::FromStr;

const DISPLAY_PATTERN: &str =
    r"^<space><x>([^<]*)</x><y>([^<]*)</y><z>([^<]*)</z></space>$";

/// Parses one named component as a real number
pub fn parse_component(name: &str, text: &str) -> Result<f64> {
    text.trim().parse::<f64>().map_err(|e| {
        SpaceError::TypeConversion(format!(
            "component {} must be a real number, got {:?} ({})",
            name, text, e
        ))
    })
}

impl Space {
    /// Creates a vector from three component strings
    ///
    /// # Errors
    ///
    /// Returns [`SpaceError::TypeConversion`] naming the first component that
    /// does not parse as a real number.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cartesian_space::Space;
    ///
    /// let v = Space::from_strs("1.5", "-2", "3e2").unwrap();
    /// assert_eq!(v, Space::new(1.5, -2.0, 300.0));
    /// assert!(Space::from_strs("1", "two", "3").is_err());
    /// ```
    pub fn from_strs(x: &str, y: &str, z: &str) -> Result<Space> {
        Ok(Space::new(
            parse_component("x", x)?,
            parse_component("y", y)?,
            parse_component("z", z)?,
        ))
    }
}

impl FromStr for Space {
    type Err = SpaceError;

    fn from_str(s: &str) -> Result<Space> {
        let s = s.trim();

        if s.starts_with("<space>") {
            let re = Regex::new(DISPLAY_PATTERN).map_err(|e| {
                SpaceError::TypeConversion(format!("Failed to compile regex: {}", e))
            })?;
            let caps = re.captures(s).ok_or_else(|| {
                SpaceError::TypeConversion(format!("malformed space element: {:?}", s))
            })?;
            return Space::from_strs(&caps[1], &caps[2], &caps[3]);
        }

        if let Some(inner) = s.strip_prefix('(').and_then(|rest| rest.strip_suffix(')')) {
            let parts: Vec<&str> = inner.split(',').collect();
            if let [x, y, z] = parts.as_slice() {
                return Space::from_strs(x, y, z);
            }
            return Err(SpaceError::TypeConversion(format!(
                "expected three components, got {}: {:?}",
                parts.len(),
                s
            )));
        }

        Err(SpaceError::TypeConversion(format!(
            "cannot convert {:?} to a space vector",
            s
        )))
    }
}
