//! cartesian-space: three-space vectors for orbital calculations
//!
//! This crate provides the `Space` vector value type (classic Cartesian x, y, z
//! coordinates) used as the geometric primitive of an orbit simulation,
//! together with a small set of helpers built on it: an axis-angle rotator,
//! a bounded trajectory recorder and the untyped calling contract used by
//! scripting bindings.

pub mod cartesian;
pub mod dynamic;
pub mod errors;
pub mod recorder;

// Re-export commonly used types
pub use cartesian::rotator::Rotator;
pub use cartesian::{cross, dot, magnitude, magnitude2, normalized, scalar_div, scaled, Space};
pub use errors::{Result, SpaceError};
pub use recorder::SpaceRecorder;
