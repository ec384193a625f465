//! Untyped calling contract for scripting bindings
//!
//! Bindings hand the core loosely typed values: positional or named
//! constructor arguments, field assignments and the right-hand operand of an
//! operator. This module accepts those as `serde_json::Value` and applies the
//! same rules to every entry point:
//!
//! - a component or scalar must be a JSON number, anything else is a
//!   [`SpaceError::TypeConversion`]
//! - a vector operand is an object with numeric `x`, `y` and `z` members
//!   (the serde form of [`Space`]); missing members default to zero
//! - mixing a vector and a scalar in `+` or `-`, or a scalar in `*`, is a
//!   type conversion error: there is no implicit scalar to vector promotion
//! - ordering comparisons always fail
//!
//! Errors are detected before anything is built or mutated.
//!
//! ```rust
//! use cartesian_space::dynamic;
//! use serde_json::json;
//!
//! let v = dynamic::construct(&[json!(1), json!(2.5)]).unwrap();
//! assert_eq!(v.to_string(), "<space><x>1</x><y>2.5</y><z>0</z></space>");
//! assert!(dynamic::construct(&[json!("some_string")]).is_err());
//! ```

use crate::cartesian::Space;
use crate::errors::{Result, SpaceError};
use serde_json::{Map, Value};

/// Relational operators a binding may forward; none are defined for vectors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
}

impl Comparison {
    fn symbol(self) -> &'static str {
        match self {
            Comparison::Less => "<",
            Comparison::LessEqual => "<=",
            Comparison::Greater => ">",
            Comparison::GreaterEqual => ">=",
        }
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "float",
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "space",
    }
}

fn unsupported(op: &str, rhs: &Value) -> SpaceError {
    SpaceError::TypeConversion(format!(
        "unsupported operand type(s) for {}: 'space' and '{}'",
        op,
        type_name(rhs)
    ))
}

/// Converts `value` to a real number
pub fn real(name: &str, value: &Value) -> Result<f64> {
    value.as_f64().ok_or_else(|| {
        SpaceError::TypeConversion(format!(
            "{} must be a real number, not {} ({})",
            name,
            type_name(value),
            value
        ))
    })
}

/// Builds a vector from up to three positional components
///
/// Missing trailing components default to zero.
pub fn construct(args: &[Value]) -> Result<Space> {
    if args.len() > 3 {
        return Err(SpaceError::TypeConversion(format!(
            "space takes at most 3 components ({} given)",
            args.len()
        )));
    }

    let mut components = [0.0; 3];
    for ((slot, value), name) in components.iter_mut().zip(args).zip(["x", "y", "z"]) {
        *slot = real(name, value)?;
    }
    Ok(Space::from(components))
}

/// Builds a vector from components supplied by name, in any order
///
/// Omitted components default to zero; names other than `x`, `y` and `z` are
/// rejected.
pub fn construct_named(components: &Map<String, Value>) -> Result<Space> {
    let mut v = Space::default();
    for (name, value) in components {
        let slot = field_mut(&mut v, name)?;
        *slot = real(name, value)?;
    }
    Ok(v)
}

fn field_mut<'a>(v: &'a mut Space, name: &str) -> Result<&'a mut f64> {
    match name {
        "x" => Ok(&mut v.x),
        "y" => Ok(&mut v.y),
        "z" => Ok(&mut v.z),
        other => Err(SpaceError::TypeConversion(format!(
            "space has no component named {:?}",
            other
        ))),
    }
}

/// Reads a field by name
pub fn get_field(v: &Space, name: &str) -> Result<f64> {
    match name {
        "x" => Ok(v.x),
        "y" => Ok(v.y),
        "z" => Ok(v.z),
        other => Err(SpaceError::TypeConversion(format!(
            "space has no component named {:?}",
            other
        ))),
    }
}

/// Assigns a field by name; the vector is unchanged on error
pub fn set_field(v: &mut Space, name: &str, value: &Value) -> Result<()> {
    let component = real(name, value)?;
    *field_mut(v, name)? = component;
    Ok(())
}

/// Interprets `value` as a vector operand
pub fn vector(value: &Value) -> Result<Space> {
    match value {
        Value::Object(members) => construct_named(members),
        other => Err(SpaceError::TypeConversion(format!(
            "expected a space, not {} ({})",
            type_name(other),
            other
        ))),
    }
}

fn vector_operand(op: &str, rhs: &Value) -> Result<Space> {
    match rhs {
        Value::Object(_) => vector(rhs),
        other => Err(unsupported(op, other)),
    }
}

/// `lhs + rhs`
pub fn add(lhs: &Space, rhs: &Value) -> Result<Space> {
    Ok(*lhs + vector_operand("+", rhs)?)
}

/// `lhs - rhs`
pub fn sub(lhs: &Space, rhs: &Value) -> Result<Space> {
    Ok(*lhs - vector_operand("-", rhs)?)
}

/// `lhs * rhs`, the dot product; a scalar right-hand side is rejected
pub fn mul(lhs: &Space, rhs: &Value) -> Result<f64> {
    Ok(*lhs * vector_operand("*", rhs)?)
}

/// `lhs / rhs` for a scalar `rhs`
pub fn div(lhs: &Space, rhs: &Value) -> Result<Space> {
    match rhs {
        Value::Number(_) => *lhs / real("divisor", rhs)?,
        other => Err(unsupported("/", other)),
    }
}

/// `lhs += rhs`, returning the updated vector
pub fn add_assign(lhs: &mut Space, rhs: &Value) -> Result<Space> {
    *lhs += vector_operand("+=", rhs)?;
    Ok(*lhs)
}

/// `lhs -= rhs`, returning the updated vector
pub fn sub_assign(lhs: &mut Space, rhs: &Value) -> Result<Space> {
    *lhs -= vector_operand("-=", rhs)?;
    Ok(*lhs)
}

/// `lhs /= rhs`, returning the updated vector
pub fn div_assign(lhs: &mut Space, rhs: &Value) -> Result<Space> {
    match rhs {
        Value::Number(_) => lhs.try_div_assign(real("divisor", rhs)?),
        other => Err(unsupported("/=", other)),
    }
}

/// `lhs == rhs`; anything that is not a vector compares unequal
pub fn equals(lhs: &Space, rhs: &Value) -> bool {
    vector(rhs).map(|v| *lhs == v).unwrap_or(false)
}

/// Relational comparison, which vectors do not support
pub fn compare(_lhs: &Space, rhs: &Value, op: Comparison) -> Result<bool> {
    Err(SpaceError::TypeConversion(format!(
        "'{}' not supported between instances of 'space' and '{}'",
        op.symbol(),
        type_name(rhs)
    )))
}
