//! Default-precision rendering of components
//!
//! Components are rendered the way a C++ output stream renders a `double`
//! with default flags: `%g` with 6 significant digits. Trailing zeros and a
//! trailing decimal point are removed, and values whose decimal exponent is
//! below -4 or at least 6 switch to exponent notation with a signed,
//! at-least-two-digit exponent (`1e+06`, `1.5e-05`).

/// Significant digits used for every component
pub const PRECISION: usize = 6;

/// Renders `value` with [`PRECISION`] significant digits in `%g` style
///
/// # Examples
///
/// ```rust
/// use cartesian_space::cartesian::format::format_g;
///
/// assert_eq!(format_g(1.0), "1");
/// assert_eq!(format_g(0.123456789), "0.123457");
/// assert_eq!(format_g(1234567.0), "1.23457e+06");
/// assert_eq!(format_g(0.00001), "1e-05");
/// ```
pub fn format_g(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Round to the target precision first; the exponent of the rounded value
    // decides between fixed and exponent notation.
    let sci = format!("{:.*e}", PRECISION - 1, value);
    let Some((mantissa, exponent)) = sci.split_once('e') else {
        return sci;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return sci;
    };

    if exponent < -4 || exponent >= PRECISION as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            strip_trailing_zeros(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (PRECISION as i32 - 1 - exponent) as usize;
        strip_trailing_zeros(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn strip_trailing_zeros(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}
