//! Parameters and helpers shared by the arithmetic tools.

use schemars::JsonSchema;
use serde::Deserialize;

/// Largest integer a JSON number carries exactly (2^53 - 1).
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Two operands.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct BinaryParams {
    /// First number.
    #[schemars(description = "First number")]
    pub a: f64,

    /// Second number.
    #[schemars(description = "Second number")]
    pub b: f64,
}

/// A single operand for the integer-domain tools.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct IntegerParams {
    /// Operand; must be a non-fractional number.
    #[schemars(description = "The integer to operate on")]
    pub n: f64,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PowerParams {
    #[schemars(description = "The base")]
    pub base: f64,

    #[schemars(description = "The exponent")]
    pub exponent: f64,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RootParams {
    #[schemars(description = "The number to take the root of")]
    pub number: f64,

    #[schemars(description = "The degree of the root (2 for square root, 3 for cube root, ...)")]
    pub degree: f64,
}

/// Interpret `value` as an exact integer.
pub fn as_integer(value: f64) -> Option<i64> {
    (value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER)
        .then_some(value as i64)
}

/// Magnitudes at or above this switch to exponent notation.
const EXPONENT_ABOVE: f64 = 1e21;

/// Magnitudes below this switch to exponent notation.
const EXPONENT_BELOW: f64 = 1e-6;

/// Render a number the way agents expect to read it back: `6` rather than
/// `6.0`, shortest round-trip digits otherwise, and `1e+21` / `1e-7` style
/// exponents for very large or very small magnitudes.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if value == 0.0 {
        // -0
        "0".to_string()
    } else if value.abs() >= EXPONENT_ABOVE || value.abs() < EXPONENT_BELOW {
        let formatted = format!("{:e}", value);
        match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => formatted,
        }
    } else {
        value.to_string()
    }
}
