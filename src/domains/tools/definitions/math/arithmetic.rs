//! Real-valued arithmetic tools.

use std::cmp::Ordering;

use super::common::{BinaryParams, PowerParams, RootParams, as_integer, format_number};
use crate::domains::tools::ToolResult;

pub const DIVIDE_BY_ZERO: &str = "Error: Cannot divide by zero";
pub const MODULUS_BY_ZERO: &str = "Error: Cannot calculate modulus with a divisor of zero";
pub const ZERO_DEGREE_ROOT: &str = "Error: Root degree cannot be zero";
pub const NEGATIVE_EVEN_ROOT: &str =
    "Error: Cannot take an even or fractional root of a negative number";
pub const NOT_FINITE: &str = "Error: Result is not a finite number";

pub fn add(params: BinaryParams) -> ToolResult {
    ToolResult::success(format_number(params.a + params.b))
}

pub fn subtract(params: BinaryParams) -> ToolResult {
    ToolResult::success(format_number(params.a - params.b))
}

pub fn multiply(params: BinaryParams) -> ToolResult {
    ToolResult::success(format_number(params.a * params.b))
}

pub fn divide(params: BinaryParams) -> ToolResult {
    if params.b == 0.0 {
        return ToolResult::failure(DIVIDE_BY_ZERO);
    }
    ToolResult::success(format_number(params.a / params.b))
}

pub fn power(params: PowerParams) -> ToolResult {
    let value = params.base.powf(params.exponent);
    if !value.is_finite() {
        return ToolResult::failure(NOT_FINITE);
    }
    ToolResult::success(format_number(value))
}

pub fn root(params: RootParams) -> ToolResult {
    let RootParams { number, degree } = params;
    if degree == 0.0 {
        return ToolResult::failure(ZERO_DEGREE_ROOT);
    }

    let value = if number < 0.0 {
        // Only odd integer degrees have a real root of a negative number.
        match as_integer(degree) {
            Some(d) if d % 2 != 0 => -nth_root(-number, degree),
            _ => return ToolResult::failure(NEGATIVE_EVEN_ROOT),
        }
    } else {
        nth_root(number, degree)
    };

    if !value.is_finite() {
        return ToolResult::failure(NOT_FINITE);
    }
    ToolResult::success(format_number(value))
}

/// Root of a non-negative number, exact for square and cube roots.
fn nth_root(number: f64, degree: f64) -> f64 {
    if degree == 2.0 {
        number.sqrt()
    } else if degree == 3.0 {
        number.cbrt()
    } else {
        number.powf(degree.recip())
    }
}

/// Truncated remainder; the result has the sign of the dividend.
pub fn modulus(params: BinaryParams) -> ToolResult {
    if params.b == 0.0 {
        return ToolResult::failure(MODULUS_BY_ZERO);
    }
    ToolResult::success(format_number(params.a % params.b))
}

pub fn compare(params: BinaryParams) -> ToolResult {
    let relation = match params.a.partial_cmp(&params.b) {
        Some(Ordering::Greater) => "greater than",
        Some(Ordering::Less) => "less than",
        Some(Ordering::Equal) => "equal to",
        None => "not comparable to",
    };
    ToolResult::success(format!(
        "{} is {} {}",
        format_number(params.a),
        relation,
        format_number(params.b)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ab(a: f64, b: f64) -> BinaryParams {
        BinaryParams { a, b }
    }

    #[test]
    fn test_basic_operations() {
        assert_eq!(add(ab(2.0, 3.0)), ToolResult::success("5"));
        assert_eq!(subtract(ab(2.0, 3.0)), ToolResult::success("-1"));
        assert_eq!(multiply(ab(2.5, 4.0)), ToolResult::success("10"));
        assert_eq!(add(ab(0.1, 0.2)), ToolResult::success("0.30000000000000004"));
    }

    #[test]
    fn test_divide() {
        assert_eq!(divide(ab(6.0, 3.0)), ToolResult::success("2"));
        assert_eq!(divide(ab(7.0, 2.0)), ToolResult::success("3.5"));
        assert_eq!(divide(ab(-9.0, 3.0)), ToolResult::success("-3"));
        assert_eq!(divide(ab(1.0, 0.0)), ToolResult::failure(DIVIDE_BY_ZERO));
        assert_eq!(divide(ab(0.0, -0.0)), ToolResult::failure(DIVIDE_BY_ZERO));
    }

    #[test]
    fn test_power() {
        let p = |base, exponent| PowerParams { base, exponent };
        assert_eq!(power(p(2.0, 10.0)), ToolResult::success("1024"));
        assert_eq!(power(p(4.0, 0.5)), ToolResult::success("2"));
        assert_eq!(power(p(10.0, 400.0)), ToolResult::failure(NOT_FINITE));
        assert_eq!(power(p(10.0, 21.0)), ToolResult::success("1e+21"));
        assert_eq!(power(p(2.0, -30.0)), ToolResult::success("9.313225746154785e-10"));
    }

    #[test]
    fn test_root() {
        let r = |number, degree| RootParams { number, degree };
        assert_eq!(root(r(16.0, 2.0)), ToolResult::success("4"));
        assert_eq!(root(r(27.0, 3.0)), ToolResult::success("3"));
        assert_eq!(root(r(-8.0, 3.0)), ToolResult::success("-2"));
        assert_eq!(root(r(16.0, 0.0)), ToolResult::failure(ZERO_DEGREE_ROOT));
        assert_eq!(root(r(-16.0, 2.0)), ToolResult::failure(NEGATIVE_EVEN_ROOT));
        assert_eq!(root(r(-16.0, 2.5)), ToolResult::failure(NEGATIVE_EVEN_ROOT));
    }

    #[test]
    fn test_modulus() {
        assert_eq!(modulus(ab(10.0, 3.0)), ToolResult::success("1"));
        assert_eq!(modulus(ab(-7.0, 3.0)), ToolResult::success("-1"));
        assert_eq!(modulus(ab(5.5, 2.0)), ToolResult::success("1.5"));
        assert_eq!(modulus(ab(5.0, 0.0)), ToolResult::failure(MODULUS_BY_ZERO));
    }

    #[test]
    fn test_compare() {
        assert_eq!(compare(ab(5.0, 3.0)).text(), "5 is greater than 3");
        assert_eq!(compare(ab(1.5, 3.0)).text(), "1.5 is less than 3");
        assert_eq!(compare(ab(2.0, 2.0)).text(), "2 is equal to 2");
    }
}
