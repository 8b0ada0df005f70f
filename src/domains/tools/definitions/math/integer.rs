//! Integer-domain tools.
//!
//! Inputs arrive as JSON numbers; anything with a fractional part (or beyond
//! the exactly representable range) is rejected with a failure result.

use super::common::{BinaryParams, IntegerParams, as_integer};
use crate::domains::tools::ToolResult;

pub const FACTORIAL_DOMAIN: &str = "Error: Factorial is only defined for non-negative integers";
pub const FIBONACCI_DOMAIN: &str = "Error: Fibonacci is only defined for non-negative integers";
pub const PRIME_DOMAIN: &str = "Error: Prime check is only defined for integers greater than 1";
pub const GCD_DOMAIN: &str = "Error: GCD is only defined for integers";
pub const LCM_DOMAIN: &str = "Error: LCM is only defined for integers";

fn non_negative(value: f64) -> Option<u64> {
    as_integer(value).and_then(|n| u64::try_from(n).ok())
}

pub fn factorial(params: IntegerParams) -> ToolResult {
    let Some(n) = non_negative(params.n) else {
        return ToolResult::failure(FACTORIAL_DOMAIN);
    };

    let product = (2..=n).try_fold(1u128, |acc, k| acc.checked_mul(u128::from(k)));
    match product {
        Some(value) => ToolResult::success(value.to_string()),
        None => ToolResult::failure(format!(
            "Error: Factorial of {} is too large to compute exactly",
            n
        )),
    }
}

pub fn fibonacci(params: IntegerParams) -> ToolResult {
    let Some(n) = non_negative(params.n) else {
        return ToolResult::failure(FIBONACCI_DOMAIN);
    };

    let mut pair = (0u128, 1u128);
    for _ in 0..n {
        let Some(next) = pair.0.checked_add(pair.1) else {
            return ToolResult::failure(format!(
                "Error: Fibonacci number {} is too large to compute exactly",
                n
            ));
        };
        pair = (pair.1, next);
    }
    ToolResult::success(pair.0.to_string())
}

pub fn check_prime(params: IntegerParams) -> ToolResult {
    let n = match as_integer(params.n) {
        Some(n) if n > 1 => n.unsigned_abs(),
        _ => return ToolResult::failure(PRIME_DOMAIN),
    };

    let verdict = if is_prime(n) { "is" } else { "is not" };
    ToolResult::success(format!("{} {} a prime number", n, verdict))
}

/// Trial division by 2, 3 and 6k ± 1 up to √n.
fn is_prime(n: u64) -> bool {
    if n < 4 {
        return n >= 2;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    let mut k = 5u64;
    while k * k <= n {
        if n % k == 0 || n % (k + 2) == 0 {
            return false;
        }
        k += 6;
    }
    true
}

fn gcd_u64(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

pub fn gcd(params: BinaryParams) -> ToolResult {
    match (as_integer(params.a), as_integer(params.b)) {
        (Some(a), Some(b)) => {
            ToolResult::success(gcd_u64(a.unsigned_abs(), b.unsigned_abs()).to_string())
        }
        _ => ToolResult::failure(GCD_DOMAIN),
    }
}

pub fn lcm(params: BinaryParams) -> ToolResult {
    let (Some(a), Some(b)) = (as_integer(params.a), as_integer(params.b)) else {
        return ToolResult::failure(LCM_DOMAIN);
    };
    let (a, b) = (a.unsigned_abs(), b.unsigned_abs());
    if a == 0 || b == 0 {
        return ToolResult::success("0");
    }

    match (a / gcd_u64(a, b)).checked_mul(b) {
        Some(value) => ToolResult::success(value.to_string()),
        None => ToolResult::failure("Error: LCM is too large to compute exactly"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(n: f64) -> IntegerParams {
        IntegerParams { n }
    }

    fn ab(a: f64, b: f64) -> BinaryParams {
        BinaryParams { a, b }
    }

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(n(0.0)), ToolResult::success("1"));
        assert_eq!(factorial(n(1.0)), ToolResult::success("1"));
        assert_eq!(factorial(n(5.0)), ToolResult::success("120"));
        assert_eq!(factorial(n(20.0)), ToolResult::success("2432902008176640000"));
        assert_eq!(factorial(n(-1.0)), ToolResult::failure(FACTORIAL_DOMAIN));
        assert_eq!(factorial(n(2.5)), ToolResult::failure(FACTORIAL_DOMAIN));
    }

    #[test]
    fn test_factorial_overflow() {
        assert!(factorial(n(34.0)).is_success());
        assert!(factorial(n(35.0)).text().contains("too large"));
    }

    #[test]
    fn test_fibonacci() {
        assert_eq!(fibonacci(n(0.0)), ToolResult::success("0"));
        assert_eq!(fibonacci(n(1.0)), ToolResult::success("1"));
        assert_eq!(fibonacci(n(2.0)), ToolResult::success("1"));
        assert_eq!(fibonacci(n(10.0)), ToolResult::success("55"));
        assert_eq!(fibonacci(n(-3.0)), ToolResult::failure(FIBONACCI_DOMAIN));
        assert_eq!(fibonacci(n(1.5)), ToolResult::failure(FIBONACCI_DOMAIN));
        assert!(fibonacci(n(185.0)).is_success());
        assert!(fibonacci(n(500.0)).is_failure());
    }

    #[test]
    fn test_check_prime() {
        assert_eq!(check_prime(n(2.0)).text(), "2 is a prime number");
        assert_eq!(check_prime(n(17.0)).text(), "17 is a prime number");
        assert_eq!(check_prime(n(18.0)).text(), "18 is not a prime number");
        assert_eq!(check_prime(n(25.0)).text(), "25 is not a prime number");
        assert_eq!(check_prime(n(7919.0)).text(), "7919 is a prime number");
        assert_eq!(check_prime(n(1.0)), ToolResult::failure(PRIME_DOMAIN));
        assert_eq!(check_prime(n(-7.0)), ToolResult::failure(PRIME_DOMAIN));
        assert_eq!(check_prime(n(7.5)), ToolResult::failure(PRIME_DOMAIN));
    }

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(ab(12.0, 18.0)), ToolResult::success("6"));
        assert_eq!(gcd(ab(-12.0, 18.0)), ToolResult::success("6"));
        assert_eq!(gcd(ab(0.0, 5.0)), ToolResult::success("5"));
        assert_eq!(gcd(ab(1.5, 2.0)), ToolResult::failure(GCD_DOMAIN));
    }

    #[test]
    fn test_lcm() {
        assert_eq!(lcm(ab(4.0, 6.0)), ToolResult::success("12"));
        assert_eq!(lcm(ab(-4.0, 6.0)), ToolResult::success("12"));
        assert_eq!(lcm(ab(0.0, 6.0)), ToolResult::success("0"));
        assert_eq!(lcm(ab(4.0, 6.5)), ToolResult::failure(LCM_DOMAIN));
    }
}
