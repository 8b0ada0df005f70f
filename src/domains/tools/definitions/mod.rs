//! Tool definitions module.
//!
//! The arithmetic tools are plain functions listed in one table; the tools
//! that perform I/O get their collaborators from [`ToolServices`].

pub mod fetch_url;
pub mod math;
pub mod random;

use std::sync::Arc;

pub use fetch_url::{FetchUrlParams, FetchUrlTool, WebUrl};
pub use math::{BinaryParams, IntegerParams, PowerParams, RootParams};
pub use random::{RandomNumberParams, RandomNumberTool};

use super::{ToolDefinition, ToolResult};
use super::clients::ToolServices;
use math::{arithmetic, integer};

/// Every built-in tool, in listing order.
pub fn builtin_tools(services: &ToolServices) -> Vec<ToolDefinition> {
    let binary: [(&str, &str, fn(BinaryParams) -> ToolResult); 8] = [
        ("calculate_add", "Simple addition of two numbers", arithmetic::add),
        ("calculate_subtract", "Simple subtraction of two numbers", arithmetic::subtract),
        ("calculate_multiply", "Simple multiplication of two numbers", arithmetic::multiply),
        ("calculate_divide", "Simple division of two numbers", arithmetic::divide),
        (
            "calculate_modulus",
            "Remainder of dividing the first number by the second",
            arithmetic::modulus,
        ),
        (
            "calculate_gcd",
            "Greatest common divisor of two integers",
            integer::gcd,
        ),
        (
            "calculate_lcm",
            "Least common multiple of two integers",
            integer::lcm,
        ),
        (
            "compare_numbers",
            "Compare two numbers and state whether the first is greater than, less than or equal to the second",
            arithmetic::compare,
        ),
    ];

    let unary: [(&str, &str, fn(IntegerParams) -> ToolResult); 3] = [
        (
            "calculate_factorial",
            "Factorial of a non-negative integer",
            integer::factorial,
        ),
        (
            "calculate_fibonacci",
            "The n-th Fibonacci number (F(0) = 0, F(1) = 1)",
            integer::fibonacci,
        ),
        (
            "check_prime",
            "Check whether an integer greater than 1 is a prime number",
            integer::check_prime,
        ),
    ];

    let mut tools: Vec<ToolDefinition> = binary
        .into_iter()
        .map(|(name, description, handler)| ToolDefinition::sync(name, description, handler))
        .chain(
            unary
                .into_iter()
                .map(|(name, description, handler)| ToolDefinition::sync(name, description, handler)),
        )
        .collect();

    tools.push(ToolDefinition::sync(
        "calculate_power",
        "Raise a base to an exponent",
        arithmetic::power,
    ));
    tools.push(ToolDefinition::sync(
        "calculate_root",
        "The n-th root of a number",
        arithmetic::root,
    ));

    let entropy = Arc::clone(&services.entropy);
    tools.push(ToolDefinition::new(
        RandomNumberTool::NAME,
        RandomNumberTool::DESCRIPTION,
        move |params: RandomNumberParams| RandomNumberTool::execute(params, Arc::clone(&entropy)),
    ));

    let fetcher = Arc::clone(&services.fetcher);
    tools.push(ToolDefinition::new(
        FetchUrlTool::NAME,
        FetchUrlTool::DESCRIPTION,
        move |params: FetchUrlParams| FetchUrlTool::execute(params, Arc::clone(&fetcher)),
    ));

    tools
}
