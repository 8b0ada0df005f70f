//! Random number tool.
//!
//! Draws from a public randomness beacon and falls back to the local PRNG
//! when the beacon cannot be used. The caller always gets a number for a
//! valid range.

use rand::Rng;
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use super::math::common::as_integer;
use crate::domains::tools::ToolResult;
use crate::domains::tools::clients::{EntropyError, EntropySource};

/// Number of hex digits read from the beacon (one u32).
const WINDOW: usize = 8;

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RandomNumberParams {
    #[schemars(description = "Minimum value (inclusive)")]
    pub start_range: f64,

    #[schemars(description = "Maximum value (inclusive)")]
    pub end_range: f64,
}

pub struct RandomNumberTool;

impl RandomNumberTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "random_number";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Generate a truly random number within a specified range using Cloudflare's drand service";

    #[instrument(skip_all, fields(start = params.start_range, end = params.end_range))]
    pub async fn execute(params: RandomNumberParams, entropy: Arc<dyn EntropySource>) -> ToolResult {
        let (Some(start), Some(end)) = (as_integer(params.start_range), as_integer(params.end_range))
        else {
            return ToolResult::failure("Error: startRange and endRange must be integers");
        };
        if start > end {
            return ToolResult::failure("Error: startRange must not be greater than endRange");
        }

        let value = match Self::draw_from_beacon(entropy.as_ref(), start, end).await {
            Ok(value) => value,
            Err(e) => {
                warn!("Error fetching from drand, using local generator: {}", e);
                rand::thread_rng().gen_range(start..=end)
            }
        };

        ToolResult::success(value.to_string())
    }

    async fn draw_from_beacon(
        entropy: &dyn EntropySource,
        start: i64,
        end: i64,
    ) -> Result<i64, EntropyError> {
        let randomness = entropy.randomness().await?;
        if randomness.len() < WINDOW || !randomness.is_ascii() {
            return Err(EntropyError::Malformed(format!(
                "expected at least {} hex digits, got {:?}",
                WINDOW, randomness
            )));
        }

        let offset = rand::thread_rng().gen_range(0..=randomness.len() - WINDOW);
        let value = scale_window(&randomness, offset, start, end)?;
        debug!(offset, value, "Scaled beacon randomness");
        Ok(value)
    }
}

/// Parse the 8-digit hex window at `offset` and map it onto `start..=end`.
pub(crate) fn scale_window(
    randomness: &str,
    offset: usize,
    start: i64,
    end: i64,
) -> Result<i64, EntropyError> {
    let window = randomness
        .get(offset..offset + WINDOW)
        .ok_or_else(|| EntropyError::Malformed(format!("no hex window at offset {}", offset)))?;
    let raw = u32::from_str_radix(window, 16)
        .map_err(|e| EntropyError::Malformed(format!("{:?}: {}", window, e)))?;

    let width = i128::from(end) - i128::from(start) + 1;
    let value = i128::from(start) + i128::from(raw) % width;
    i64::try_from(value).map_err(|e| EntropyError::Malformed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::clients::testing::StubEntropy;

    const BEACON: &str = "0b3ac0b9c0e7f5a4c5e0d6b1f3a2e4c6d8b0a1c3e5f7091b2d4f6a8c0e2b4d6f";

    fn params(start: f64, end: f64) -> RandomNumberParams {
        RandomNumberParams {
            start_range: start,
            end_range: end,
        }
    }

    fn value(result: &ToolResult) -> i64 {
        assert!(result.is_success(), "unexpected failure: {}", result.text());
        result.text().parse().unwrap()
    }

    #[test]
    fn test_scale_window() {
        // 0x0b3ac0b9 = 188399801; 1 + (188399801 % 10) = 2
        assert_eq!(scale_window(BEACON, 0, 1, 10).unwrap(), 2);
        assert_eq!(scale_window("ffffffff", 0, 0, 0).unwrap(), 0);
        assert_eq!(scale_window("00000000", 0, -5, 5).unwrap(), -5);
    }

    #[test]
    fn test_scale_window_rejects_bad_input() {
        assert!(scale_window("0123", 0, 1, 10).is_err());
        assert!(scale_window("zzzzzzzz", 0, 1, 10).is_err());
    }

    #[tokio::test]
    async fn test_beacon_path_stays_in_bounds() {
        let entropy = Arc::new(StubEntropy::returning(BEACON));
        for _ in 0..200 {
            let result = RandomNumberTool::execute(params(1.0, 10.0), entropy.clone()).await;
            assert!((1..=10).contains(&value(&result)));
        }
        assert_eq!(entropy.calls(), 200);
    }

    #[tokio::test]
    async fn test_fallback_path_stays_in_bounds() {
        let entropy = Arc::new(StubEntropy::failing());
        for _ in 0..200 {
            let result = RandomNumberTool::execute(params(1.0, 10.0), entropy.clone()).await;
            assert!((1..=10).contains(&value(&result)));
        }
    }

    #[tokio::test]
    async fn test_malformed_beacon_falls_back() {
        let entropy = Arc::new(StubEntropy::returning("not-hex!"));
        let result = RandomNumberTool::execute(params(-3.0, 3.0), entropy).await;
        assert!((-3..=3).contains(&value(&result)));
    }

    #[tokio::test]
    async fn test_single_value_range() {
        let entropy = Arc::new(StubEntropy::returning(BEACON));
        let result = RandomNumberTool::execute(params(7.0, 7.0), entropy).await;
        assert_eq!(value(&result), 7);
    }

    #[tokio::test]
    async fn test_invalid_ranges() {
        let entropy = Arc::new(StubEntropy::returning(BEACON));
        let result = RandomNumberTool::execute(params(10.0, 1.0), entropy.clone()).await;
        assert!(result.is_failure());

        let result = RandomNumberTool::execute(params(1.5, 10.0), entropy.clone()).await;
        assert!(result.is_failure());
        assert_eq!(entropy.calls(), 0);
    }
}
