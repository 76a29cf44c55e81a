//! Per-call metrics for extraction operations.

use std::time::Duration;

/// Metrics collected over a single extraction call.
#[derive(Debug, Clone, Default)]
pub struct ExtractionMetrics {
    /// Wall-clock time from input validation to verdict.
    pub wall_time: Duration,
    /// Estimated tokens submitted to the engine (instruction + document).
    pub estimated_input_tokens: usize,
    /// Estimated tokens in the engine's structured output.
    pub estimated_output_tokens: usize,
}

/// Estimate token count from text using the 4-chars-per-token heuristic.
///
/// Counts characters rather than bytes so multi-byte text is not inflated;
/// ceiling division avoids underestimation.
#[must_use]
pub fn estimate_tokens(text: &str) -> usize {
    text.chars().count().div_ceil(4)
}
