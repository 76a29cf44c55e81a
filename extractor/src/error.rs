//! Error taxonomy for extraction calls.

use cvparse_schema::ValidationError;
use thiserror::Error;

use crate::engine::EngineError;

/// Failure of a single extraction call.
///
/// Every variant is terminal for the call: the orchestrator classifies and
/// surfaces, and recovery (retry with backoff, document pre-processing,
/// manual entry) is the caller's responsibility.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The supplied payload failed structural validation. The engine was
    /// never contacted.
    #[error("invalid input: {0}")]
    InvalidInput(#[source] ValidationError),

    /// The engine could not be reached or failed at the transport/service
    /// level.
    #[error("extraction engine unavailable: {0}")]
    EngineUnavailable(#[source] EngineError),

    /// The engine responded but produced no structured content: a document
    /// the engine could not parse, not a transient fault.
    #[error("engine produced no structured output")]
    NoOutput,

    /// The engine's response violates the output contract. The source
    /// carries the offending field path.
    #[error("engine response violates the output contract: {0}")]
    SchemaMismatch(#[source] ValidationError),

    /// The call was cancelled or timed out by the caller's context.
    #[error("extraction cancelled")]
    Cancelled,
}

impl ExtractError {
    /// Whether retrying the same call later could plausibly succeed.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::EngineUnavailable(_) | Self::Cancelled)
    }
}
