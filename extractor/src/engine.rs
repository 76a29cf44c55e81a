//! The engine boundary: a narrow call/response interface to the external
//! generative extraction service.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// A single extraction request handed to the engine.
///
/// Carries everything an engine implementation needs: the natural-language
/// instruction, the encoded document exactly as the caller supplied it, and
/// the output contract the structured response must satisfy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineRequest {
    /// The extraction instruction.
    pub instruction: String,
    /// The encoded document, passed through verbatim.
    pub document: String,
    /// JSON Schema the structured response must conform to.
    pub output_contract: Value,
}

/// The engine's answer to a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineResponse {
    /// The structured object produced by the engine, or `None` when the
    /// engine answered but produced no structured output.
    pub output: Option<Value>,
}

/// Failures surfaced by engine implementations.
///
/// Transport and service problems are kept distinct from "produced no
/// structured output", which is not an error at this boundary; see
/// [`EngineResponse::output`].
#[derive(Debug, Error)]
pub enum EngineError {
    /// The engine could not be reached.
    #[error("engine unreachable: {0}")]
    Unavailable(String),

    /// The engine was reached but reported a service-level failure.
    #[error("engine request failed: {0}")]
    Service(String),

    /// The request was cancelled or timed out before the engine answered.
    #[error("engine request cancelled")]
    Cancelled,
}

/// An external generative extraction service.
///
/// Implementations submit the document and instruction and hand back a
/// structured object, an explicit absence-of-output signal, or a typed
/// failure. Model identity, transport, and auth are implementation
/// concerns; the orchestrator stays ignorant of all of them.
#[async_trait]
pub trait ExtractionEngine: Send + Sync {
    /// Submits one extraction request and awaits the engine's response.
    async fn submit(&self, request: EngineRequest) -> Result<EngineResponse, EngineError>;
}
