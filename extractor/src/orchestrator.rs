//! Orchestration of one request/response cycle with the extraction engine.

use cvparse_schema::{
    output_contract, validate_input, validate_output, DocumentPayload, ExtractionResult,
};
use tokio::time::Instant;

use crate::config::ExtractorConfig;
use crate::engine::{EngineError, EngineRequest, ExtractionEngine};
use crate::error::ExtractError;
use crate::metrics::{estimate_tokens, ExtractionMetrics};
use crate::prompt::build_instruction;

/// Orchestrator for single-shot resume extraction.
///
/// Holds the engine and configuration. Each call is independent and may run
/// concurrently with others: it issues exactly one engine request and
/// returns either a contract-conformant [`ExtractionResult`] or a typed
/// [`ExtractError`]. All-or-nothing: never a half-populated result beside
/// an error.
pub struct ResumeExtractor<E> {
    engine: E,
    config: ExtractorConfig,
}

impl<E: ExtractionEngine> ResumeExtractor<E> {
    /// Creates an extractor with default configuration.
    #[must_use]
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            config: ExtractorConfig::default(),
        }
    }

    /// Creates an extractor with the given configuration.
    #[must_use]
    pub const fn with_config(engine: E, config: ExtractorConfig) -> Self {
        Self { engine, config }
    }

    /// Runs one extraction call.
    ///
    /// The engine submit is the only suspension point, so dropping the
    /// returned future abandons the outstanding request promptly; an
    /// external `tokio::time::timeout` around this call therefore behaves
    /// exactly like caller cancellation.
    pub async fn extract(
        &self,
        payload: &DocumentPayload,
    ) -> Result<ExtractionResult, ExtractError> {
        self.extract_with_metrics(payload)
            .await
            .map(|(result, _)| result)
    }

    /// Runs one extraction call and reports per-call metrics alongside.
    #[tracing::instrument(skip(self, payload), fields(document_chars = payload.document.len()))]
    pub async fn extract_with_metrics(
        &self,
        payload: &DocumentPayload,
    ) -> Result<(ExtractionResult, ExtractionMetrics), ExtractError> {
        let start = Instant::now();

        validate_input(payload).map_err(ExtractError::InvalidInput)?;

        let contract = output_contract();
        let instruction = build_instruction(&self.config, &contract);
        let estimated_input_tokens =
            estimate_tokens(&instruction) + estimate_tokens(&payload.document);

        let request = EngineRequest {
            instruction,
            document: payload.document.clone(),
            output_contract: contract,
        };

        // One engine invocation per call; recovery belongs to the caller.
        let response = self.engine.submit(request).await.map_err(|e| match e {
            EngineError::Cancelled => ExtractError::Cancelled,
            other => ExtractError::EngineUnavailable(other),
        })?;

        let Some(raw) = response.output else {
            tracing::debug!("engine returned no structured output");
            return Err(ExtractError::NoOutput);
        };
        let estimated_output_tokens = estimate_tokens(&raw.to_string());

        let result = validate_output(&raw).map_err(|e| {
            tracing::warn!(error = %e, "engine response rejected by output contract");
            ExtractError::SchemaMismatch(e)
        })?;

        let metrics = ExtractionMetrics {
            wall_time: start.elapsed(),
            estimated_input_tokens,
            estimated_output_tokens,
        };
        tracing::debug!(
            wall_time_ms = metrics.wall_time.as_millis() as u64,
            estimated_input_tokens,
            estimated_output_tokens,
            "extraction succeeded"
        );
        Ok((result, metrics))
    }
}
