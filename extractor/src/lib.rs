//! Single-shot structured extraction of resume data via a generative engine.
//!
//! This crate coordinates one request/response cycle per call: validate the
//! input payload, hand the document and the output contract to an
//! [`engine::ExtractionEngine`] implementation, validate what comes back,
//! and return either a contract-conformant result or a typed failure. There
//! are no internal retries and no partial results; classifying the failure
//! so the caller can pick a remediation is the whole job.
//!
//! ```no_run
//! use cvparse_extractor::prelude::*;
//! use cvparse_schema::DocumentPayload;
//!
//! # async fn example(engine: impl ExtractionEngine) -> Result<(), ExtractError> {
//! let extractor = ResumeExtractor::new(engine);
//! let payload = DocumentPayload::new("data:application/pdf;base64,JVBERi0xLjQ=");
//! let resume = extractor.extract(&payload).await?;
//! println!("{resume:?}");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod metrics;
pub mod orchestrator;
pub mod prompt;

/// Common traits and types for ergonomic usage of the extractor.
pub mod prelude {
    pub use crate::config::ExtractorConfig;
    pub use crate::engine::{EngineError, EngineRequest, EngineResponse, ExtractionEngine};
    pub use crate::error::ExtractError;
    pub use crate::metrics::ExtractionMetrics;
    pub use crate::orchestrator::ResumeExtractor;
}
