use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use cvparse_extractor::prelude::*;
use cvparse_schema::{DocumentPayload, ValidationError};
use serde_json::{json, Value};

const PDF_PAYLOAD: &str = "data:application/pdf;base64,JVBERi0xLjQKJcOkw7zDtsOf";

/// Engine double returning a canned structured output (or the explicit
/// absence signal) and counting submissions.
struct StaticEngine {
    output: Option<Value>,
    calls: Arc<AtomicUsize>,
}

impl StaticEngine {
    fn new(output: Option<Value>) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                output,
                calls: calls.clone(),
            },
            calls,
        )
    }
}

#[async_trait]
impl ExtractionEngine for StaticEngine {
    async fn submit(&self, _request: EngineRequest) -> Result<EngineResponse, EngineError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(EngineResponse {
            output: self.output.clone(),
        })
    }
}

/// Engine double failing every submission with a caller-chosen error.
struct FailingEngine {
    error: fn() -> EngineError,
}

#[async_trait]
impl ExtractionEngine for FailingEngine {
    async fn submit(&self, _request: EngineRequest) -> Result<EngineResponse, EngineError> {
        Err((self.error)())
    }
}

/// Engine double that records the request it received.
struct CapturingEngine {
    seen: Arc<Mutex<Option<EngineRequest>>>,
}

#[async_trait]
impl ExtractionEngine for CapturingEngine {
    async fn submit(&self, request: EngineRequest) -> Result<EngineResponse, EngineError> {
        *self.seen.lock().unwrap() = Some(request);
        Ok(EngineResponse {
            output: Some(json!({})),
        })
    }
}

/// Engine double that never answers, standing in for a stalled service.
struct HangingEngine;

#[async_trait]
impl ExtractionEngine for HangingEngine {
    async fn submit(&self, _request: EngineRequest) -> Result<EngineResponse, EngineError> {
        std::future::pending().await
    }
}

fn jane_doe_response() -> Value {
    json!({
        "personalDetails": {
            "fullName": "Jane Doe",
            "email": "jane@example.com"
        },
        "experience": [{
            "jobTitle": "Software Engineer",
            "company": "Acme",
            "startDate": "2019-01-01",
            "endDate": "Present"
        }],
        "skills": "Rust, Distributed Systems"
    })
}

#[tokio::test]
async fn extract_rejects_empty_document_without_engine_call() {
    let (engine, calls) = StaticEngine::new(Some(json!({})));
    let extractor = ResumeExtractor::new(engine);

    let result = extractor.extract(&DocumentPayload::new("")).await;

    assert!(matches!(result, Err(ExtractError::InvalidInput(_))));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn extract_preserves_conformant_response() {
    let (engine, calls) = StaticEngine::new(Some(jane_doe_response()));
    let extractor = ResumeExtractor::new(engine);

    let result = extractor
        .extract(&DocumentPayload::new(PDF_PAYLOAD))
        .await
        .expect("conformant response extracts");

    let details = result.personal_details.expect("personal details kept");
    assert_eq!(details.full_name.as_deref(), Some("Jane Doe"));
    assert_eq!(details.email.as_deref(), Some("jane@example.com"));
    let experience = result.experience.expect("experience kept");
    assert_eq!(experience.len(), 1);
    assert_eq!(experience[0].job_title.as_deref(), Some("Software Engineer"));
    assert_eq!(experience[0].company.as_deref(), Some("Acme"));
    assert_eq!(experience[0].start_date.as_deref(), Some("2019-01-01"));
    assert_eq!(experience[0].end_date.as_deref(), Some("Present"));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn extract_returns_no_output_for_empty_engine_response() {
    let (engine, _) = StaticEngine::new(None);
    let extractor = ResumeExtractor::new(engine);

    let result = extractor.extract(&DocumentPayload::new(PDF_PAYLOAD)).await;

    match result {
        Err(error @ ExtractError::NoOutput) => assert!(!error.is_transient()),
        other => panic!("expected NoOutput, got {other:?}"),
    }
}

#[tokio::test]
async fn extract_maps_transport_failure_to_engine_unavailable() {
    let engine = FailingEngine {
        error: || EngineError::Unavailable("connection refused".into()),
    };
    let extractor = ResumeExtractor::new(engine);

    let result = extractor.extract(&DocumentPayload::new(PDF_PAYLOAD)).await;

    match result {
        Err(error @ ExtractError::EngineUnavailable(_)) => assert!(error.is_transient()),
        other => panic!("expected EngineUnavailable, got {other:?}"),
    }
}

#[tokio::test]
async fn extract_maps_engine_cancellation_to_cancelled() {
    let engine = FailingEngine {
        error: || EngineError::Cancelled,
    };
    let extractor = ResumeExtractor::new(engine);

    let result = extractor.extract(&DocumentPayload::new(PDF_PAYLOAD)).await;

    assert!(matches!(result, Err(ExtractError::Cancelled)));
}

#[tokio::test]
async fn extract_rejects_malformed_project_url_with_field_path() {
    let (engine, _) = StaticEngine::new(Some(json!({
        "projects": [{ "name": "side project", "url": "not a url" }]
    })));
    let extractor = ResumeExtractor::new(engine);

    let result = extractor.extract(&DocumentPayload::new(PDF_PAYLOAD)).await;

    match result {
        Err(ExtractError::SchemaMismatch(ValidationError::MalformedUrl { path, .. })) => {
            assert_eq!(path, "/projects/0/url");
        }
        other => panic!("expected SchemaMismatch, got {other:?}"),
    }
}

#[tokio::test]
async fn extract_accepts_project_without_url() {
    let (engine, _) = StaticEngine::new(Some(json!({
        "projects": [{ "name": "side project" }]
    })));
    let extractor = ResumeExtractor::new(engine);

    let result = extractor
        .extract(&DocumentPayload::new(PDF_PAYLOAD))
        .await
        .expect("url is optional");

    assert_eq!(
        result.projects.expect("projects kept")[0].name.as_deref(),
        Some("side project")
    );
}

#[tokio::test]
async fn extract_rejects_wrong_primitive_type() {
    let (engine, _) = StaticEngine::new(Some(json!({ "skills": ["Rust", "SQL"] })));
    let extractor = ResumeExtractor::new(engine);

    let result = extractor.extract(&DocumentPayload::new(PDF_PAYLOAD)).await;

    assert!(matches!(
        result,
        Err(ExtractError::SchemaMismatch(ValidationError::Contract { .. }))
    ));
}

#[tokio::test]
async fn extract_tolerates_and_drops_unknown_fields() {
    let (engine, _) = StaticEngine::new(Some(json!({
        "summary": "kept",
        "astrologicalSign": "Aries"
    })));
    let extractor = ResumeExtractor::new(engine);

    let result = extractor
        .extract(&DocumentPayload::new(PDF_PAYLOAD))
        .await
        .expect("unknown fields are tolerated");

    assert_eq!(result.summary.as_deref(), Some("kept"));
}

#[tokio::test]
async fn request_carries_document_contract_and_guidance() {
    let seen = Arc::new(Mutex::new(None));
    let engine = CapturingEngine { seen: seen.clone() };
    let extractor = ResumeExtractor::new(engine);

    extractor
        .extract(&DocumentPayload::new(PDF_PAYLOAD))
        .await
        .expect("empty object validates");

    let request = seen.lock().unwrap().take().expect("engine was called");
    assert_eq!(request.document, PDF_PAYLOAD);
    assert!(request.instruction.contains("'Present'"));
    assert!(request.instruction.contains("YYYY-MM-DD"));
    assert!(request.output_contract["properties"]
        .as_object()
        .is_some_and(|p| p.contains_key("experience")));
}

#[tokio::test]
async fn instruction_override_reaches_the_engine() {
    let seen = Arc::new(Mutex::new(None));
    let engine = CapturingEngine { seen: seen.clone() };
    let config = ExtractorConfig::default()
        .with_instruction("Parse this resume.")
        .with_contract_in_instruction(false);
    let extractor = ResumeExtractor::with_config(engine, config);

    extractor
        .extract(&DocumentPayload::new(PDF_PAYLOAD))
        .await
        .expect("empty object validates");

    let request = seen.lock().unwrap().take().expect("engine was called");
    assert_eq!(request.instruction, "Parse this resume.");
}

#[tokio::test]
async fn extract_with_metrics_reports_token_estimates() {
    let (engine, _) = StaticEngine::new(Some(jane_doe_response()));
    let extractor = ResumeExtractor::new(engine);

    let (_, metrics) = extractor
        .extract_with_metrics(&DocumentPayload::new(PDF_PAYLOAD))
        .await
        .expect("conformant response extracts");

    assert!(metrics.estimated_input_tokens > 0);
    assert!(metrics.estimated_output_tokens > 0);
}

#[tokio::test(start_paused = true)]
async fn external_timeout_cancels_a_stalled_extraction() {
    let extractor = ResumeExtractor::new(HangingEngine);
    let payload = DocumentPayload::new(PDF_PAYLOAD);

    // The caller imposes the deadline; the single-await extract future is
    // dropped when it fires, abandoning the outstanding request.
    let outcome = tokio::time::timeout(Duration::from_secs(5), extractor.extract(&payload)).await;

    assert!(outcome.is_err());
}
