//! Validators for the input and output contracts.

use schemars::schema_for;
use serde_json::{json, Value};
use thiserror::Error;
use url::Url;

use crate::document::DocumentPayload;
use crate::resume::ExtractionResult;

/// Violations of the input or output contract.
///
/// Variants that refer to a field carry its JSON instance path, so a caller
/// can tell exactly which part of a response was rejected.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The payload carries no document content.
    #[error("document payload is missing or empty")]
    EmptyDocument,

    /// The raw response violates the declared output shape.
    #[error("at '{path}': {message}")]
    Contract {
        /// Instance path of the offending field (empty for the root).
        path: String,
        /// Description of the violation.
        message: String,
    },

    /// A project URL is present but not syntactically valid.
    #[error("malformed URL at '{path}': {message}")]
    MalformedUrl {
        /// Instance path of the offending field.
        path: String,
        /// Parser error text.
        message: String,
    },
}

/// Returns the declarative JSON Schema every extraction result must satisfy.
///
/// Derived from [`ExtractionResult`], so the contract the engine is held to
/// and the type the caller receives are the same declaration.
#[must_use]
pub fn output_contract() -> Value {
    json!(schema_for!(ExtractionResult))
}

/// Checks that a payload actually carries a document.
///
/// The content is not decoded and its format is not inspected: a payload
/// is valid as long as the document field is non-blank. Whether the string
/// decodes to a supported document format is the engine's concern.
pub fn validate_input(payload: &DocumentPayload) -> Result<(), ValidationError> {
    if payload.document.trim().is_empty() {
        return Err(ValidationError::EmptyDocument);
    }
    Ok(())
}

/// Validates a raw engine response against the output contract.
///
/// Every field is checked against its declared type and optionality, then
/// the one format rule the shape check cannot express is applied: a present
/// `projects[i].url` must parse as a URL. Unknown extra fields are tolerated
/// and dropped; wrong primitive types are violations, never coerced. Any
/// violation rejects the whole response, carrying the offending field path.
pub fn validate_output(raw: &Value) -> Result<ExtractionResult, ValidationError> {
    if let Some(error) = contract_violation(raw) {
        return Err(error);
    }
    check_project_urls(raw)?;

    serde_json::from_value(raw.clone()).map_err(|e| ValidationError::Contract {
        path: String::new(),
        message: e.to_string(),
    })
}

/// Returns the first shape violation reported by the schema validator.
fn contract_violation(raw: &Value) -> Option<ValidationError> {
    match jsonschema::Validator::new(&output_contract()) {
        Ok(validator) => validator
            .iter_errors(raw)
            .next()
            .map(|error| ValidationError::Contract {
                path: error.instance_path.to_string(),
                message: error.to_string(),
            }),
        Err(e) => Some(ValidationError::Contract {
            path: String::new(),
            message: format!("schema compilation error: {e}"),
        }),
    }
}

/// Applies the project-URL format rule.
fn check_project_urls(raw: &Value) -> Result<(), ValidationError> {
    let Some(projects) = raw.get("projects").and_then(Value::as_array) else {
        return Ok(());
    };
    for (index, project) in projects.iter().enumerate() {
        if let Some(url) = project.get("url").and_then(Value::as_str) {
            if let Err(e) = Url::parse(url) {
                return Err(ValidationError::MalformedUrl {
                    path: format!("/projects/{index}/url"),
                    message: e.to_string(),
                });
            }
        }
    }
    Ok(())
}
