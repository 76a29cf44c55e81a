//! Structured-output contract for resume extraction.
//!
//! This crate is the leaf of the workspace: it declares, as plain Rust
//! types, the exact shape every extraction result must satisfy, field-level
//! optionality included, plus the single document-input contract and the
//! one hard format rule (project URLs). The JSON Schema the engine is held to is derived
//! from these types, so the Rust structs and the declarative contract cannot
//! drift apart.
//!
//! Validation is pure: the same raw value always yields the same verdict,
//! and nothing here performs I/O or talks to the engine.

pub mod document;
pub mod resume;
pub mod validate;

pub use document::DocumentPayload;
pub use resume::{
    EducationEntry, ExperienceEntry, ExtractionResult, PersonalDetails, ProjectEntry,
};
pub use validate::{output_contract, validate_input, validate_output, ValidationError};
