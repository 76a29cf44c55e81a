//! Value objects for the structured-output contract.
//!
//! Doc comments on fields double as descriptions in the derived JSON
//! Schema, so they are written for the engine as much as for the reader.
//! Wire names are camelCase; every field is independently optional, since a
//! resume may omit any of them.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Contact and identity details for the candidate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PersonalDetails {
    /// The full name of the candidate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// The email address of the candidate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// The phone number of the candidate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// The physical address of the candidate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// The URL of the candidate's LinkedIn profile.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
}

/// One role in the candidate's work history.
///
/// Dates are strings the engine is instructed to normalize to `YYYY-MM-DD`;
/// that guidance lives in the extraction instruction, not in the contract,
/// so an unnormalized date is still structurally valid. Entry order carries
/// no guarantee.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    /// The job title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    /// The company name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    /// The start date in `YYYY-MM-DD` format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// The end date in `YYYY-MM-DD` format, or `Present` for an ongoing role.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// A description of the role and responsibilities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One educational qualification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    /// The name of the educational institution.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
    /// The degree or certificate obtained.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degree: Option<String>,
    /// The graduation date in `YYYY-MM` format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graduation_date: Option<String>,
}

/// One project the candidate lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntry {
    /// The name of the project.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// A brief description of the project.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// A valid URL for the project.
    ///
    /// The one hard format rule in the contract: when present, this must
    /// parse as a URL or the whole response is rejected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// The root structured output of one extraction call.
///
/// Constructed fresh from the engine's raw response, validated once, and
/// handed to the caller; never mutated or shared across invocations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    /// Personal details of the candidate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personal_details: Option<PersonalDetails>,
    /// The professional summary or objective.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// A list of work experiences.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<Vec<ExperienceEntry>>,
    /// A list of educational qualifications.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<Vec<EducationEntry>>,
    /// A list of projects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<ProjectEntry>>,
    /// A comma-separated list of skills.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<String>,
}
