//! The single extraction instruction sent to the engine.

use serde_json::Value;

use crate::config::ExtractorConfig;

/// Base instruction. Names every section of the contract and carries the
/// date-normalization guidance; the document itself travels separately in
/// the request.
const BASE_INSTRUCTION: &str = "You are an expert resume parser. Analyze the \
attached resume document and extract the information into a structured JSON \
format. Be as accurate as possible. Extract all sections including personal \
details (name, email, phone, address, LinkedIn), summary, work experience, \
education, projects, and skills. Standardize start and end dates to \
'YYYY-MM-DD' format and graduation dates to 'YYYY-MM' format, and use \
'Present' as the end date of an ongoing role.";

/// Builds the instruction for one extraction request.
///
/// When configured, the pretty-printed output contract is appended so the
/// engine sees the exact shape it must produce. An instruction override
/// replaces the base text but keeps the contract suffix behavior.
#[must_use]
pub fn build_instruction(config: &ExtractorConfig, output_contract: &Value) -> String {
    let base = config
        .instruction_override
        .as_deref()
        .unwrap_or(BASE_INSTRUCTION);
    if !config.include_contract_in_instruction {
        return base.to_string();
    }
    let contract = serde_json::to_string_pretty(output_contract)
        .unwrap_or_else(|_| output_contract.to_string());
    format!("{base}\n\nRespond with a single JSON object conforming to this schema:\n{contract}")
}
