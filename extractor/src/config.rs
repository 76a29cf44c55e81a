//! Configuration for the extraction orchestrator.

/// Configuration for one extractor instance.
///
/// Instruction text and contract embedding are configuration, not
/// architecture: changing them never changes validation or failure
/// semantics.
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Whether to append the output contract to the instruction (default: true).
    pub include_contract_in_instruction: bool,
    /// Replacement for the built-in instruction text (default: none).
    pub instruction_override: Option<String>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            include_contract_in_instruction: true,
            instruction_override: None,
        }
    }
}

impl ExtractorConfig {
    /// Set whether the output contract is appended to the instruction.
    #[must_use]
    pub const fn with_contract_in_instruction(mut self, include: bool) -> Self {
        self.include_contract_in_instruction = include;
        self
    }

    /// Replace the built-in instruction text.
    #[must_use]
    pub fn with_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.instruction_override = Some(instruction.into());
        self
    }
}
