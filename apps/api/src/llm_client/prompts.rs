// Shared prompt constants.
// Feature modules keep their own prompts.rs alongside them; this file holds the
// cross-cutting system instruction.

/// System prompt for framework generation — sets the persona and enforces JSON output.
pub const FRAMEWORK_DESIGNER_SYSTEM: &str = "You are an expert framework designer who \
    creates comprehensive, actionable frameworks grounded in established framework \
    principles. Always respond with valid JSON.";
