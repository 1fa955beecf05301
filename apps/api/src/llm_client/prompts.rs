// Shared prompt constants and prompt-building utilities.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// Instruction appended to every prompt whose answer is consumed as a raw
/// Markdown document.
pub const MARKDOWN_OUTPUT_INSTRUCTION: &str = "\
    Respond with the document as plain Markdown. \
    Do NOT wrap the document in code fences. \
    Do NOT include commentary before or after the document.";
