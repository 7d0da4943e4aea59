// Shared prompt constants. Each module that builds LLM prompts defines its
// own prompts.rs alongside it; this file holds cross-cutting fragments.

/// System prompt for all opener generation calls. The model must return
/// only the email content itself — no preamble, no commentary.
pub const COPYWRITER_SYSTEM: &str =
    "You are a world-class B2B cold email copywriter. Only return the email content itself.";
