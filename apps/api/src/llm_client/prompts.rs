// Shared prompt fragments. Each feature that calls the LLM keeps its own
// prompts.rs alongside it and reuses these.

/// Closing instruction that enforces JSON-only output.
pub const JSON_ONLY_INSTRUCTION: &str = "JSON 형식만 응답하고, 다른 설명은 포함하지 마세요";

/// System prompt suffix that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "항상 유효한 JSON 형식으로만 응답합니다.";
