// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Marks where untrusted resume text begins and ends inside a prompt.
pub fn fenced_block(label: &str, body: &str) -> String {
    format!("=== {label} START ===\n{}\n=== {label} END ===", body.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fenced_block_trims_body() {
        assert_eq!(
            fenced_block("RESUME", "\n  Jane Doe \n"),
            "=== RESUME START ===\nJane Doe\n=== RESUME END ==="
        );
    }
}
