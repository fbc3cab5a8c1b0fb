// LLM prompt templates for interview question generation.

use crate::llm_client::prompts::fenced_block;

pub const QUESTIONS_SYSTEM: &str = "You are an experienced technical interviewer \
    preparing a candidate for an entry-level role. \
    Ask questions a hiring panel would realistically ask about the candidate's own resume.";

/// Question prompt template. Replace `{resume}` before sending.
const QUESTIONS_PROMPT_TEMPLATE: &str = r#"Generate as many interview questions as you need based on the resume below.

Calibrate difficulty for an entry-level candidate:
- Ask about the projects, skills, and coursework actually listed.
- Mix technical questions with behavioural ones.
- Do not assume professional experience the resume does not show.

Write one question per line, with no preamble.

{resume}"#;

pub fn build_questions_prompt(resume_text: &str) -> String {
    QUESTIONS_PROMPT_TEMPLATE.replace("{resume}", &fenced_block("RESUME", resume_text))
}
