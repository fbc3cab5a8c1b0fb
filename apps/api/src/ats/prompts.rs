// LLM prompt templates for ATS scoring.

use crate::llm_client::prompts::{fenced_block, JSON_ONLY_SYSTEM};

/// System prompt for ATS scoring. Enforces JSON-only output.
pub const ATS_SYSTEM: &str = "You are an Applicant Tracking System (ATS) evaluating resumes \
    of students and early-career candidates against a job description. \
    Respond with a single JSON object and nothing else.";

/// Fixed instructions that precede the two documents.
const ATS_INSTRUCTIONS: &str = r#"Compare the resume with the job description and score how well they match.

Do NOT penalize the candidate for a lack of professional experience. Judge
projects, coursework, internships, and skills on their merits.

Return ONLY a JSON object with exactly these fields:
{
  "atsScore": <integer from 0 to 100>,
  "matchedSkills": ["skill found in both the resume and the job description"],
  "missingSkills": ["skill the job description asks for that the resume lacks"],
  "strengths": ["strong point of the resume for this role"],
  "improvementSuggestions": ["concrete change that would raise the score"],
  "finalVerdict": "one or two sentence summary"
}"#;

/// Assembled in one pass: braces in either document are never read back as
/// placeholders.
pub fn build_ats_prompt(resume_text: &str, job_description: &str) -> String {
    format!(
        "{ATS_INSTRUCTIONS}\n\n{JSON_ONLY_SYSTEM}\n\n{}\n\n{}",
        fenced_block("RESUME", resume_text),
        fenced_block("JOB DESCRIPTION", job_description)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_both_documents() {
        let prompt = build_ats_prompt("Jane: Rust, SQL", "Backend intern, Rust required");
        assert!(prompt.contains("=== RESUME START ===\nJane: Rust, SQL"));
        assert!(prompt.contains("=== JOB DESCRIPTION START ===\nBackend intern, Rust required"));
        assert!(prompt.contains("Do NOT penalize"));
        assert!(prompt.contains("\"improvementSuggestions\""));
        assert!(prompt.contains(JSON_ONLY_SYSTEM));
    }

    #[test]
    fn test_placeholder_text_in_documents_left_alone() {
        let prompt = build_ats_prompt(
            "Templating: {job_description} and {resume}",
            "SECRET JD {resume}",
        );
        assert_eq!(prompt.matches("SECRET JD").count(), 1);
        assert_eq!(prompt.matches("Templating:").count(), 1);
        assert!(prompt.contains("Templating: {job_description} and {resume}"));
        assert!(prompt.contains("SECRET JD {resume}"));
    }
}
