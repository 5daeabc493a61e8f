// Prompt constants for the CV analysis endpoint.
// The template is the contract with the model: the four keys it names are
// exactly the keys relayed to the caller.

/// System prompt — enforces JSON-only output.
pub const ANALYSIS_SYSTEM: &str = "You are a helpful assistant specialized in HR and CV analysis. \
    Your output must be a valid JSON object. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Analysis prompt template. Replace `{cv_text}` and `{job_description}`
/// before sending. Inputs are embedded as-is, no truncation.
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"You are an expert CV analyst. Your task is to compare a Candidate's CV with a specific Job Description (JD).

**CANDIDATE CV TEXT:**
---
{cv_text}
---

**JOB DESCRIPTION (JD):**
---
{job_description}
---

Based on the comparison, generate a JSON response with the following keys:
1.  **fit_score_percent**: (Integer 0-100) A numerical match percentage.
2.  **summary**: (String) A 3-sentence summary of the CV's alignment with the JD.
3.  **issues_to_update**: (List of Strings) A list of 3-5 specific, actionable bullet points the user must update or add to their CV to better match the JD (e.g., "Quantify your experience with Python by adding project results.").
4.  **alternative_summary**: (String) A new, best-alternative professional summary (4-6 lines) written for the CV, optimized specifically for this JD.

Ensure the output is ONLY a valid JSON object."#;

pub fn build_analysis_prompt(cv_text: &str, job_description: &str) -> String {
    ANALYSIS_PROMPT_TEMPLATE
        .replace("{cv_text}", cv_text)
        .replace("{job_description}", job_description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_both_inputs_verbatim() {
        let prompt = build_analysis_prompt(
            "Ten years of Rust experience",
            "Looking for a senior Rust engineer",
        );
        assert!(prompt.contains("Ten years of Rust experience"));
        assert!(prompt.contains("Looking for a senior Rust engineer"));
        assert!(!prompt.contains("{cv_text}"));
        assert!(!prompt.contains("{job_description}"));
    }

    #[test]
    fn test_prompt_names_all_four_response_keys() {
        let prompt = build_analysis_prompt("cv", "jd");
        for key in [
            "fit_score_percent",
            "summary",
            "issues_to_update",
            "alternative_summary",
        ] {
            assert!(prompt.contains(key), "prompt must name key '{key}'");
        }
    }

    #[test]
    fn test_prompt_does_not_truncate_large_inputs() {
        let big_cv = "x".repeat(200_000);
        let prompt = build_analysis_prompt(&big_cv, "jd");
        assert!(prompt.len() > 200_000);
    }
}
