// Prompt assembly for opener generation. The system prompt lives in
// llm_client::prompts; this builds the per-request user message.

use crate::generation::lead::{Length, Style};

/// Builds the user prompt from the cleaned lead text and form fields.
/// Company and job title clauses are included only when non-empty.
/// The prompt asks for a numbered list so the extractor's primary
/// pattern matches the expected output shape.
pub fn build_prompt(
    lead: &str,
    company: &str,
    job_title: &str,
    style: Style,
    length: Length,
    num_openers: u8,
) -> String {
    let noun = if num_openers == 1 {
        "personalized opener"
    } else {
        "distinct personalized openers"
    };
    let mut prompt = format!(
        "Write {} {} for a cold outreach email in a {} tone. \
         Each opener should be {} and reference something specific about the lead.",
        num_openers,
        noun,
        style.prompt_adjective(),
        length.guidance(),
    );

    let company = company.trim();
    if !company.is_empty() {
        prompt.push_str(&format!(" The lead works at {company}."));
    }

    let job_title = job_title.trim();
    if !job_title.is_empty() {
        prompt.push_str(&format!(" Their job title is {job_title}."));
    }

    prompt.push_str(&format!(
        "\n\nReturn the openers as a numbered list (1., 2., ...) with no extra commentary.\
         \n\nLead info:\n{lead}"
    ));

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_includes_lead_and_count() {
        let prompt = build_prompt(
            "VP of Sales at Acme, posted about pipeline pain",
            "",
            "",
            Style::Friendly,
            Length::Medium,
            3,
        );
        assert!(prompt.contains("Write 3 distinct personalized openers"));
        assert!(prompt.contains("VP of Sales at Acme, posted about pipeline pain"));
        assert!(prompt.contains("numbered list"));
    }

    #[test]
    fn test_company_clause_gated_on_nonempty() {
        let without = build_prompt("lead", "", "", Style::Friendly, Length::Short, 1);
        assert!(!without.contains("works at"));

        let with = build_prompt("lead", "Acme Corp", "", Style::Friendly, Length::Short, 1);
        assert!(with.contains("The lead works at Acme Corp."));
    }

    #[test]
    fn test_job_title_clause_gated_on_nonempty() {
        let without = build_prompt("lead", "Acme", "   ", Style::Bold, Length::Long, 2);
        assert!(!without.contains("job title"));

        let with = build_prompt("lead", "Acme", "Head of Growth", Style::Bold, Length::Long, 2);
        assert!(with.contains("Their job title is Head of Growth."));
    }

    #[test]
    fn test_singular_noun_for_one_opener() {
        let prompt = build_prompt("lead", "", "", Style::Casual, Length::Short, 1);
        assert!(prompt.contains("Write 1 personalized opener"));
        assert!(!prompt.contains("openers for a cold"));
    }

    #[test]
    fn test_style_and_length_reflected() {
        let prompt = build_prompt("lead", "", "", Style::Professional, Length::Long, 4);
        assert!(prompt.contains("professional tone"));
        assert!(prompt.contains("a short paragraph of four to five sentences"));
    }
}
