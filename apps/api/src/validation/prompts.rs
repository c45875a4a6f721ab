//! Prompt constants and assembly for the validation flow.
//!
//! The structure template is the contract the parser relies on: ten labeled
//! sections plus nested competitor sub-blocks. Personas only change the
//! framing sentence around the base prompt, never the requested format.

/// Response format the model is asked to follow. The parser's section
/// heuristic and competitor markers mirror this template.
pub const RESPONSE_STRUCTURE: &str = "\
Summary:
Market Demand:
Ability to Pay:
Challenges and Opportunities:
Key Competitors:
Competitor #1:
    Name:
    Strengths:
    Weaknesses:
Competitor #2:
    Name:
    Strengths:
    Weaknesses:
Competitor #3:
    Name:
    Strengths:
    Weaknesses:
Ability to Scale:
Resources Required:
Steps to Validate:
Getting Started:
Constructive Feedback:
";

/// Builds the full outbound prompt for a business idea and advisor persona.
/// Unknown personas fall back to the general-advisor framing.
pub fn build_prompt(business_idea: &str, advisor_type: &str) -> String {
    let base = format!(
        "Provide feedback on this business idea: {business_idea}. \
         Structure your response using the following format:\n{RESPONSE_STRUCTURE}\n\
         Ensure each section is properly labeled."
    );

    let (opening, closing) = persona_framing(advisor_type);
    format!("{opening} {base} {closing}")
}

/// Persona-specific opening and closing phrases keyed by lowercased type.
fn persona_framing(advisor_type: &str) -> (&'static str, &'static str) {
    match advisor_type.to_lowercase().as_str() {
        "strategist" => (
            "As a strategic advisor,",
            "Provide a professional and balanced perspective.",
        ),
        "cheerleader" => (
            "As an enthusiastic supporter,",
            "Provide overly positive feedback.",
        ),
        "realist" => (
            "As a pragmatic advisor,",
            "Be brutally honest and direct about the flaws.",
        ),
        "roaster" => (
            "As a humorous critic,",
            "Roast this idea humorously while still providing constructive feedback.",
        ),
        "innovator" => (
            "As an innovation expert,",
            "Analyze how innovative and disruptive this idea is.",
        ),
        "skeptic" => (
            "As a skeptical advisor,",
            "Focus on the potential risks and challenges.",
        ),
        "investor" => (
            "As a potential investor,",
            "Evaluate this idea from an investment perspective.",
        ),
        "dreamer" => (
            "As a visionary thinker,",
            "Provide feedback on how this idea could change the world.",
        ),
        "analyst" => (
            "As a data-driven analyst,",
            "Analyze this idea from a quantitative perspective.",
        ),
        "consumer" => (
            "As a potential consumer,",
            "Provide feedback from a user's perspective.",
        ),
        _ => (
            "As a general advisor,",
            "Provide comprehensive feedback on all aspects of the idea.",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::models::SECTION_NAMES;

    #[test]
    fn test_structure_lists_every_section_heading() {
        for name in SECTION_NAMES {
            assert!(
                RESPONSE_STRUCTURE.contains(&format!("{name}:")),
                "structure missing {name}"
            );
        }
    }

    #[test]
    fn test_structure_has_three_competitor_blocks() {
        for n in 1..=3 {
            assert!(RESPONSE_STRUCTURE.contains(&format!("Competitor #{n}:")));
        }
    }

    #[test]
    fn test_prompt_embeds_idea_and_persona() {
        let prompt = build_prompt("a drone window-washing service", "investor");
        assert!(prompt.starts_with("As a potential investor,"));
        assert!(prompt.contains("a drone window-washing service"));
        assert!(prompt.ends_with("Evaluate this idea from an investment perspective."));
    }

    #[test]
    fn test_persona_match_is_case_insensitive() {
        let upper = build_prompt("idea", "ROASTER");
        let lower = build_prompt("idea", "roaster");
        assert_eq!(upper, lower);
        assert!(upper.starts_with("As a humorous critic,"));
    }

    #[test]
    fn test_unknown_persona_falls_back_to_general() {
        let prompt = build_prompt("idea", "astronaut");
        assert!(prompt.starts_with("As a general advisor,"));
    }
}
