//! Response parser — assembles the typed feedback record from the model's
//! raw completion text.
//!
//! This layer never fails: sections the model skipped or mangled come back as
//! empty strings (empty list for competitors), so callers always receive the
//! full ten-section schema.

use crate::validation::competitors::extract_competitors;
use crate::validation::models::StructuredFeedback;
use crate::validation::sections::split_sections;

/// Parses the raw completion text into a `StructuredFeedback`.
///
/// Recognized section names fill their field; "Key Competitors" routes
/// through the competitor extractor; anything else the heading heuristic
/// matched is dropped. Starting from `Default` gives every unmatched field
/// its empty value, so the fixed key set holds for any input.
pub fn parse_response(raw: &str) -> StructuredFeedback {
    let mut feedback = StructuredFeedback::default();

    for section in split_sections(raw) {
        match section.name.as_str() {
            "Summary" => feedback.summary = section.body,
            "Market Demand" => feedback.market_demand = section.body,
            "Ability to Pay" => feedback.ability_to_pay = section.body,
            "Challenges and Opportunities" => {
                feedback.challenges_and_opportunities = section.body
            }
            "Key Competitors" => {
                feedback.key_competitors = extract_competitors(&section.body)
            }
            "Ability to Scale" => feedback.ability_to_scale = section.body,
            "Resources Required" => feedback.resources_required = section.body,
            "Steps to Validate" => feedback.steps_to_validate = section.body,
            "Getting Started" => feedback.getting_started = section.body,
            "Constructive Feedback" => feedback.constructive_feedback = section.body,
            _ => {}
        }
    }

    feedback
}
