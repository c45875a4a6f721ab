//! Typed feedback schema — the fixed ten-section record returned to clients.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The ten section headings the model is asked to produce, in response order.
/// Headings outside this set are dropped during parsing.
pub const SECTION_NAMES: [&str; 10] = [
    "Summary",
    "Market Demand",
    "Ability to Pay",
    "Challenges and Opportunities",
    "Key Competitors",
    "Ability to Scale",
    "Resources Required",
    "Steps to Validate",
    "Getting Started",
    "Constructive Feedback",
];

/// Structured feedback for a business idea.
///
/// Every field is always present in the JSON output; sections the model
/// omitted serialize as empty strings (empty list for competitors). Field
/// order matches `SECTION_NAMES`, so serialized key order does too.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructuredFeedback {
    #[serde(rename = "Summary", default)]
    pub summary: String,
    #[serde(rename = "Market Demand", default)]
    pub market_demand: String,
    #[serde(rename = "Ability to Pay", default)]
    pub ability_to_pay: String,
    #[serde(rename = "Challenges and Opportunities", default)]
    pub challenges_and_opportunities: String,
    /// Schema exception: a sequence of records, not a string.
    #[serde(rename = "Key Competitors", default)]
    pub key_competitors: Vec<CompetitorRecord>,
    #[serde(rename = "Ability to Scale", default)]
    pub ability_to_scale: String,
    #[serde(rename = "Resources Required", default)]
    pub resources_required: String,
    #[serde(rename = "Steps to Validate", default)]
    pub steps_to_validate: String,
    #[serde(rename = "Getting Started", default)]
    pub getting_started: String,
    #[serde(rename = "Constructive Feedback", default)]
    pub constructive_feedback: String,
}

/// One competitor pulled out of the "Key Competitors" section.
///
/// Attribute names are free-form (typically Name / Strengths / Weaknesses) —
/// the model is prompted for those three but not trusted to stick to them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompetitorRecord(pub BTreeMap<String, String>);

impl CompetitorRecord {
    pub fn insert(&mut self, attribute: String, value: String) {
        self.0.insert(attribute, value);
    }

    pub fn get(&self, attribute: &str) -> Option<&str> {
        self.0.get(attribute).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<const N: usize> From<[(&str, &str); N]> for CompetitorRecord {
    fn from(pairs: [(&str, &str); N]) -> Self {
        Self(
            pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}
