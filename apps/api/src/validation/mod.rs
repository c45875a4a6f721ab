//! Validation flow: prompt assembly, the outbound completion call, and the
//! parsing core that turns the model's free text into the fixed schema.

pub mod competitors;
pub mod handlers;
pub mod models;
pub mod parser;
pub mod prompts;
pub mod sections;

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::validation::models::StructuredFeedback;
use crate::validation::parser::parse_response;
use crate::validation::prompts::build_prompt;

/// Runs the full flow for one request: build the persona prompt, obtain the
/// completion (the client retries internally), parse into the fixed schema.
/// Parsing itself never fails; only the outbound call can error.
pub async fn validate_business_idea(
    llm: &LlmClient,
    business_idea: &str,
    advisor_type: &str,
) -> Result<StructuredFeedback, AppError> {
    let prompt = build_prompt(business_idea, advisor_type);
    let raw = llm
        .complete(&prompt)
        .await
        .map_err(|e| AppError::Llm(e.to_string()))?;
    Ok(parse_response(&raw))
}
