use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::state::AppState;
use crate::validation::models::StructuredFeedback;
use crate::validation::validate_business_idea;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateRequest {
    pub business_idea: String,
    pub advisor_type: String,
}

/// POST /validate
pub async fn handle_validate(
    State(state): State<AppState>,
    Json(req): Json<ValidateRequest>,
) -> Result<Json<StructuredFeedback>, AppError> {
    let feedback =
        validate_business_idea(&state.llm, &req.business_idea, &req.advisor_type).await?;
    Ok(Json(feedback))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_accepts_camel_case_body() {
        let json = r#"{"businessIdea": "dog cafe", "advisorType": "skeptic"}"#;
        let req: ValidateRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.business_idea, "dog cafe");
        assert_eq!(req.advisor_type, "skeptic");
    }

    #[test]
    fn test_request_rejects_snake_case_body() {
        let json = r#"{"business_idea": "dog cafe", "advisor_type": "skeptic"}"#;
        assert!(serde_json::from_str::<ValidateRequest>(json).is_err());
    }
}
