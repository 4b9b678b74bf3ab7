//! HTTP handler for the coaching endpoint.
//!
//! Performs the request-shape validation the advice pipeline assumes has
//! already happened; past this point the profile invariants are trusted.

use axum::{extract::State, Json};

use crate::coach::advisor::generate_advice;
use crate::coach::models::{CareerProfile, CoachingAdvice};
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/v1/coach
pub async fn handle_coach(
    State(state): State<AppState>,
    Json(profile): Json<CareerProfile>,
) -> Result<Json<CoachingAdvice>, AppError> {
    validate_profile(&profile)?;
    let advice = generate_advice(state.llm.as_ref(), &profile).await;
    Ok(Json(advice))
}

/// Rejects blank fields and empty skill lists before the profile reaches the
/// advice pipeline.
fn validate_profile(profile: &CareerProfile) -> Result<(), AppError> {
    if profile.career_summary.trim().is_empty() {
        return Err(AppError::Validation(
            "careerSummary must not be empty".to_string(),
        ));
    }
    if profile.job_duties.trim().is_empty() {
        return Err(AppError::Validation(
            "jobDuties must not be empty".to_string(),
        ));
    }
    if profile.technical_skills.is_empty() {
        return Err(AppError::Validation(
            "technicalSkills must not be empty".to_string(),
        ));
    }
    if profile.technical_skills.iter().any(|s| s.trim().is_empty()) {
        return Err(AppError::Validation(
            "technicalSkills entries must not be blank".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> CareerProfile {
        CareerProfile {
            career_summary: "3년차 백엔드 개발자".to_string(),
            job_duties: "커머스 서비스 개발".to_string(),
            technical_skills: vec!["Java".to_string(), "AWS".to_string()],
        }
    }

    #[test]
    fn test_valid_profile_passes() {
        assert!(validate_profile(&profile()).is_ok());
    }

    #[test]
    fn test_blank_career_summary_rejected() {
        let mut p = profile();
        p.career_summary = "   ".to_string();
        assert!(matches!(
            validate_profile(&p),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_blank_job_duties_rejected() {
        let mut p = profile();
        p.job_duties = String::new();
        assert!(validate_profile(&p).is_err());
    }

    #[test]
    fn test_empty_skill_list_rejected() {
        let mut p = profile();
        p.technical_skills.clear();
        assert!(validate_profile(&p).is_err());
    }

    #[test]
    fn test_blank_skill_entry_rejected() {
        let mut p = profile();
        p.technical_skills.push(" ".to_string());
        assert!(validate_profile(&p).is_err());
    }
}
