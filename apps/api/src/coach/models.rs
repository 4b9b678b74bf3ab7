//! Request and response records for the coaching endpoint.

use serde::{Deserialize, Serialize};

/// A candidate's profile. Field names follow the public wire contract
/// (`careerSummary`, `jobDuties`, `technicalSkills`).
///
/// The handler-level validator guarantees non-empty fields and a non-empty,
/// order-preserving skill list before this reaches the advice pipeline.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerProfile {
    pub career_summary: String,
    pub job_duties: String,
    pub technical_skills: Vec<String>,
}

/// The coaching artifacts returned to the caller.
///
/// Shape contract: `interview_questions` always has at least one entry and
/// `learning_path` is always non-empty, even when generation fails upstream.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachingAdvice {
    pub interview_questions: Vec<String>,
    /// Markdown prose, rendered as-is by the front-end.
    pub learning_path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_career_profile_deserializes_from_wire_names() {
        let json = r#"{
            "careerSummary": "3년차 백엔드 개발자",
            "jobDuties": "Spring Boot 기반 커머스 서비스 개발 및 운영",
            "technicalSkills": ["Java", "Spring Boot", "MSA"]
        }"#;

        let profile: CareerProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.career_summary, "3년차 백엔드 개발자");
        assert_eq!(profile.technical_skills.len(), 3);
        assert_eq!(profile.technical_skills[0], "Java");
    }

    #[test]
    fn test_coaching_advice_serializes_to_wire_names() {
        let advice = CoachingAdvice {
            interview_questions: vec!["질문1".to_string()],
            learning_path: "## 진단\n...".to_string(),
        };

        let value = serde_json::to_value(&advice).unwrap();
        assert!(value.get("interviewQuestions").is_some());
        assert!(value.get("learningPath").is_some());
        assert!(value.get("interview_questions").is_none());
    }

    #[test]
    fn test_career_profile_rejects_missing_fields() {
        let json = r#"{"careerSummary": "3년차", "jobDuties": "개발"}"#;
        let result: Result<CareerProfile, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
