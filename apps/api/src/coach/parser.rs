//! Response parsing: converts a raw generation outcome into typed, non-empty
//! coaching artifacts.
//!
//! Both entry points are total functions. A failed call or malformed text
//! degrades to a fixed placeholder; no error crosses this boundary, so the
//! advisor never sees a branch-level failure.

use tracing::warn;

use crate::llm_client::LlmError;

/// Returned when the generation call itself failed (auth, quota, network).
pub const CALL_FAILURE_PLACEHOLDER: &str =
    "AI 모델 호출 중 오류가 발생했습니다. API 키와 서버 상태를 확인해주세요.";

/// Returned when the call succeeded but no usable question list could be
/// recovered from the text.
pub const EMPTY_RESULT_PLACEHOLDER: &str = "AI 모델로부터 유효한 질문 목록을 생성하지 못했습니다.";

/// Fallback extraction keeps at most this many questions. The strict JSON
/// path is not capped.
const FALLBACK_QUESTION_CAP: usize = 5;

/// Lines at or below this length after decoration stripping are noise.
const MIN_QUESTION_CHARS: usize = 10;

/// Converts a question-generation outcome into a non-empty question list.
///
/// Strict path first: text that parses as a non-empty JSON array of strings
/// is returned unmodified and uncapped. Anything else goes through heuristic
/// line extraction, and finally a fixed placeholder when nothing usable
/// remains.
pub fn parse_questions(outcome: Result<String, LlmError>) -> Vec<String> {
    let text = match outcome {
        Ok(text) => text,
        Err(e) => {
            warn!("question generation failed: {e}");
            return vec![CALL_FAILURE_PLACEHOLDER.to_string()];
        }
    };

    if let Ok(questions) = serde_json::from_str::<Vec<String>>(text.trim()) {
        if !questions.is_empty() {
            return questions;
        }
    }

    let extracted = extract_question_lines(&text);
    if extracted.is_empty() {
        warn!("no question list recovered from generation output");
        vec![EMPTY_RESULT_PLACEHOLDER.to_string()]
    } else {
        extracted
    }
}

/// Converts a learning-path outcome into a non-empty markdown string.
///
/// Successful text passes through byte-for-byte; a failed call degrades to
/// the fixed placeholder.
pub fn parse_learning_path(outcome: Result<String, LlmError>) -> String {
    match outcome {
        Ok(text) => text,
        Err(e) => {
            warn!("learning path generation failed: {e}");
            CALL_FAILURE_PLACEHOLDER.to_string()
        }
    }
}

/// Heuristic line extraction: split into lines, keep decorated lines, strip
/// the decoration, drop short noise, cap the count. Each stage is pure and
/// source order is preserved.
fn extract_question_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| has_question_prefix(line))
        .map(strip_decoration)
        .filter(|line| line.chars().count() > MIN_QUESTION_CHARS)
        .take(FALLBACK_QUESTION_CAP)
        .collect()
}

/// A candidate line starts with a double quote, hyphen, or bullet marker.
fn has_question_prefix(line: &str) -> bool {
    line.starts_with('"') || line.starts_with('-') || line.starts_with('•')
}

/// Strips quote, hyphen, and bullet characters from both ends, then re-trims.
fn strip_decoration(line: &str) -> String {
    line.trim_matches('"')
        .trim_matches('-')
        .trim_matches('•')
        .trim()
        .to_string()
}
