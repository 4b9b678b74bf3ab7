//! Advice orchestration: fans out the two generation calls concurrently and
//! joins the parsed results into a single `CoachingAdvice`.

use tracing::info;

use crate::coach::models::{CareerProfile, CoachingAdvice};
use crate::coach::parser::{parse_learning_path, parse_questions};
use crate::coach::prompts::{build_learning_path_prompt, build_question_prompt};
use crate::llm_client::TextGenerator;

/// Runs both generation pipelines concurrently and assembles the result.
///
/// Infallible by construction: each branch absorbs its own failures inside
/// the parser, so the join always receives two resolved, non-empty values.
/// The branches share no state; one failing never affects the other.
pub async fn generate_advice(llm: &dyn TextGenerator, profile: &CareerProfile) -> CoachingAdvice {
    let question_prompt = build_question_prompt(profile);
    let path_prompt = build_learning_path_prompt(profile);

    let (questions_outcome, path_outcome) =
        tokio::join!(llm.generate(&question_prompt), llm.generate(&path_prompt));

    let interview_questions = parse_questions(questions_outcome);
    let learning_path = parse_learning_path(path_outcome);

    info!(
        "coaching advice assembled: {} questions, {} path chars",
        interview_questions.len(),
        learning_path.chars().count()
    );

    CoachingAdvice {
        interview_questions,
        learning_path,
    }
}
