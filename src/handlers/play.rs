use std::collections::HashSet;

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::play::{next_question, QuizScope};
use crate::rejections::{AppError, ResultExt};
use crate::AppState;

#[derive(Deserialize)]
pub(crate) struct QuizBody {
    #[serde(default)]
    previous_questions: Vec<i64>,
    #[serde(default)]
    quiz_category: Option<QuizCategory>,
}

#[derive(Deserialize)]
struct QuizCategory {
    id: i64,
}

pub(crate) async fn next_quiz_question(
    State(state): State<AppState>,
    Json(body): Json<QuizBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    let scope = QuizScope::from_category_id(body.quiz_category.map(|c| c.id));
    let asked: HashSet<i64> = body.previous_questions.iter().copied().collect();

    // Re-read the catalog on every call so questions deleted mid-session can
    // no longer be served.
    let catalog = state
        .db
        .questions()
        .await
        .reject("could not load question catalog")?;

    let mut rng = rand::thread_rng();
    let question = next_question(scope, &asked, &catalog, &mut rng);

    if question.is_none() {
        tracing::debug!("quiz scope exhausted after {} questions", asked.len());
    }

    Ok(Json(json!({ "success": true, "question": question })))
}
