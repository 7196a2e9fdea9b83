mod categories;
mod play;
mod questions;

use axum::routing::{delete, get, post};
use axum::Router;
use serde::Deserialize;

use crate::{names, AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(categories::list_categories))
        .route(
            "/categories/{category_id}/questions",
            get(questions::list_by_category),
        )
        .route(
            "/questions",
            get(questions::list_questions).post(questions::create_question),
        )
        .route("/questions/{question_id}", delete(questions::delete_question))
        .route("/questions/search", post(questions::search_questions))
        .route("/quizzes", post(play::next_quiz_question))
}

#[derive(Deserialize)]
pub(crate) struct PageQuery {
    #[serde(
        default = "default_page",
        deserialize_with = "deserialize_lenient_page"
    )]
    pub(crate) page: i64,
}

fn default_page() -> i64 {
    names::DEFAULT_PAGE
}

/// Query strings arrive as text; a malformed page number is not an error, it
/// degrades to the first page.
fn deserialize_lenient_page<'de, D: serde::Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
    struct Vis;
    impl serde::de::Visitor<'_> for Vis {
        type Value = i64;
        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            f.write_str("number or numeric string")
        }
        fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<i64, E> {
            Ok(v)
        }
        fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<i64, E> {
            Ok(v.try_into().unwrap_or(i64::MAX))
        }
        fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<i64, E> {
            Ok(v.parse().unwrap_or(names::DEFAULT_PAGE))
        }
    }
    d.deserialize_any(Vis)
}
