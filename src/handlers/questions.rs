use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::models::NewQuestion;
use crate::rejections::{AppError, ResultExt};
use crate::{names, paging, search, AppState};

use super::categories::category_map;
use super::PageQuery;

pub(crate) async fn list_questions(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let selection = state
        .db
        .questions()
        .await
        .reject("could not list questions")?;

    let current = paging::paginate(&selection, query.page, names::QUESTIONS_PER_PAGE);
    if current.is_empty() && !selection.is_empty() {
        return Err(AppError::NotFound);
    }

    let categories = state
        .db
        .categories()
        .await
        .reject("could not list categories")?;

    Ok(Json(json!({
        "success": true,
        "questions": current,
        "total_questions": selection.len(),
        "categories": category_map(&categories),
        "current_category": null,
    })))
}

pub(crate) async fn create_question(
    State(state): State<AppState>,
    Json(body): Json<NewQuestion>,
) -> Result<Json<serde_json::Value>, AppError> {
    if body.question.trim().is_empty() || body.answer.trim().is_empty() {
        return Err(AppError::Unprocessable("question and answer are required"));
    }

    let known = state
        .db
        .category_exists(body.category)
        .await
        .reject("could not check category")?;
    if !known {
        return Err(AppError::Unprocessable("unknown category"));
    }

    let created = state
        .db
        .insert_question(&body)
        .await
        .reject_unprocessable("could not insert question")?;

    Ok(Json(json!({ "success": true, "created": created })))
}

pub(crate) async fn delete_question(
    State(state): State<AppState>,
    Path(question_id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    let deleted = state
        .db
        .delete_question(question_id)
        .await
        .reject("could not delete question")?;

    if !deleted {
        return Err(AppError::Unprocessable("no such question"));
    }

    Ok(Json(json!({ "success": true, "deleted": question_id })))
}

#[derive(Deserialize)]
pub(crate) struct SearchBody {
    #[serde(default, rename = "searchTerm")]
    search_term: Option<String>,
}

pub(crate) async fn search_questions(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
    Json(body): Json<SearchBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    let term = body.search_term.as_deref().unwrap_or_default();

    let selection = state
        .db
        .questions()
        .await
        .reject("could not list questions")?;

    let matches =
        search::search(&selection, term).reject_input("search term must not be empty")?;
    let current = paging::paginate(&matches, query.page, names::QUESTIONS_PER_PAGE);

    Ok(Json(json!({
        "success": true,
        "questions": current,
        "total_questions": matches.len(),
        "current_category": null,
    })))
}

pub(crate) async fn list_by_category(
    State(state): State<AppState>,
    Path(category_id): Path<i64>,
    Query(query): Query<PageQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let known = state
        .db
        .category_exists(category_id)
        .await
        .reject("could not check category")?;
    if !known {
        return Err(AppError::NotFound);
    }

    let selection = state
        .db
        .questions_in_category(category_id)
        .await
        .reject("could not list questions for category")?;

    let current = paging::paginate(&selection, query.page, names::QUESTIONS_PER_PAGE);
    if current.is_empty() && !selection.is_empty() {
        return Err(AppError::NotFound);
    }

    Ok(Json(json!({
        "success": true,
        "questions": current,
        "total_questions": selection.len(),
        "current_category": category_id,
    })))
}
