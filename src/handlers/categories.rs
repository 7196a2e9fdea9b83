use std::collections::BTreeMap;

use axum::extract::State;
use axum::Json;
use serde_json::json;

use crate::models::Category;
use crate::rejections::{AppError, ResultExt};
use crate::AppState;

pub(crate) async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, AppError> {
    let categories = state
        .db
        .categories()
        .await
        .reject("could not list categories")?;

    if categories.is_empty() {
        return Err(AppError::NotFound);
    }

    Ok(Json(json!({
        "success": true,
        "categories": category_map(&categories),
    })))
}

/// The `{id: type}` shape the listing endpoints expose categories in.
pub(crate) fn category_map(categories: &[Category]) -> BTreeMap<i64, String> {
    categories.iter().map(|c| (c.id, c.kind.clone())).collect()
}
