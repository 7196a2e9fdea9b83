pub mod db;
pub mod handlers;
pub mod models;
pub mod names;
pub mod paging;
pub mod play;
pub mod rejections;
pub mod search;

use axum::{middleware, Router};

#[derive(Clone)]
pub struct AppState {
    pub db: db::Db,
}

pub fn router(state: AppState) -> Router {
    handlers::routes()
        .fallback(rejections::not_found)
        .method_not_allowed_fallback(rejections::method_not_allowed)
        .layer(middleware::from_fn(cors_headers))
        .with_state(state)
}

/// Answers preflight requests directly and stamps the CORS headers the
/// browser frontend expects onto every response.
async fn cors_headers(
    req: axum::http::Request<axum::body::Body>,
    next: middleware::Next,
) -> axum::response::Response {
    use axum::http::{HeaderValue, Method, StatusCode};
    use axum::response::IntoResponse;

    let mut resp = if req.method() == Method::OPTIONS {
        StatusCode::NO_CONTENT.into_response()
    } else {
        next.run(req).await
    };

    let headers = resp.headers_mut();
    headers.insert(
        "Access-Control-Allow-Origin",
        HeaderValue::from_static("*"),
    );
    headers.insert(
        "Access-Control-Allow-Headers",
        HeaderValue::from_static("Content-Type, Authorization"),
    );
    headers.insert(
        "Access-Control-Allow-Methods",
        HeaderValue::from_static("GET, POST, PATCH, DELETE, OPTIONS"),
    );

    resp
}
