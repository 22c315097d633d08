use axum::{http::header, response::IntoResponse};

const FIELD_TOGGLE_SCRIPT: &str = include_str!("../../public/javascripts/scripts.js");

/// GET /javascripts/scripts.js
pub async fn field_toggle_script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        FIELD_TOGGLE_SCRIPT,
    )
}
