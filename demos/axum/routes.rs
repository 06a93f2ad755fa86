use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
};

use crate::cors::AppState;

pub async fn sales(State(state): State<AppState>) -> impl IntoResponse {
    Html(format!(
        "<h1>{}</h1><p>Call this endpoint from the frontend dev server to see CORS in action.</p>",
        state.greeting
    ))
}

pub async fn record_sale() -> impl IntoResponse {
    StatusCode::CREATED
}

pub async fn customers() -> impl IntoResponse {
    Html("<ul><li>Ada</li><li>Grace</li></ul>")
}
