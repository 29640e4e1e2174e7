use crate::AppState;
use crate::error::AppError;
use axum::{Json, extract::State, response::Html};
use serde_json::{Value, json};

/// GET / — home page rendered from the `home.html` template.
pub async fn home_view(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let html = state.templates.render_home("santhan")?;
    Ok(Html(html))
}

/// POST / — fixed JSON greeting.
pub async fn home_detail_view() -> Json<Value> {
    Json(json!({ "message": "Hello World" }))
}
