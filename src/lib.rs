pub mod config;
pub mod error;
pub mod handlers;
pub mod services;

use crate::config::Settings;
use crate::services::storage::UploadStore;
use crate::services::templates::TemplateEngine;
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub store: Arc<UploadStore>,
    pub templates: Arc<TemplateEngine>,
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            get(handlers::home::home_view).post(handlers::home::home_detail_view),
        )
        .route("/img-echo/", post(handlers::echo::image_echo))
        .with_state(state)
}
