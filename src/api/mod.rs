use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

pub mod handlers;
pub mod types;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/ask", post(handlers::ask))
}
