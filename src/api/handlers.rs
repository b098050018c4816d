use axum::{extract::State, http::StatusCode, Json};
use tracing::{error, info};

use crate::api::types::{AnswerResponse, ErrorDetail, HealthResponse, QuestionRequest, RootResponse};
use crate::{chatbot, AppState, SERVICE_NAME};

/// Questions longer than this are rejected before any provider call.
pub const MAX_QUESTION_CHARS: usize = 500;

pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "BMSPA FAQ Chatbot is running",
        status: "healthy",
    })
}

/// Probes the provider with a trivial generation call. Unlike /ask, provider
/// failures here are reported, not masked. Always responds 200.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    match state.generator.generate("Test").await {
        Ok(_) => Json(HealthResponse {
            status: "healthy",
            gemini_status: "connected",
            service: SERVICE_NAME,
            error: None,
        }),
        Err(err) => {
            error!("Health check failed: {err}");
            Json(HealthResponse {
                status: "unhealthy",
                gemini_status: "disconnected",
                service: SERVICE_NAME,
                error: Some(err.to_string()),
            })
        }
    }
}

pub async fn ask(
    State(state): State<AppState>,
    Json(payload): Json<QuestionRequest>,
) -> Result<Json<AnswerResponse>, (StatusCode, Json<ErrorDetail>)> {
    let question = payload.question.trim();
    if question.is_empty() {
        return Err(bad_request("La pregunta no puede estar vacía"));
    }
    if payload.question.chars().count() > MAX_QUESTION_CHARS {
        return Err(bad_request(
            "La pregunta no puede exceder los 500 caracteres",
        ));
    }

    info!("Processing question: {question}");

    let answer = chatbot::answer_question(state.generator.as_ref(), question).await;

    info!("Generated answer: {answer}");

    Ok(Json(AnswerResponse { answer }))
}

fn bad_request(detail: &str) -> (StatusCode, Json<ErrorDetail>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorDetail {
            detail: detail.to_string(),
        }),
    )
}
