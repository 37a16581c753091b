use axum::{Json, extract::State};

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    services::chatbot::healthcare_chatbot,
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let trimmed = payload.message.trim();

    if trimmed.is_empty() {
        return Err(AppError::BadRequest("Message cannot be empty".to_string()));
    }

    let reply = healthcare_chatbot(state.generator.as_ref(), trimmed).await;

    Ok(Json(ChatResponse {
        reply: reply.reply,
        source: reply.source,
        topic: reply.topic,
    }))
}
