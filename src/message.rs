// src/message.rs
use serde::{Deserialize, Serialize};

use crate::services::chatbot::ReplySource;
use crate::services::responder::Topic;

#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
    pub source: ReplySource,
    pub topic: Option<Topic>,
}

/// Body of the page form.
#[derive(Deserialize)]
pub struct QueryForm {
    #[serde(default)]
    pub user_input: String,
}
