// src/services/chatbot.rs
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::generator::{TextGenerator, fallback_reply};
use super::preprocess::clean_text;
use super::responder::{Topic, detect_topic};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplySource {
    Rule,
    Model,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub reply: String,
    pub source: ReplySource,
    pub topic: Option<Topic>,
}

/// Clean the input, try the keyword rules, and fall back to the model.
pub async fn healthcare_chatbot(generator: &dyn TextGenerator, user_input: &str) -> ChatReply {
    let cleaned = clean_text(user_input);

    if let Some(topic) = detect_topic(&cleaned) {
        debug!(?topic, "rule matched");
        return ChatReply {
            reply: topic.canned_response().to_string(),
            source: ReplySource::Rule,
            topic: Some(topic),
        };
    }

    debug!(cleaned = %cleaned, "no rule matched, asking model");
    match fallback_reply(generator, &cleaned).await {
        Ok(reply) => ChatReply { reply, source: ReplySource::Model, topic: None },
        Err(reply) => ChatReply { reply, source: ReplySource::Error, topic: None },
    }
}
