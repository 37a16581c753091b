use async_trait::async_trait;
use healthcare_chatbot::services::chatbot::{ReplySource, healthcare_chatbot};
use healthcare_chatbot::services::generator::{
    GeneratedText, GenerationError, GenerationParams, TextGenerator, fallback_reply,
};
use healthcare_chatbot::services::responder::Topic;
use std::sync::Mutex;

/// Echoes the prompt back and records every call.
#[derive(Default)]
struct RecordingGenerator {
    calls: Mutex<Vec<(String, GenerationParams)>>,
}

#[async_trait]
impl TextGenerator for RecordingGenerator {
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<Vec<GeneratedText>, GenerationError> {
        self.calls.lock().unwrap().push((prompt.to_string(), *params));
        Ok(vec![
            GeneratedText { generated_text: format!("{} is common", prompt) },
            GeneratedText { generated_text: "second candidate".to_string() },
        ])
    }
}

struct FailingGenerator;

#[async_trait]
impl TextGenerator for FailingGenerator {
    async fn generate(
        &self,
        _prompt: &str,
        _params: &GenerationParams,
    ) -> Result<Vec<GeneratedText>, GenerationError> {
        Err(GenerationError::Status {
            status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
            body: "model loading".to_string(),
        })
    }
}

struct SilentGenerator;

#[async_trait]
impl TextGenerator for SilentGenerator {
    async fn generate(
        &self,
        _prompt: &str,
        _params: &GenerationParams,
    ) -> Result<Vec<GeneratedText>, GenerationError> {
        Ok(vec![])
    }
}

#[tokio::test]
async fn test_symptom_example() {
    let generator = RecordingGenerator::default();
    let reply = healthcare_chatbot(&generator, "I have a symptom of headache").await;

    assert_eq!(
        reply.reply,
        "It seems like you're experiencing symptoms. Please consult a doctor for accurate advice."
    );
    assert_eq!(reply.source, ReplySource::Rule);
    assert_eq!(reply.topic, Some(Topic::Symptom));
    assert!(generator.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_keyword_is_case_insensitive() {
    let generator = RecordingGenerator::default();
    let reply = healthcare_chatbot(&generator, "My SYMPTOMS are getting worse").await;
    assert_eq!(reply.topic, Some(Topic::Symptom));
}

#[tokio::test]
async fn test_symptom_beats_appointment() {
    let generator = RecordingGenerator::default();
    let reply =
        healthcare_chatbot(&generator, "Can I get an appointment for this symptom?").await;
    assert_eq!(reply.reply, Topic::Symptom.canned_response());
}

#[tokio::test]
async fn test_appointment_and_medication_rules() {
    let generator = RecordingGenerator::default();

    let reply = healthcare_chatbot(&generator, "I need an appointment").await;
    assert_eq!(
        reply.reply,
        "Would you like me to schedule an appointment with a doctor?"
    );

    let reply = healthcare_chatbot(&generator, "Should I keep taking my medication?").await;
    assert_eq!(
        reply.reply,
        "It's important to take your prescribed medications regularly. If you have concerns, consult your doctor."
    );
    assert!(generator.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_no_match_uses_model_with_cleaned_text() {
    let generator = RecordingGenerator::default();
    let reply = healthcare_chatbot(&generator, "What is the flu?").await;

    assert_eq!(reply.source, ReplySource::Model);
    assert_eq!(reply.topic, None);
    assert_eq!(reply.reply, "flu ? is common");

    let calls = generator.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "flu ?");
    assert_eq!(calls[0].1.max_length, 50);
    assert_eq!(calls[0].1.num_return_sequences, 1);
}

#[tokio::test]
async fn test_model_failure_becomes_apology() {
    let reply = healthcare_chatbot(&FailingGenerator, "Tell me about sleep").await;

    assert_eq!(reply.source, ReplySource::Error);
    assert!(reply.reply.starts_with("Sorry, I encountered an error:"));
    assert!(reply.reply.contains("model loading"));
}

#[tokio::test]
async fn test_empty_model_output_becomes_apology() {
    let err = fallback_reply(&SilentGenerator, "anything").await.unwrap_err();
    assert_eq!(err, "Sorry, I encountered an error: model returned no output");
}
