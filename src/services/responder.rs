// src/services/responder.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Symptom,
    Appointment,
    Medication,
}

impl Topic {
    /// Checked in this order; the first hit wins.
    pub const PRIORITY: [Topic; 3] = [Topic::Symptom, Topic::Appointment, Topic::Medication];

    pub fn keyword(self) -> &'static str {
        match self {
            Topic::Symptom => "symptom",
            Topic::Appointment => "appointment",
            Topic::Medication => "medication",
        }
    }

    pub fn canned_response(self) -> &'static str {
        match self {
            Topic::Symptom => {
                "It seems like you're experiencing symptoms. Please consult a doctor for accurate advice."
            }
            Topic::Appointment => "Would you like me to schedule an appointment with a doctor?",
            Topic::Medication => {
                "It's important to take your prescribed medications regularly. If you have concerns, consult your doctor."
            }
        }
    }
}

pub fn detect_topic(msg: &str) -> Option<Topic> {
    let msg_lower = msg.to_lowercase();

    Topic::PRIORITY
        .into_iter()
        .find(|topic| msg_lower.contains(topic.keyword()))
}

pub fn rule_response(msg: &str) -> Option<&'static str> {
    detect_topic(msg).map(Topic::canned_response)
}
