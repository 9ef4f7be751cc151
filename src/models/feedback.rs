// src/models/feedback.rs

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single student-submitted evaluation payload.
///
/// Schema-free: whatever JSON object the client sends is stored and
/// returned verbatim. Commonly carries `rating`, `comments`,
/// `teachingQuality`, `courseContent` and `difficulty`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeedbackRecord(pub Map<String, Value>);

impl FeedbackRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field insertion.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Numeric `rating` field, if present.
    pub fn rating(&self) -> Option<f64> {
        self.get("rating").and_then(Value::as_f64)
    }
}

impl From<Map<String, Value>> for FeedbackRecord {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Persisted layout of the file-backed store: `{ "feedback": [ ... ] }`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct FeedbackDocument {
    pub feedback: Vec<FeedbackRecord>,
}

/// Acknowledgement returned by `POST /api/feedback`.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SubmitAck {
    pub success: bool,
}
