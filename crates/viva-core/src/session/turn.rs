//! Turn types.
//!
//! A turn is one question/answer/score unit within the chat phase. The
//! turn log is always received whole from the service and replaces the
//! local one; turns are never edited in place on the client.

use serde::{Deserialize, Serialize};

/// A single question/answer exchange in an interview transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    /// Position in the interview, starting at 1, strictly increasing.
    pub question_no: u32,
    /// Service-defined difficulty label (e.g. "easy", "hard").
    pub difficulty: String,
    /// The question text.
    pub question: String,
    /// The candidate's answer. `None` while the question is open.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    /// The score the service assigned. `None` until scored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    /// Seconds the service allots for this question, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_limit: Option<u32>,
}

impl Turn {
    /// Check if this turn is still waiting for an answer.
    pub fn is_pending(&self) -> bool {
        self.answer.is_none()
    }
}
