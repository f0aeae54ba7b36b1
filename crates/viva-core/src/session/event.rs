//! Session transition events.

use serde::{Deserialize, Serialize};

use super::model::{CandidateId, InterviewResult};
use super::{ProfileField, Turn};

/// A service reply interpreted into a typed session transition.
///
/// The stage services translate each gateway reply into exactly one of
/// these events and hand it to [`Session::apply`](super::Session::apply),
/// which is the single place phase-ordering invariants are enforced.
/// Data a target phase requires travels inside the event, so a transition
/// into `Finished` without a result is unrepresentable rather than merely
/// rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// The service accepted the resume upload.
    ///
    /// A non-empty `missing_fields` set routes the session into
    /// `AwaitingMissingInfo`; an empty one starts the chat directly.
    ResumeAccepted {
        candidate_id: CandidateId,
        missing_fields: Vec<ProfileField>,
        turns: Vec<Turn>,
    },
    /// The service reviewed a missing-info submission.
    ///
    /// The returned set replaces the local one wholesale; it may still
    /// list fields that were just submitted.
    FieldsReviewed {
        missing_fields: Vec<ProfileField>,
        turns: Vec<Turn>,
    },
    /// An answer was recorded and the interview continues.
    AnswerRecorded { turns: Vec<Turn> },
    /// The final answer was recorded and the interview is over.
    InterviewClosed {
        turns: Vec<Turn>,
        result: InterviewResult,
    },
}

impl SessionEvent {
    /// Short name for log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            SessionEvent::ResumeAccepted { .. } => "resume_accepted",
            SessionEvent::FieldsReviewed { .. } => "fields_reviewed",
            SessionEvent::AnswerRecorded { .. } => "answer_recorded",
            SessionEvent::InterviewClosed { .. } => "interview_closed",
        }
    }
}
