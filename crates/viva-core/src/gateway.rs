//! Interview gateway trait.
//!
//! Defines the seam between the client and the remote interview service.
//! Implementations live elsewhere (HTTP in `viva-interaction`, in-memory
//! mocks in tests); everything above this trait works against
//! `Arc<dyn InterviewGateway>`.

use async_trait::async_trait;

use crate::candidate::{CandidateOverview, CandidateReport};
use crate::error::Result;
use crate::resume::ResumeFile;
use crate::session::{CandidateId, ProfileField, Turn};

/// Reply to a resume upload or a missing-info submission.
///
/// Both operations share a response shape: the candidate's identity, the
/// set of profile fields the service still wants, and (once nothing is
/// missing) the opening transcript.
#[derive(Debug, Clone, PartialEq)]
pub struct IntakeReply {
    pub candidate_id: CandidateId,
    pub missing_fields: Vec<ProfileField>,
    pub turns: Vec<Turn>,
}

/// Reply to an answer submission.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerReply {
    /// The full transcript as of this submission. Always replaces the
    /// local log.
    pub turns: Vec<Turn>,
    pub outcome: AnswerOutcome,
}

/// Whether the interview continues after an answer.
///
/// A `finished` flag plus conditionally-present score fields on the wire
/// becomes one exhaustive type here, so no caller can observe a finished
/// interview without its result.
#[derive(Debug, Clone, PartialEq)]
pub enum AnswerOutcome {
    /// More questions remain; the transcript ends in a pending turn.
    Continue,
    /// The interview is over.
    Finished { final_score: f64, summary: String },
}

/// An abstract client for the remote interview service.
///
/// A reply that the service itself marks as failed (non-empty `error`
/// payload field) or that is structurally invalid must surface as
/// [`VivaError::Server`](crate::VivaError::Server) from the
/// implementation, never as a reply value.
///
/// The mutating operations (`upload_resume`, `submit_missing_info`,
/// `submit_answer`) carry no idempotency key; serializing them per
/// session is the caller's responsibility.
#[async_trait]
pub trait InterviewGateway: Send + Sync {
    /// Uploads a resume artifact, opening a session with the service.
    async fn upload_resume(&self, file: &ResumeFile) -> Result<IntakeReply>;

    /// Submits values for the fields the service requested.
    ///
    /// Values are forwarded as given; the service alone decides what
    /// still counts as missing.
    async fn submit_missing_info(
        &self,
        candidate_id: &CandidateId,
        values: &[(ProfileField, String)],
    ) -> Result<IntakeReply>;

    /// Submits one answer for the currently open question.
    async fn submit_answer(&self, candidate_id: &CandidateId, answer: &str)
        -> Result<AnswerReply>;

    /// Fetches the read-only report for one candidate.
    async fn fetch_candidate(&self, candidate_id: &CandidateId) -> Result<CandidateReport>;

    /// Fetches the read-only overview of all candidates.
    async fn list_candidates(&self) -> Result<Vec<CandidateOverview>>;
}
