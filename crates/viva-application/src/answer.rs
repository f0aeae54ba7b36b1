//! Answer submission stage.

use std::sync::Arc;

use viva_core::{
    AnswerOutcome, InterviewGateway, InterviewResult, Phase, Result, Session, SessionEvent,
    VivaError,
};

/// Submits one answer per turn and detects session completion.
///
/// The local transcript is always replaced with the service's, never
/// appended to or merged, so there is no race between an optimistic
/// update and the authoritative reply.
pub struct AnswerLoop {
    gateway: Arc<dyn InterviewGateway>,
}

impl AnswerLoop {
    pub fn new(gateway: Arc<dyn InterviewGateway>) -> Self {
        Self { gateway }
    }

    /// Submits an answer for the currently open question.
    ///
    /// Preconditions are checked before any request goes out: the session
    /// must be in chat (a finished interview rejects every further call),
    /// the trimmed answer must be non-empty, and the last turn must still
    /// be pending: one answer per open question.
    pub async fn submit(&self, session: &Session, answer: &str) -> Result<Session> {
        if session.phase() != Phase::InChat {
            return Err(VivaError::state(format!(
                "cannot submit an answer while the session is {}",
                session.phase()
            )));
        }
        let answer = answer.trim();
        if answer.is_empty() {
            return Err(VivaError::validation("answer must not be empty"));
        }
        if session.open_question().is_none() {
            return Err(VivaError::state("no question is awaiting an answer"));
        }
        let candidate_id = session
            .candidate_id()
            .ok_or_else(|| VivaError::state("session has no candidate id yet"))?;

        let reply = self.gateway.submit_answer(candidate_id, answer).await?;

        let event = match reply.outcome {
            AnswerOutcome::Continue => {
                tracing::info!(candidate_id = %candidate_id, turns = reply.turns.len(), "answer recorded");
                SessionEvent::AnswerRecorded { turns: reply.turns }
            }
            AnswerOutcome::Finished {
                final_score,
                summary,
            } => {
                tracing::info!(candidate_id = %candidate_id, final_score, "interview finished");
                SessionEvent::InterviewClosed {
                    turns: reply.turns,
                    result: InterviewResult {
                        final_score,
                        summary,
                    },
                }
            }
        };
        session.apply(event)
    }
}
