//! Session domain model.
//!
//! This module contains the core `Session` entity: the client-side record
//! of one candidate's interview progress. A `Session` is an immutable
//! value; the only way to evolve one is [`Session::apply`], which
//! validates the transition before producing the next value. The caller's
//! value is untouched on every rejection, so "no partial commit" holds
//! structurally.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::event::SessionEvent;
use super::{Phase, ProfileField, Turn};
use crate::error::{Result, VivaError};

/// Opaque candidate identifier assigned by the service on the first
/// successful resume submission. Set exactly once, never changed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateId(String);

impl CandidateId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CandidateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Terminal evaluation artifacts produced by the service once the chat
/// phase concludes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewResult {
    pub final_score: f64,
    pub summary: String,
}

/// Client-side record of one candidate's interview progress.
///
/// Fields are private on purpose: every component reads through the
/// accessors and mutates through [`Session::apply`], the single point
/// enforcing the phase-ordering invariants. The turn log is always a full
/// replacement from the service, never a local merge; the service is the
/// source of truth for ordering and content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Assigned by the service on the first successful upload.
    candidate_id: Option<CandidateId>,
    /// Current protocol stage.
    phase: Phase,
    /// Fields the service is still requesting; empty outside
    /// `AwaitingMissingInfo`.
    missing_fields: Vec<ProfileField>,
    /// Transcript ordered by `question_no` ascending.
    turns: Vec<Turn>,
    /// Present iff `phase == Finished`.
    result: Option<InterviewResult>,
    /// Timestamp when the session was created (ISO 8601 format).
    created_at: String,
    /// Timestamp of the last applied transition (ISO 8601 format).
    updated_at: String,
}

impl Session {
    /// Creates an empty session in `AwaitingResume` with no candidate id.
    pub fn new() -> Self {
        let now = Utc::now().to_rfc3339();
        Self {
            candidate_id: None,
            phase: Phase::AwaitingResume,
            missing_fields: Vec::new(),
            turns: Vec::new(),
            result: None,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    pub fn candidate_id(&self) -> Option<&CandidateId> {
        self.candidate_id.as_ref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn missing_fields(&self) -> &[ProfileField] {
        &self.missing_fields
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn result(&self) -> Option<&InterviewResult> {
        self.result.as_ref()
    }

    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    pub fn updated_at(&self) -> &str {
        &self.updated_at
    }

    /// The question currently waiting for an answer, if any.
    pub fn open_question(&self) -> Option<&Turn> {
        self.turns.last().filter(|turn| turn.is_pending())
    }

    /// Applies a transition event, producing the next session value.
    ///
    /// Rejects with [`VivaError::State`] if the event is not valid in the
    /// current phase or would move the session backward. Validation runs
    /// before any field is replaced; on error the current value is
    /// guaranteed untouched.
    pub fn apply(&self, event: SessionEvent) -> Result<Session> {
        match event {
            SessionEvent::ResumeAccepted {
                candidate_id,
                missing_fields,
                turns,
            } => {
                let missing = dedup_fields(missing_fields);
                let target = if missing.is_empty() {
                    Phase::InChat
                } else {
                    Phase::AwaitingMissingInfo
                };
                self.guard(Phase::AwaitingResume, target, "accept a resume")?;
                if self.candidate_id.is_some() {
                    return Err(VivaError::state("candidate id is already assigned"));
                }

                let mut next = self.touched();
                next.candidate_id = Some(candidate_id);
                next.phase = target;
                next.missing_fields = missing;
                if target == Phase::InChat {
                    next.turns = turns;
                }
                Ok(next)
            }
            SessionEvent::FieldsReviewed {
                missing_fields,
                turns,
            } => {
                let missing = dedup_fields(missing_fields);
                let target = if missing.is_empty() {
                    Phase::InChat
                } else {
                    Phase::AwaitingMissingInfo
                };
                self.guard(Phase::AwaitingMissingInfo, target, "review missing info")?;

                let mut next = self.touched();
                next.phase = target;
                next.missing_fields = missing;
                if target == Phase::InChat {
                    next.turns = turns;
                }
                Ok(next)
            }
            SessionEvent::AnswerRecorded { turns } => {
                self.guard(Phase::InChat, Phase::InChat, "record an answer")?;

                let mut next = self.touched();
                next.turns = turns;
                Ok(next)
            }
            SessionEvent::InterviewClosed { turns, result } => {
                self.guard(Phase::InChat, Phase::Finished, "close the interview")?;

                let mut next = self.touched();
                next.phase = Phase::Finished;
                next.turns = turns;
                next.result = Some(result);
                next.missing_fields = Vec::new();
                Ok(next)
            }
        }
    }

    /// Checks that the session is in `source` and that `source → target`
    /// exists in the phase graph. The second check is defensive: callers
    /// are expected to disable triggers for impossible transitions, but
    /// the transition function rejects them regardless.
    fn guard(&self, source: Phase, target: Phase, action: &str) -> Result<()> {
        if self.phase != source {
            return Err(VivaError::state(format!(
                "cannot {action} while the session is {}",
                self.phase
            )));
        }
        if !source.allows(target) {
            return Err(VivaError::state(format!(
                "transition {source} -> {target} is not permitted"
            )));
        }
        Ok(())
    }

    /// Clone with a refreshed `updated_at`.
    fn touched(&self) -> Session {
        let mut next = self.clone();
        next.updated_at = Utc::now().to_rfc3339();
        next
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Drops duplicate fields while preserving the service's order.
fn dedup_fields(fields: Vec<ProfileField>) -> Vec<ProfileField> {
    let mut seen = Vec::with_capacity(fields.len());
    for field in fields {
        if !seen.contains(&field) {
            seen.push(field);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turn(question_no: u32, answer: Option<&str>) -> Turn {
        Turn {
            question_no,
            difficulty: "easy".to_string(),
            question: format!("Question {question_no}"),
            answer: answer.map(str::to_string),
            score: None,
            time_limit: None,
        }
    }

    fn uploaded_with_missing(fields: Vec<ProfileField>) -> Session {
        Session::new()
            .apply(SessionEvent::ResumeAccepted {
                candidate_id: CandidateId::new("cand-1"),
                missing_fields: fields,
                turns: Vec::new(),
            })
            .unwrap()
    }

    fn in_chat() -> Session {
        Session::new()
            .apply(SessionEvent::ResumeAccepted {
                candidate_id: CandidateId::new("cand-1"),
                missing_fields: Vec::new(),
                turns: vec![turn(1, None)],
            })
            .unwrap()
    }

    #[test]
    fn new_session_is_empty() {
        let session = Session::new();
        assert_eq!(session.phase(), Phase::AwaitingResume);
        assert!(session.candidate_id().is_none());
        assert!(session.turns().is_empty());
        assert!(session.result().is_none());
    }

    #[test]
    fn upload_with_missing_fields_enters_awaiting_missing_info() {
        let session = uploaded_with_missing(vec![ProfileField::Phone]);
        assert_eq!(session.phase(), Phase::AwaitingMissingInfo);
        assert_eq!(session.missing_fields(), &[ProfileField::Phone]);
        assert_eq!(session.candidate_id().unwrap().as_str(), "cand-1");
        assert!(session.turns().is_empty());
    }

    #[test]
    fn upload_without_missing_fields_goes_straight_to_chat() {
        let session = in_chat();
        assert_eq!(session.phase(), Phase::InChat);
        assert!(session.missing_fields().is_empty());
        assert_eq!(session.turns().len(), 1);
        assert!(session.open_question().is_some());
    }

    #[test]
    fn second_upload_is_rejected() {
        let session = in_chat();
        let err = session
            .apply(SessionEvent::ResumeAccepted {
                candidate_id: CandidateId::new("cand-2"),
                missing_fields: Vec::new(),
                turns: Vec::new(),
            })
            .unwrap_err();
        assert!(err.is_state());
        // the rejected call left the value alone
        assert_eq!(session.candidate_id().unwrap().as_str(), "cand-1");
    }

    #[test]
    fn missing_info_self_loop_replaces_the_set() {
        let session = uploaded_with_missing(vec![ProfileField::Name, ProfileField::Phone]);
        let session = session
            .apply(SessionEvent::FieldsReviewed {
                missing_fields: vec![ProfileField::Phone],
                turns: Vec::new(),
            })
            .unwrap();
        assert_eq!(session.phase(), Phase::AwaitingMissingInfo);
        assert_eq!(session.missing_fields(), &[ProfileField::Phone]);
    }

    #[test]
    fn resolving_all_fields_enters_chat_with_seeded_turns() {
        let session = uploaded_with_missing(vec![ProfileField::Phone]);
        let session = session
            .apply(SessionEvent::FieldsReviewed {
                missing_fields: Vec::new(),
                turns: vec![turn(1, None)],
            })
            .unwrap();
        assert_eq!(session.phase(), Phase::InChat);
        assert!(session.missing_fields().is_empty());
        assert_eq!(session.open_question().unwrap().question_no, 1);
    }

    #[test]
    fn fields_reviewed_outside_missing_info_is_rejected() {
        let err = in_chat()
            .apply(SessionEvent::FieldsReviewed {
                missing_fields: Vec::new(),
                turns: Vec::new(),
            })
            .unwrap_err();
        assert!(err.is_state());
    }

    #[test]
    fn answer_recorded_replaces_the_whole_transcript() {
        let session = in_chat();
        let replacement = vec![turn(1, Some("done")), turn(2, None)];
        let session = session
            .apply(SessionEvent::AnswerRecorded {
                turns: replacement.clone(),
            })
            .unwrap();
        assert_eq!(session.phase(), Phase::InChat);
        assert_eq!(session.turns(), replacement.as_slice());
    }

    #[test]
    fn interview_close_sets_result_and_terminal_phase() {
        let session = in_chat();
        let session = session
            .apply(SessionEvent::InterviewClosed {
                turns: vec![turn(1, Some("done"))],
                result: InterviewResult {
                    final_score: 8.5,
                    summary: "Strong candidate".to_string(),
                },
            })
            .unwrap();
        assert_eq!(session.phase(), Phase::Finished);
        let result = session.result().unwrap();
        assert_eq!(result.final_score, 8.5);
        assert_eq!(result.summary, "Strong candidate");
        assert!(session.open_question().is_none());
    }

    #[test]
    fn nothing_leaves_finished() {
        let finished = in_chat()
            .apply(SessionEvent::InterviewClosed {
                turns: vec![turn(1, Some("done"))],
                result: InterviewResult {
                    final_score: 5.0,
                    summary: "ok".to_string(),
                },
            })
            .unwrap();

        let events = [
            SessionEvent::AnswerRecorded { turns: Vec::new() },
            SessionEvent::FieldsReviewed {
                missing_fields: Vec::new(),
                turns: Vec::new(),
            },
            SessionEvent::ResumeAccepted {
                candidate_id: CandidateId::new("cand-9"),
                missing_fields: Vec::new(),
                turns: Vec::new(),
            },
            SessionEvent::InterviewClosed {
                turns: Vec::new(),
                result: InterviewResult {
                    final_score: 1.0,
                    summary: "again".to_string(),
                },
            },
        ];

        for event in events {
            let err = finished.apply(event).unwrap_err();
            assert!(err.is_state());
        }
        // result is immutable once set
        assert_eq!(finished.result().unwrap().final_score, 5.0);
    }

    #[test]
    fn duplicate_missing_fields_are_collapsed() {
        let session = uploaded_with_missing(vec![
            ProfileField::Phone,
            ProfileField::Phone,
            ProfileField::Email,
        ]);
        assert_eq!(
            session.missing_fields(),
            &[ProfileField::Phone, ProfileField::Email]
        );
    }
}
