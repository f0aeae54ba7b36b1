//! Wire types for the interview service.
//!
//! The service's JSON shapes are deserialized into the DTOs here and then
//! converted into domain types explicitly. The conversions carry the
//! structural validation: a payload with a non-empty `error` field is a
//! failed operation regardless of transport status, unknown profile
//! fields are rejected instead of carried untyped, and a `finished` reply
//! must bring its score and summary.

use serde::Deserialize;

use viva_core::candidate::{CandidateOverview, CandidateReport, ResumeProfile};
use viva_core::{
    AnswerOutcome, AnswerReply, CandidateId, IntakeReply, ProfileField, Result, Turn, VivaError,
};

/// Transcript entry as the service sends it.
///
/// The backend is lax about these: `question_no` and `difficulty` are
/// occasionally absent, so conversion fills them from position and a
/// neutral label. A missing `question`, though, makes the entry useless
/// and fails the whole payload.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageDto {
    #[serde(default)]
    pub question_no: Option<u32>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub time_limit: Option<u32>,
}

impl MessageDto {
    fn into_turn(self, index: usize) -> Result<Turn> {
        let question = self.question.filter(|q| !q.trim().is_empty()).ok_or_else(|| {
            VivaError::server(format!(
                "transcript entry {} is missing its question",
                index + 1
            ))
        })?;
        Ok(Turn {
            question_no: self.question_no.unwrap_or((index + 1) as u32),
            difficulty: self.difficulty.unwrap_or_else(|| "unknown".to_string()),
            question,
            answer: self.answer,
            score: self.score,
            time_limit: self.time_limit,
        })
    }
}

/// Converts a wire transcript, enforcing strictly increasing question
/// numbers.
fn convert_messages(messages: Vec<MessageDto>) -> Result<Vec<Turn>> {
    let mut turns = Vec::with_capacity(messages.len());
    let mut last_no = 0u32;
    for (index, message) in messages.into_iter().enumerate() {
        let turn = message.into_turn(index)?;
        if turn.question_no <= last_no {
            return Err(VivaError::server(format!(
                "transcript is out of order at question {}",
                turn.question_no
            )));
        }
        last_no = turn.question_no;
        turns.push(turn);
    }
    Ok(turns)
}

fn parse_fields(fields: Vec<String>) -> Result<Vec<ProfileField>> {
    fields
        .into_iter()
        .map(|name| {
            ProfileField::parse(&name).ok_or_else(|| {
                VivaError::server(format!("service requested unknown profile field '{name}'"))
            })
        })
        .collect()
}

/// A non-empty `error` field marks the operation failed even on a 2xx
/// transport status.
fn check_error(error: Option<String>) -> Result<()> {
    match error {
        Some(message) if !message.trim().is_empty() => Err(VivaError::Server(message)),
        _ => Ok(()),
    }
}

/// Response shape shared by `/upload_resume` and `/submit_missing_info`.
#[derive(Debug, Clone, Deserialize)]
pub struct IntakeResponse {
    #[serde(default)]
    pub candidate_id: Option<String>,
    #[serde(default)]
    pub missing_fields: Vec<String>,
    #[serde(default)]
    pub messages: Vec<MessageDto>,
    #[serde(default)]
    pub first_question: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl IntakeResponse {
    pub fn into_reply(self) -> Result<IntakeReply> {
        check_error(self.error)?;
        let candidate_id = self
            .candidate_id
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| VivaError::server("intake reply is missing candidate_id"))?;
        let missing_fields = parse_fields(self.missing_fields)?;
        let mut turns = convert_messages(self.messages)?;

        // The backend sends the opening question both inside `messages`
        // and as a bare `first_question`; the list wins, the scalar is
        // only a fallback for replies that omit it.
        if turns.is_empty() && missing_fields.is_empty() {
            if let Some(question) = self.first_question.filter(|q| !q.trim().is_empty()) {
                turns.push(Turn {
                    question_no: 1,
                    difficulty: "unknown".to_string(),
                    question,
                    answer: None,
                    score: None,
                    time_limit: None,
                });
            }
        }

        Ok(IntakeReply {
            candidate_id: CandidateId::new(candidate_id),
            missing_fields,
            turns,
        })
    }
}

/// Response shape of `/chat`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub messages: Vec<MessageDto>,
    #[serde(default)]
    pub finished: bool,
    #[serde(default)]
    pub final_score: Option<f64>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ChatResponse {
    pub fn into_reply(self) -> Result<AnswerReply> {
        check_error(self.error)?;
        let turns = convert_messages(self.messages)?;
        let outcome = if self.finished {
            let final_score = self
                .final_score
                .ok_or_else(|| VivaError::server("finished reply is missing final_score"))?;
            let summary = self
                .summary
                .ok_or_else(|| VivaError::server("finished reply is missing summary"))?;
            AnswerOutcome::Finished {
                final_score,
                summary,
            }
        } else {
            AnswerOutcome::Continue
        };
        Ok(AnswerReply { turns, outcome })
    }
}

/// Response shape of `/summary/{candidate_id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct SummaryResponse {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub finished: bool,
    #[serde(default)]
    pub messages: Vec<MessageDto>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl SummaryResponse {
    pub fn into_report(self) -> Result<CandidateReport> {
        check_error(self.error)?;
        let turns = convert_messages(self.messages)?;
        Ok(CandidateReport {
            name: self.name,
            email: self.email,
            phone: self.phone,
            score: self.score,
            finished: self.finished,
            turns,
            summary: self.summary,
        })
    }
}

/// Embedded resume record in the all-candidates overview.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResumeDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// One entry of `/candidates`.
#[derive(Debug, Clone, Deserialize)]
pub struct CandidateDto {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub resume: Option<ResumeDto>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub finished: bool,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub messages: Vec<MessageDto>,
}

impl CandidateDto {
    pub fn into_overview(self) -> Result<CandidateOverview> {
        let id = self
            .id
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| VivaError::server("candidate entry is missing its id"))?;
        let resume = self.resume.unwrap_or_default();
        let turns = convert_messages(self.messages)?;
        Ok(CandidateOverview {
            id: CandidateId::new(id),
            resume: ResumeProfile {
                name: resume.name,
                email: resume.email,
                phone: resume.phone,
            },
            score: self.score,
            finished: self.finished,
            summary: self.summary,
            turns,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intake_reply_with_missing_fields() {
        let response: IntakeResponse = serde_json::from_str(
            r#"{
                "candidate_id": "cand-1",
                "missing_fields": ["phone", "email"],
                "messages": []
            }"#,
        )
        .unwrap();
        let reply = response.into_reply().unwrap();
        assert_eq!(reply.candidate_id.as_str(), "cand-1");
        assert_eq!(
            reply.missing_fields,
            vec![ProfileField::Phone, ProfileField::Email]
        );
        assert!(reply.turns.is_empty());
    }

    #[test]
    fn intake_reply_seeds_turns_from_messages() {
        let response: IntakeResponse = serde_json::from_str(
            r#"{
                "candidate_id": "cand-1",
                "missing_fields": [],
                "messages": [
                    {"question_no": 1, "difficulty": "easy",
                     "question": "Tell me about yourself", "time_limit": 120}
                ],
                "first_question": "Tell me about yourself"
            }"#,
        )
        .unwrap();
        let reply = response.into_reply().unwrap();
        assert_eq!(reply.turns.len(), 1);
        let turn = &reply.turns[0];
        assert_eq!(turn.question_no, 1);
        assert_eq!(turn.question, "Tell me about yourself");
        assert_eq!(turn.time_limit, Some(120));
        assert!(turn.is_pending());
    }

    #[test]
    fn intake_reply_falls_back_to_first_question() {
        let response: IntakeResponse = serde_json::from_str(
            r#"{
                "candidate_id": "cand-1",
                "missing_fields": [],
                "first_question": "Tell me about yourself"
            }"#,
        )
        .unwrap();
        let reply = response.into_reply().unwrap();
        assert_eq!(reply.turns.len(), 1);
        assert_eq!(reply.turns[0].question, "Tell me about yourself");
    }

    #[test]
    fn intake_reply_requires_candidate_id() {
        let response: IntakeResponse =
            serde_json::from_str(r#"{"missing_fields": ["phone"]}"#).unwrap();
        let err = response.into_reply().unwrap_err();
        assert!(err.is_server());
    }

    #[test]
    fn unknown_profile_field_is_a_server_error() {
        let response: IntakeResponse = serde_json::from_str(
            r#"{"candidate_id": "cand-1", "missing_fields": ["address"]}"#,
        )
        .unwrap();
        let err = response.into_reply().unwrap_err();
        assert!(err.is_server());
        assert!(err.to_string().contains("address"));
    }

    #[test]
    fn error_field_short_circuits_even_on_success_status() {
        let response: ChatResponse = serde_json::from_str(
            r#"{"messages": [], "finished": false, "error": "candidate not found"}"#,
        )
        .unwrap();
        let err = response.into_reply().unwrap_err();
        assert_eq!(err, VivaError::Server("candidate not found".to_string()));
    }

    #[test]
    fn chat_reply_continue() {
        let response: ChatResponse = serde_json::from_str(
            r#"{
                "messages": [
                    {"question_no": 1, "difficulty": "easy",
                     "question": "Q1", "answer": "A1", "score": 7.0},
                    {"question_no": 2, "difficulty": "medium", "question": "Q2"}
                ],
                "finished": false
            }"#,
        )
        .unwrap();
        let reply = response.into_reply().unwrap();
        assert_eq!(reply.outcome, AnswerOutcome::Continue);
        assert_eq!(reply.turns.len(), 2);
        assert!(reply.turns[1].is_pending());
    }

    #[test]
    fn chat_reply_finished_carries_the_result() {
        let response: ChatResponse = serde_json::from_str(
            r#"{
                "messages": [
                    {"question_no": 1, "difficulty": "easy",
                     "question": "Q1", "answer": "A1", "score": 8.5}
                ],
                "finished": true,
                "final_score": 8.5,
                "summary": "Strong candidate"
            }"#,
        )
        .unwrap();
        let reply = response.into_reply().unwrap();
        assert_eq!(
            reply.outcome,
            AnswerOutcome::Finished {
                final_score: 8.5,
                summary: "Strong candidate".to_string()
            }
        );
    }

    #[test]
    fn finished_without_score_is_structurally_invalid() {
        let response: ChatResponse =
            serde_json::from_str(r#"{"messages": [], "finished": true}"#).unwrap();
        let err = response.into_reply().unwrap_err();
        assert!(err.is_server());
    }

    #[test]
    fn out_of_order_transcript_is_rejected() {
        let response: ChatResponse = serde_json::from_str(
            r#"{
                "messages": [
                    {"question_no": 2, "difficulty": "easy", "question": "Q2"},
                    {"question_no": 1, "difficulty": "easy", "question": "Q1"}
                ],
                "finished": false
            }"#,
        )
        .unwrap();
        let err = response.into_reply().unwrap_err();
        assert!(err.is_server());
    }

    #[test]
    fn message_without_question_is_rejected() {
        let response: ChatResponse = serde_json::from_str(
            r#"{"messages": [{"question_no": 1, "answer": "A1"}], "finished": false}"#,
        )
        .unwrap();
        assert!(response.into_reply().unwrap_err().is_server());
    }

    #[test]
    fn lax_message_fields_get_positional_defaults() {
        let response: SummaryResponse = serde_json::from_str(
            r#"{
                "name": "Ada",
                "finished": false,
                "messages": [{"question": "Q1"}, {"question": "Q2"}]
            }"#,
        )
        .unwrap();
        let report = response.into_report().unwrap();
        assert_eq!(report.turns[0].question_no, 1);
        assert_eq!(report.turns[1].question_no, 2);
        assert_eq!(report.turns[0].difficulty, "unknown");
    }

    #[test]
    fn candidate_overview_tolerates_missing_resume() {
        let dto: CandidateDto =
            serde_json::from_str(r#"{"id": "cand-3", "finished": true, "score": 6.1}"#).unwrap();
        let overview = dto.into_overview().unwrap();
        assert_eq!(overview.id.as_str(), "cand-3");
        assert_eq!(overview.resume, ResumeProfile::default());
        assert!(overview.finished);
    }
}
