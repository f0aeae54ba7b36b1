//! Resume intake stage.

use std::sync::Arc;

use viva_core::{InterviewGateway, Phase, Result, ResumeFile, Session, SessionEvent, VivaError};

/// Submits the resume artifact and interprets the service's verdict into
/// the session's first transition.
///
/// The file itself is validated at construction time
/// ([`ResumeFile::new`]), so by the time this stage runs the only local
/// precondition left is the phase.
pub struct ResumeIntake {
    gateway: Arc<dyn InterviewGateway>,
}

impl ResumeIntake {
    pub fn new(gateway: Arc<dyn InterviewGateway>) -> Self {
        Self { gateway }
    }

    /// Uploads `file` and advances the session out of `AwaitingResume`.
    ///
    /// A non-empty missing-field set in the reply routes the session into
    /// `AwaitingMissingInfo`; an empty one starts the chat directly. On
    /// any gateway error the caller's session value is untouched.
    pub async fn submit(&self, session: &Session, file: &ResumeFile) -> Result<Session> {
        if session.phase() != Phase::AwaitingResume {
            return Err(VivaError::state(format!(
                "cannot upload a resume while the session is {}",
                session.phase()
            )));
        }

        let reply = self.gateway.upload_resume(file).await?;
        tracing::info!(
            candidate_id = %reply.candidate_id,
            missing = reply.missing_fields.len(),
            "resume accepted by the service"
        );

        session.apply(SessionEvent::ResumeAccepted {
            candidate_id: reply.candidate_id,
            missing_fields: reply.missing_fields,
            turns: reply.turns,
        })
    }
}
