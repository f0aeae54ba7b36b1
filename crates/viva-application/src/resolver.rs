//! Missing-field resolution stage.

use std::sync::Arc;

use viva_core::{
    InterviewGateway, Phase, ProfileField, Result, Session, SessionEvent, VivaError,
};

/// Iteratively supplies requested profile fields until the service
/// reports no remaining gaps.
///
/// The service is authoritative about what is still missing: the returned
/// set replaces the local one wholesale, and may well re-list a field
/// that was just submitted (e.g. judged invalid). The client puts no
/// bound on how often this loop runs.
pub struct MissingFieldResolver {
    gateway: Arc<dyn InterviewGateway>,
}

impl MissingFieldResolver {
    pub fn new(gateway: Arc<dyn InterviewGateway>) -> Self {
        Self { gateway }
    }

    /// Submits values for (a subset of) the currently requested fields.
    ///
    /// Values are trimmed; empty strings are forwarded as-is. On any
    /// gateway error the caller's session value is untouched and the same
    /// call can simply be re-invoked.
    pub async fn submit(
        &self,
        session: &Session,
        values: &[(ProfileField, String)],
    ) -> Result<Session> {
        if session.phase() != Phase::AwaitingMissingInfo {
            return Err(VivaError::state(format!(
                "no missing info is being requested while the session is {}",
                session.phase()
            )));
        }
        let candidate_id = session
            .candidate_id()
            .ok_or_else(|| VivaError::state("session has no candidate id yet"))?;
        for (field, _) in values {
            if !session.missing_fields().contains(field) {
                return Err(VivaError::state(format!(
                    "field '{field}' was not requested by the service"
                )));
            }
        }

        let trimmed: Vec<(ProfileField, String)> = values
            .iter()
            .map(|(field, value)| (*field, value.trim().to_string()))
            .collect();

        let reply = self.gateway.submit_missing_info(candidate_id, &trimmed).await?;
        if reply.candidate_id != *candidate_id {
            return Err(VivaError::server(format!(
                "service replied for candidate '{}' instead of '{}'",
                reply.candidate_id, candidate_id
            )));
        }
        tracing::info!(
            candidate_id = %reply.candidate_id,
            still_missing = reply.missing_fields.len(),
            "missing info reviewed by the service"
        );

        session.apply(SessionEvent::FieldsReviewed {
            missing_fields: reply.missing_fields,
            turns: reply.turns,
        })
    }
}
