//! Interview flow driver.
//!
//! `InterviewFlow` owns the live session for one candidate and routes
//! each call to the stage owning the current phase. It also enforces the
//! two concurrency rules the protocol needs from the client: at most one
//! mutating request in flight per session, and no mutation from replies
//! that arrive after the session was abandoned.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::{Mutex, MutexGuard, RwLock};
use uuid::Uuid;

use viva_core::{InterviewGateway, ProfileField, Result, ResumeFile, Session, VivaError};

use crate::answer::AnswerLoop;
use crate::intake::ResumeIntake;
use crate::resolver::MissingFieldResolver;

/// Drives one candidate's interview session end to end.
///
/// Sessions for different candidates are independent flows sharing
/// nothing but the gateway.
pub struct InterviewFlow {
    /// Correlation id for log lines. Not the service's candidate id.
    flow_id: String,
    intake: ResumeIntake,
    resolver: MissingFieldResolver,
    answers: AnswerLoop,
    session: RwLock<Session>,
    /// Held for the duration of each mutating request. `try_lock` makes
    /// refusal immediate instead of queueing a duplicate submission;
    /// the protocol has no idempotency key that would make queueing safe.
    in_flight: Mutex<()>,
    /// Bumped by [`reset`](Self::reset); a reply started under an older
    /// epoch is dropped instead of mutating a session nobody observes.
    epoch: AtomicU64,
}

impl InterviewFlow {
    pub fn new(gateway: Arc<dyn InterviewGateway>) -> Self {
        Self {
            flow_id: Uuid::new_v4().to_string(),
            intake: ResumeIntake::new(gateway.clone()),
            resolver: MissingFieldResolver::new(gateway.clone()),
            answers: AnswerLoop::new(gateway),
            session: RwLock::new(Session::new()),
            in_flight: Mutex::new(()),
            epoch: AtomicU64::new(0),
        }
    }

    /// Snapshot of the current session.
    pub async fn session(&self) -> Session {
        self.session.read().await.clone()
    }

    /// Uploads the resume, entering either the missing-info phase or the
    /// chat directly.
    pub async fn upload_resume(&self, file: &ResumeFile) -> Result<Session> {
        let _guard = self.begin()?;
        let epoch = self.epoch.load(Ordering::SeqCst);
        let current = self.session.read().await.clone();
        let next = self.intake.submit(&current, file).await?;
        self.commit(epoch, next).await
    }

    /// Submits values for the requested profile fields.
    pub async fn submit_missing_info(
        &self,
        values: &[(ProfileField, String)],
    ) -> Result<Session> {
        let _guard = self.begin()?;
        let epoch = self.epoch.load(Ordering::SeqCst);
        let current = self.session.read().await.clone();
        let next = self.resolver.submit(&current, values).await?;
        self.commit(epoch, next).await
    }

    /// Submits an answer for the currently open question.
    pub async fn submit_answer(&self, answer: &str) -> Result<Session> {
        let _guard = self.begin()?;
        let epoch = self.epoch.load(Ordering::SeqCst);
        let current = self.session.read().await.clone();
        let next = self.answers.submit(&current, answer).await?;
        self.commit(epoch, next).await
    }

    /// Abandons the current session and starts a fresh one.
    ///
    /// A request still in flight for the old session keeps running (the
    /// protocol offers no cancellation), but its reply is dropped by the
    /// epoch check when it lands.
    pub async fn reset(&self) {
        self.epoch.fetch_add(1, Ordering::SeqCst);
        *self.session.write().await = Session::new();
        tracing::info!(flow_id = %self.flow_id, "session reset");
    }

    fn begin(&self) -> Result<MutexGuard<'_, ()>> {
        self.in_flight
            .try_lock()
            .map_err(|_| VivaError::state("another submission is already in flight"))
    }

    async fn commit(&self, epoch: u64, next: Session) -> Result<Session> {
        if self.epoch.load(Ordering::SeqCst) != epoch {
            tracing::warn!(flow_id = %self.flow_id, "dropping reply for an abandoned session");
            return Err(VivaError::state(
                "the session was reset while the request was in flight",
            ));
        }
        *self.session.write().await = next.clone();
        Ok(next)
    }
}
