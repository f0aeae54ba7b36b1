//! Read-only candidate views.
//!
//! These models back the interviewer dashboard and the per-candidate
//! report. They are plain GET-style snapshots with no write access and no
//! interaction with the session state machine.

use serde::{Deserialize, Serialize};

use crate::session::{CandidateId, Turn};

/// Profile data the service extracted (or was given) for a candidate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeProfile {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Detailed report for a single candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateReport {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Final score, present once the interview finished.
    pub score: Option<f64>,
    pub finished: bool,
    /// Full question/answer log, including pending turns.
    pub turns: Vec<Turn>,
    /// Final summary, present once the interview finished.
    pub summary: Option<String>,
}

/// One entry in the all-candidates overview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateOverview {
    pub id: CandidateId,
    pub resume: ResumeProfile,
    pub score: Option<f64>,
    pub finished: bool,
    pub summary: Option<String>,
    pub turns: Vec<Turn>,
}
