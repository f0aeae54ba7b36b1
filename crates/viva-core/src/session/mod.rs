//! Session domain module.
//!
//! This module contains the session model, the phase state machine, and
//! the validated transition operation that every stage goes through.
//!
//! # Module Structure
//!
//! - `model`: Core session domain model (`Session`, `CandidateId`,
//!   `InterviewResult`)
//! - `phase`: Phase state machine (`Phase`)
//! - `turn`: Transcript types (`Turn`)
//! - `field`: Profile field types (`ProfileField`)
//! - `event`: Transition events (`SessionEvent`)

mod event;
mod field;
mod model;
mod phase;
mod turn;

// Re-export public API
pub use event::SessionEvent;
pub use field::ProfileField;
pub use model::{CandidateId, InterviewResult, Session};
pub use phase::Phase;
pub use turn::Turn;
