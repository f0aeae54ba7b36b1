pub mod candidate;
pub mod error;
pub mod gateway;
pub mod resume;
pub mod session;

// Re-export common types
pub use error::{Result, VivaError};
pub use gateway::{AnswerOutcome, AnswerReply, IntakeReply, InterviewGateway};
pub use resume::ResumeFile;
pub use session::{CandidateId, InterviewResult, Phase, ProfileField, Session, SessionEvent, Turn};
