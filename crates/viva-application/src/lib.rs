pub mod answer;
pub mod flow;
pub mod intake;
pub mod resolver;

// Re-export public API
pub use answer::AnswerLoop;
pub use flow::InterviewFlow;
pub use intake::ResumeIntake;
pub use resolver::MissingFieldResolver;
