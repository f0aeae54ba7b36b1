//! Session phase types.

use serde::{Deserialize, Serialize};

/// The stage a session currently occupies in the
/// upload → resolve → chat → finish protocol.
///
/// Phases only ever advance forward. The two self-loops
/// (`AwaitingMissingInfo` while fields remain missing, `InChat` while
/// questions remain open) are the only transitions that do not move the
/// session along, and `Finished` has no outgoing transitions at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// No resume has been accepted yet.
    AwaitingResume,
    /// The service requested profile fields it could not extract.
    AwaitingMissingInfo,
    /// The question/answer loop is running.
    InChat,
    /// The interview is over and the final result is recorded.
    Finished,
}

impl Phase {
    /// Whether a transition from `self` to `target` is permitted.
    pub fn allows(self, target: Phase) -> bool {
        matches!(
            (self, target),
            (Phase::AwaitingResume, Phase::AwaitingMissingInfo)
                | (Phase::AwaitingResume, Phase::InChat)
                | (Phase::AwaitingMissingInfo, Phase::AwaitingMissingInfo)
                | (Phase::AwaitingMissingInfo, Phase::InChat)
                | (Phase::InChat, Phase::InChat)
                | (Phase::InChat, Phase::Finished)
        )
    }

    /// Check if this phase is terminal.
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Finished)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::AwaitingResume => write!(f, "awaiting resume"),
            Phase::AwaitingMissingInfo => write!(f, "awaiting missing info"),
            Phase::InChat => write!(f, "in chat"),
            Phase::Finished => write!(f, "finished"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_transitions_are_allowed() {
        assert!(Phase::AwaitingResume.allows(Phase::AwaitingMissingInfo));
        assert!(Phase::AwaitingResume.allows(Phase::InChat));
        assert!(Phase::AwaitingMissingInfo.allows(Phase::InChat));
        assert!(Phase::InChat.allows(Phase::Finished));
    }

    #[test]
    fn self_loops_only_where_the_protocol_needs_them() {
        assert!(Phase::AwaitingMissingInfo.allows(Phase::AwaitingMissingInfo));
        assert!(Phase::InChat.allows(Phase::InChat));
        assert!(!Phase::AwaitingResume.allows(Phase::AwaitingResume));
        assert!(!Phase::Finished.allows(Phase::Finished));
    }

    #[test]
    fn no_backward_transitions() {
        assert!(!Phase::AwaitingMissingInfo.allows(Phase::AwaitingResume));
        assert!(!Phase::InChat.allows(Phase::AwaitingMissingInfo));
        assert!(!Phase::InChat.allows(Phase::AwaitingResume));
        assert!(!Phase::Finished.allows(Phase::InChat));
        assert!(!Phase::Finished.allows(Phase::AwaitingResume));
        assert!(!Phase::Finished.allows(Phase::AwaitingMissingInfo));
    }

    #[test]
    fn awaiting_resume_cannot_skip_to_finished() {
        assert!(!Phase::AwaitingResume.allows(Phase::Finished));
        assert!(!Phase::AwaitingMissingInfo.allows(Phase::Finished));
    }
}
