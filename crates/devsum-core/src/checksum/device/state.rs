//! Two-state attempt machine: first attempt, then at most one retry after deployment.

use super::classify::FailureKind;

/// Per-call deployment state. Starts at `FirstAttempt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Attempt {
    #[default]
    FirstAttempt,
    /// The bundle has been pushed and the command re-issued.
    Retried,
}

/// Decision taken after a failed remote invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptDecision {
    /// Push the checksum bundle, then re-issue the identical command.
    DeployAndRetry,
    /// Surface the error to the caller.
    GiveUp,
}

impl Attempt {
    pub fn decide(self, kind: FailureKind) -> AttemptDecision {
        match (self, kind) {
            (Attempt::FirstAttempt, FailureKind::MissingBinary) => AttemptDecision::DeployAndRetry,
            _ => AttemptDecision::GiveUp,
        }
    }
}
