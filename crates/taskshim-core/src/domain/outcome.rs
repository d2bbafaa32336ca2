//! Outcome model: exit status and the per-invocation report.

use serde::{Deserialize, Serialize};

use super::errors::ShimError;
use super::state::ShimState;

/// The process's final disposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExitStatus {
    Success,
    Failure,
}

impl ExitStatus {
    pub fn code(self) -> i32 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
        }
    }

    pub fn is_success(self) -> bool {
        self == ExitStatus::Success
    }
}

/// What one `Shim::run` did.
///
/// Exactly one of "task output" and "error" describes the run: `error` is
/// `Some` iff `status` is `Failure`. `output` may be `None` on success when
/// the task returned no value.
#[derive(Debug)]
pub struct InvocationReport {
    pub status: ExitStatus,
    pub states: Vec<ShimState>,
    pub output: Option<serde_json::Value>,
    pub error: Option<ShimError>,
}

impl InvocationReport {
    pub fn exit_code(&self) -> i32 {
        self.status.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes() {
        assert_eq!(ExitStatus::Success.code(), 0);
        assert_eq!(ExitStatus::Failure.code(), 1);
        assert!(ExitStatus::Success.is_success());
        assert!(!ExitStatus::Failure.is_success());
    }

    #[test]
    fn exit_status_serializes_as_screaming_names() {
        let s = serde_json::to_string(&ExitStatus::Failure).unwrap();
        assert_eq!(s, "\"FAILURE\"");
    }
}
