//! Errors - shim のエラー型と分類
//!
//! プロトコル行に出るのは文字列だけですが、内部では分類を保ったまま扱います。
//! ホストは文字列を見ない限り設定ミスと task のバグを区別できません（既知の制限）。

use thiserror::Error;

use super::args::MISCONFIGURED_ARGS_MESSAGE;
use crate::ports::{LoadError, ReportError};

/// ErrorKind は失敗の分類
///
/// - Configuration: argv の数が違う / entrypoint が解決できない
/// - Decode: payload が JSON として不正
/// - Task: task 関数のエラー・panic、または出力の報告失敗
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Decode,
    Task,
}

#[derive(Debug, Error)]
pub enum ShimError {
    #[error("{}", MISCONFIGURED_ARGS_MESSAGE)]
    MisconfiguredArgs { got: usize },

    #[error("invalid JSON payload: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("{0}")]
    Load(#[from] LoadError),

    #[error("Error: {0:#}")]
    Task(anyhow::Error),

    #[error("Error: task panicked: {0}")]
    Panicked(String),

    #[error("Error: failed to report task output: {0}")]
    Report(#[from] ReportError),
}

impl ShimError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ShimError::MisconfiguredArgs { .. } | ShimError::Load(_) => ErrorKind::Configuration,
            ShimError::Decode(_) => ErrorKind::Decode,
            ShimError::Task(_) | ShimError::Panicked(_) | ShimError::Report(_) => ErrorKind::Task,
        }
    }

    /// stderr 向けの表現
    ///
    /// task のエラーは anyhow の Debug 形式（cause の連鎖つき）で出す。
    pub fn diagnostic(&self) -> String {
        match self {
            ShimError::Task(err) => format!("{err:?}"),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Context, anyhow};

    #[test]
    fn task_error_renders_like_a_thrown_error() {
        let err = ShimError::Task(anyhow!("yikes!"));
        assert_eq!(err.to_string(), "Error: yikes!");
        assert_eq!(err.kind(), ErrorKind::Task);
    }

    #[test]
    fn task_error_includes_context_chain() {
        let inner: anyhow::Result<()> = Err(anyhow!("connection refused"));
        let err = ShimError::Task(inner.context("fetching user").unwrap_err());
        assert_eq!(err.to_string(), "Error: fetching user: connection refused");
        assert!(err.diagnostic().contains("Caused by"));
    }

    #[test]
    fn decode_error_mentions_json() {
        let source = serde_json::from_str::<serde_json::Value>("{bad json").unwrap_err();
        let err = ShimError::Decode(source);
        assert!(err.to_string().starts_with("invalid JSON payload: "));
        assert_eq!(err.kind(), ErrorKind::Decode);
    }

    #[test]
    fn load_error_is_configuration_kind() {
        let err = ShimError::from(LoadError::NotFound("missing".to_string()));
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert!(err.to_string().contains("missing"));
    }
}
