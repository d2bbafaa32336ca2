//! ShimConfig - shim の設定
//!
//! argv の形は固定（ちょうど 3 要素）なのでフラグは取れない。設定は環境変数から読む。

use serde::{Deserialize, Serialize};

pub const FORWARD_OUTPUT_ENV: &str = "TASKSHIM_FORWARD_OUTPUT";
pub const LOG_FILTER_ENV: &str = "TASKSHIM_LOG";
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: expected yes, no, true, false, 1 or 0, got '{value}'")]
    InvalidBool { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShimConfig {
    /// task の戻り値を OutputReporter に渡すか
    ///
    /// false にすると戻り値は捨てられ、成功時の出力行は出ない。
    pub forward_output: bool,

    /// tracing の EnvFilter 文字列（出力先は常に stderr）
    pub log_filter: String,
}

impl Default for ShimConfig {
    fn default() -> Self {
        Self {
            forward_output: true,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ShimConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 任意のルックアップ関数から読む（空文字は未設定扱い）
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let read = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(value) = read(FORWARD_OUTPUT_ENV) {
            config.forward_output = parse_bool(&value).ok_or(ConfigError::InvalidBool {
                var: FORWARD_OUTPUT_ENV,
                value,
            })?;
        }
        if let Some(filter) = read(LOG_FILTER_ENV) {
            config.log_filter = filter;
        }

        Ok(config)
    }
}

/// yes / y / no / n / true / false / 1 / 0（大文字小文字は無視）
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "yes" | "y" | "true" | "t" | "1" => Some(true),
        "no" | "n" | "false" | "f" | "0" => Some(false),
        _ => None,
    }
}
