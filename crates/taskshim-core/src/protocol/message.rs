//! ProtocolMessage - stdout に書く 1 行のメッセージ

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::json;

/// 予約済みの行プレフィックス
pub const OUTPUT_PREFIX: &str = "airplane_output";

/// 名前のない出力の名前
pub const DEFAULT_OUTPUT_NAME: &str = "output";

/// 失敗を知らせる出力の名前
pub const ERROR_OUTPUT_NAME: &str = "error";

/// `airplane_output[:name] <json>` 形式の 1 行
///
/// - name なし: `airplane_output {"ok":true}`
/// - name あり: `airplane_output:error {"error":"Error: yikes!"}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProtocolMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub value: serde_json::Value,
}

impl ProtocolMessage {
    /// 名前なしの出力
    pub fn output(value: serde_json::Value) -> Self {
        Self { name: None, value }
    }

    pub fn named(name: impl Into<String>, value: serde_json::Value) -> Self {
        Self {
            name: Some(name.into()),
            value,
        }
    }

    /// 失敗行: `airplane_output:error {"error": "<message>"}`
    pub fn error(message: impl Into<String>) -> Self {
        Self::named(ERROR_OUTPUT_NAME, json!({ "error": message.into() }))
    }

    /// ホストが解釈する出力名（未指定なら `output`）
    pub fn output_name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_OUTPUT_NAME)
    }

    pub fn is_error(&self) -> bool {
        self.name.as_deref() == Some(ERROR_OUTPUT_NAME)
    }

    /// 1 行に整形する（改行は含まない）
    ///
    /// serde_json のコンパクト表現は改行を含まないので、値が何であっても 1 行に収まる。
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ProtocolMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(OUTPUT_PREFIX)?;
        if let Some(name) = &self.name {
            write!(f, ":{name}")?;
        }
        write!(f, " {}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_line_has_fixed_shape() {
        let msg = ProtocolMessage::error("Error: yikes!");
        assert_eq!(
            msg.render(),
            r#"airplane_output:error {"error":"Error: yikes!"}"#
        );
        assert!(msg.is_error());
        assert_eq!(msg.output_name(), "error");
    }

    #[test]
    fn unnamed_output_uses_default_name() {
        let msg = ProtocolMessage::output(json!({ "ok": true }));
        assert_eq!(msg.render(), r#"airplane_output {"ok":true}"#);
        assert_eq!(msg.output_name(), DEFAULT_OUTPUT_NAME);
        assert!(!msg.is_error());
    }

    #[test]
    fn multiline_strings_stay_on_one_line() {
        let msg = ProtocolMessage::error("first\nsecond");
        let line = msg.render();
        assert!(!line.contains('\n'));
        assert!(line.ends_with(r#"{"error":"first\nsecond"}"#));
    }
}
