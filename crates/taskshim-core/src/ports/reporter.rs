//! OutputReporter port - task 出力の報告

use async_trait::async_trait;

/// ReportError は出力の報告に失敗したときのエラー
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("writing output: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Rejected(String),
}

/// OutputReporter は task の宣言済み出力をホストに渡す
///
/// shim が呼ぶのは「task が値を返した」かつ「forward が有効」なときだけ。
/// 受け取る値は task が返したものそのもの（加工しない）。
#[async_trait]
pub trait OutputReporter: Send + Sync {
    async fn report(&self, value: &serde_json::Value) -> Result<(), ReportError>;
}
