//! tracing の初期化
//!
//! stdout はプロトコル専用なので、ログは必ず stderr に出す。

use tracing_subscriber::EnvFilter;

use crate::app::ShimConfig;
use crate::app::config::DEFAULT_LOG_FILTER;

/// グローバル subscriber を設定する。すでに設定済みなら何もしない。
///
/// フィルタ文字列が不正なら既定（`warn`）にフォールバックする。
pub fn init_tracing(config: &ShimConfig) {
    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
