//! taskshim - 1 回だけ task を呼んで終了する shim バイナリ
//!
//! ```text
//! taskshim <entrypoint> '<json>'
//! ```
//!
//! 環境変数:
//! - TASKSHIM_FORWARD_OUTPUT: 戻り値を `airplane_output` 行で出すか（既定: yes）
//! - TASKSHIM_LOG: tracing のフィルタ（既定: warn、出力先は stderr）

mod tasks;

use std::fmt::Display;

use taskshim_core::observability::init_tracing;
use taskshim_core::protocol::ProtocolMessage;
use taskshim_core::{ShimBuilder, ShimConfig};

/// Shim を組み立てる前の失敗も、ホストから見える形は同じにする
fn exit_with_error(err: impl Display) -> ! {
    let message = err.to_string();
    eprintln!("{message}");
    println!("{}", ProtocolMessage::error(message));
    std::process::exit(1)
}

#[tokio::main]
async fn main() {
    let config = ShimConfig::from_env().unwrap_or_else(|e| exit_with_error(e));
    init_tracing(&config);

    let registry = tasks::registry().unwrap_or_else(|e| exit_with_error(e));
    tracing::debug!(entrypoints = ?registry.entrypoints(), "tasks linked");

    let shim = ShimBuilder::new()
        .loader(registry)
        .config(config)
        .build()
        .unwrap_or_else(|e| exit_with_error(e));

    shim.run_and_exit(std::env::args()).await
}
