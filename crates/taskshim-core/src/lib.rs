//! taskshim-core
//!
//! ホスト（orchestrator）とユーザーの task 関数をつなぐ shim の中核。
//! 1 プロセス = 1 invocation で、引数検証 → JSON デコード → 実行 → 報告 → 終了 を行います。
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（args, state, outcome, errors）
//! - **protocol**: `airplane_output` 行プロトコル（出力と、ホスト側のパース）
//! - **ports**: 抽象化レイヤー（OutputReporter, TaskLoader, Streams）
//! - **typed**: Task API（DynTask, TaskFn, Handler, TaskRegistry）
//! - **impls**: ports の実装（StdoutReporter, StdStreams, CaptureStreams など）
//! - **app**: Shim 本体と ShimBuilder, ShimConfig
//! - **observability**: tracing の初期化

pub mod domain;
pub mod protocol;
pub mod ports;
pub mod typed;
pub mod impls;
pub mod app;
pub mod observability;

pub use self::app::{Shim, ShimBuilder, ShimConfig};
pub use self::domain::{ExitStatus, InvocationReport, ShimError, ShimState};
pub use self::typed::{DynTask, TaskFn, TaskOutput, TaskRegistry, TaskReturn};
