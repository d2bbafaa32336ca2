//! Impls - ports の実装
//!
//! # 含まれる実装
//! - **StdoutReporter**: 出力を `airplane_output <json>` 行として書く
//! - **RecordingReporter**: 受け取った値を保持する（テスト・組み込み用）
//! - **StdStreams**: プロセスの stdout / stderr
//! - **CaptureStreams**: メモリ上にキャプチャ（テスト用）
//! - **FixedLoader**: entrypoint に関係なく 1 つの task を返す

pub mod reporter;
pub mod streams;
pub mod fixed_loader;

pub use self::reporter::{RecordingReporter, StdoutReporter};
pub use self::streams::{CaptureStreams, StdStreams};
pub use self::fixed_loader::FixedLoader;
