//! Ports - 抽象化レイヤー
//!
//! shim が外部と接する境界を trait で定義します。
//!
//! - **OutputReporter**: task の戻り値をホストに渡す（SDK の set output 相当）
//! - **TaskLoader**: entrypoint から task 関数を得る（リンク時に解決）
//! - **Streams**: stdout / stderr（テストでは差し替えてキャプチャ）

pub mod reporter;
pub mod loader;
pub mod streams;

pub use self::reporter::{OutputReporter, ReportError};
pub use self::loader::{LoadError, TaskLoader};
pub use self::streams::Streams;
