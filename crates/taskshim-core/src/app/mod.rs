//! App - アプリケーション層
//!
//! ports を組み合わせて shim を組み立てます。
//!
//! # 主要コンポーネント
//! - **ShimBuilder**: 構築とワイヤリング
//! - **Shim**: validate → decode → invoke → report → exit
//! - **ShimConfig**: 環境変数からの設定

pub mod builder;
pub mod config;
pub mod shim;

pub use self::builder::{BuildError, ShimBuilder};
pub use self::config::{ConfigError, ShimConfig};
pub use self::shim::Shim;
