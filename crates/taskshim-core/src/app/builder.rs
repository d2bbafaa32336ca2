//! ShimBuilder - Shim の構築とワイヤリング
//!
//! - Builder パターン
//! - 起動時検証（Fail-fast）: task も loader もなければ build() でエラー

use std::sync::Arc;

use super::config::ShimConfig;
use super::shim::Shim;
use crate::impls::{FixedLoader, StdStreams, StdoutReporter};
use crate::ports::{OutputReporter, Streams, TaskLoader};
use crate::typed::DynTask;

/// ShimBuilder は Shim を構築
///
/// # 使用例
/// ```ignore
/// let shim = ShimBuilder::new()
///     .loader(registry)
///     .config(ShimConfig::from_env()?)
///     .build()?;
/// shim.run_and_exit(std::env::args()).await
/// ```
///
/// 省略時の既定:
/// - streams: StdStreams
/// - reporter: 同じ streams に書く StdoutReporter
/// - config: ShimConfig::default()（forward あり）
#[derive(Default)]
pub struct ShimBuilder {
    loader: Option<Arc<dyn TaskLoader>>,
    reporter: Option<Arc<dyn OutputReporter>>,
    streams: Option<Arc<dyn Streams>>,
    config: ShimConfig,
}

/// BuildError は Shim 構築時のエラー
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("No task configured. Call task() or loader() before build().")]
    MissingTask,
}

impl ShimBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// 1 task 専用の shim にする（argv[1] は無視される）
    ///
    /// task() と loader() は後に呼んだほうが勝つ。
    pub fn task<T: DynTask + 'static>(self, task: T) -> Self {
        self.loader(FixedLoader::new(Arc::new(task)))
    }

    /// argv[1] を entrypoint として loader で解決する
    pub fn loader<L: TaskLoader + 'static>(mut self, loader: L) -> Self {
        self.loader = Some(Arc::new(loader));
        self
    }

    pub fn reporter(mut self, reporter: Arc<dyn OutputReporter>) -> Self {
        self.reporter = Some(reporter);
        self
    }

    pub fn streams(mut self, streams: Arc<dyn Streams>) -> Self {
        self.streams = Some(streams);
        self
    }

    pub fn config(mut self, config: ShimConfig) -> Self {
        self.config = config;
        self
    }

    pub fn forward_output(mut self, forward: bool) -> Self {
        self.config.forward_output = forward;
        self
    }

    pub fn build(self) -> Result<Shim, BuildError> {
        let loader = self.loader.ok_or(BuildError::MissingTask)?;
        let streams = self.streams.unwrap_or_else(|| Arc::new(StdStreams));
        let reporter = self
            .reporter
            .unwrap_or_else(|| Arc::new(StdoutReporter::new(Arc::clone(&streams))));

        Ok(Shim::new(loader, reporter, streams, self.config))
    }
}
