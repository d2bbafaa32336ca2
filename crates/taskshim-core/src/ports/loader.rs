//! TaskLoader port - entrypoint から task を解決
//!
//! 動的 import の代わりに、ビルド時にリンクされた task を識別子で引きます。

use std::sync::Arc;

use crate::typed::DynTask;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("no task registered for entrypoint '{0}'")]
    NotFound(String),
}

/// TaskLoader は module identifier（argv[1]）を task 関数に解決する
pub trait TaskLoader: Send + Sync {
    fn load(&self, entrypoint: &str) -> Result<Arc<dyn DynTask>, LoadError>;
}
