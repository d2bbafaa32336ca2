//! FixedLoader - 1 つの task だけを持つ TaskLoader
//!
//! shim を 1 task 専用にビルドする場合に使う。argv[1] は見ない。

use std::sync::Arc;

use crate::ports::{LoadError, TaskLoader};
use crate::typed::DynTask;

pub struct FixedLoader {
    task: Arc<dyn DynTask>,
}

impl FixedLoader {
    pub fn new(task: Arc<dyn DynTask>) -> Self {
        Self { task }
    }
}

impl TaskLoader for FixedLoader {
    fn load(&self, _entrypoint: &str) -> Result<Arc<dyn DynTask>, LoadError> {
        Ok(Arc::clone(&self.task))
    }
}
