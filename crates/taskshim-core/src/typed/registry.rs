//! TaskRegistry - entrypoint と task の対応表
//!
//! ビルド時にリンクした task を識別子で登録し、argv[1] で引きます。
//! 動的ロードの代わりに TaskLoader を実装します。

use std::collections::HashMap;
use std::sync::Arc;

use super::function::TaskFn;
use super::handler::{Handler, TypedHandler};
use super::task::{DynTask, Task};
use crate::ports::{LoadError, TaskLoader};

/// TaskRegistry は entrypoint → DynTask を管理
///
/// # 使用例
/// ```ignore
/// let mut registry = TaskRegistry::new();
/// registry.register::<Greet, _>(GreetHandler)?;
/// registry.register_fn("noop", TaskFn::nullary_sync(|| Ok(None)))?;
/// ```
#[derive(Default)]
pub struct TaskRegistry {
    tasks: HashMap<String, Arc<dyn DynTask>>,
}

/// RegistryError は TaskRegistry の操作エラー
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Task for entrypoint '{0}' is already registered")]
    AlreadyRegistered(String),
}

impl TaskRegistry {
    pub fn new() -> Self {
        Self {
            tasks: HashMap::new(),
        }
    }

    /// 型付き Handler を T::ENTRYPOINT で登録
    pub fn register<T: Task, H: Handler<T> + 'static>(
        &mut self,
        handler: H,
    ) -> Result<(), RegistryError> {
        self.insert(T::ENTRYPOINT, Arc::new(TypedHandler::new(handler)))
    }

    /// クロージャの task を登録
    pub fn register_fn(
        &mut self,
        entrypoint: impl Into<String>,
        task: TaskFn,
    ) -> Result<(), RegistryError> {
        self.insert(entrypoint, Arc::new(task))
    }

    pub fn insert(
        &mut self,
        entrypoint: impl Into<String>,
        task: Arc<dyn DynTask>,
    ) -> Result<(), RegistryError> {
        let entrypoint = entrypoint.into();
        if self.tasks.contains_key(&entrypoint) {
            return Err(RegistryError::AlreadyRegistered(entrypoint));
        }
        self.tasks.insert(entrypoint, task);
        Ok(())
    }

    pub fn get(&self, entrypoint: &str) -> Option<Arc<dyn DynTask>> {
        self.tasks.get(entrypoint).cloned()
    }

    /// 登録済みの entrypoint（ソート済み）
    pub fn entrypoints(&self) -> Vec<String> {
        let mut entrypoints: Vec<String> = self.tasks.keys().cloned().collect();
        entrypoints.sort();
        entrypoints
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl TaskLoader for TaskRegistry {
    fn load(&self, entrypoint: &str) -> Result<Arc<dyn DynTask>, LoadError> {
        self.get(entrypoint)
            .ok_or_else(|| LoadError::NotFound(entrypoint.to_string()))
    }
}
