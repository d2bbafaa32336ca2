//! TaskFn - クロージャで書いた task 関数
//!
//! 引数の有無で variant を分ける。同期関数は即座に解決する future に包むので、
//! shim から見れば常に「await して settle を待つ」だけになる。

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use futures::FutureExt;
use futures::future::{self, BoxFuture};

use super::task::{DynTask, TaskReturn};

type NullaryFn = dyn Fn() -> BoxFuture<'static, TaskReturn> + Send + Sync;
type UnaryFn = dyn Fn(serde_json::Value) -> BoxFuture<'static, TaskReturn> + Send + Sync;

#[derive(Clone)]
pub enum TaskFn {
    /// パラメータを受け取らない task（payload はデコードされるが渡されない）
    Nullary(Arc<NullaryFn>),
    /// JSON 値を 1 つ受け取る task
    Unary(Arc<UnaryFn>),
}

impl TaskFn {
    pub fn nullary<F, Fut>(f: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = TaskReturn> + Send + 'static,
    {
        TaskFn::Nullary(Arc::new(move || f().boxed()))
    }

    pub fn unary<F, Fut>(f: F) -> Self
    where
        F: Fn(serde_json::Value) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = TaskReturn> + Send + 'static,
    {
        TaskFn::Unary(Arc::new(move |params| f(params).boxed()))
    }

    pub fn nullary_sync<F>(f: F) -> Self
    where
        F: Fn() -> TaskReturn + Send + Sync + 'static,
    {
        Self::nullary(move || future::ready(f()))
    }

    pub fn unary_sync<F>(f: F) -> Self
    where
        F: Fn(serde_json::Value) -> TaskReturn + Send + Sync + 'static,
    {
        Self::unary(move |params| future::ready(f(params)))
    }

    pub fn arity(&self) -> usize {
        match self {
            TaskFn::Nullary(_) => 0,
            TaskFn::Unary(_) => 1,
        }
    }
}

#[async_trait]
impl DynTask for TaskFn {
    async fn call(&self, params: serde_json::Value) -> TaskReturn {
        match self {
            TaskFn::Nullary(f) => f().await,
            TaskFn::Unary(f) => f(params).await,
        }
    }
}

impl fmt::Debug for TaskFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskFn").field("arity", &self.arity()).finish()
    }
}
