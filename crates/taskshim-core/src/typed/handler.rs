//! Handler trait - 型付きパラメータで task を書く
//!
//! - ジェネリック trait (Handler<T>)
//! - Type erasure (TypedHandler<T, H> → DynTask)

use std::marker::PhantomData;

use anyhow::Context;
use async_trait::async_trait;
use serde::Serialize;

use super::task::{DynTask, Task, TaskReturn};

/// Handler は T を受け取って出力（または値なし）を返す
///
/// # 使用例
/// ```ignore
/// struct GreetHandler;
///
/// #[async_trait]
/// impl Handler<Greet> for GreetHandler {
///     type Output = String;
///
///     async fn handle(&self, task: Greet) -> anyhow::Result<Option<String>> {
///         Ok(Some(format!("Hello, {}!", task.name)))
///     }
/// }
/// ```
#[async_trait]
pub trait Handler<T: Task>: Send + Sync {
    type Output: Serialize + Send;

    async fn handle(&self, task: T) -> anyhow::Result<Option<Self::Output>>;
}

/// TypedHandler は Handler<T> を DynTask に変換する
///
/// payload → T のデコード失敗は task のエラーとして扱う（スキーマ検証は task の責務）。
pub struct TypedHandler<T: Task, H: Handler<T>> {
    handler: H,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Task, H: Handler<T>> TypedHandler<T, H> {
    pub fn new(handler: H) -> Self {
        Self {
            handler,
            _marker: PhantomData,
        }
    }
}

#[async_trait]
impl<T: Task, H: Handler<T>> DynTask for TypedHandler<T, H> {
    async fn call(&self, params: serde_json::Value) -> TaskReturn {
        let task: T = serde_json::from_value(params)
            .with_context(|| format!("decoding parameters for '{}'", T::ENTRYPOINT))?;

        match self.handler.handle(task).await? {
            Some(output) => Ok(Some(
                serde_json::to_value(output).context("encoding task output")?,
            )),
            None => Ok(None),
        }
    }
}
