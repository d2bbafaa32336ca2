//! DynTask / Task - task 関数の契約

use async_trait::async_trait;
use serde::de::DeserializeOwned;

/// task の戻り値。`None` は「値なし」で、失敗とは別物
pub type TaskOutput = Option<serde_json::Value>;

/// task 呼び出しの結果（同期の throw も非同期の reject もここに集約）
pub type TaskReturn = anyhow::Result<TaskOutput>;

/// DynTask は shim が呼び出す唯一の形
///
/// # Object Safety
/// - ジェネリックなメソッドを持たない
/// - `Arc<dyn DynTask>` として TaskLoader から返せる
#[async_trait]
pub trait DynTask: Send + Sync {
    async fn call(&self, params: serde_json::Value) -> TaskReturn;
}

/// Task は型付きパラメータと entrypoint を対応付ける
///
/// # 使用例
/// ```ignore
/// #[derive(Deserialize)]
/// struct Greet {
///     name: String,
/// }
///
/// impl Task for Greet {
///     const ENTRYPOINT: &'static str = "greet";
/// }
/// ```
///
/// # Trait Bounds
/// - `DeserializeOwned`: payload の JSON から復元するため
/// - `Send + 'static`: handler の future が跨いで保持するため
pub trait Task: DeserializeOwned + Send + 'static {
    /// argv[1] に渡される識別子
    const ENTRYPOINT: &'static str;
}
