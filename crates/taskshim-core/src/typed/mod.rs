//! Typed - task 関数の API
//!
//! task 関数は「引数 0 個 or JSON 1 個」「同期 or 非同期」の多相な callable。
//! これを 1 つの object-safe な capability（`DynTask`）にそろえます。
//!
//! # 二層構造
//! - **表層**: `TaskFn`（クロージャ用の tagged variant）、`Task` + `Handler<T>`（型付き）
//! - **内部**: `DynTask` - object-safe, type erasure
//!
//! `TaskRegistry` は entrypoint → `DynTask` の表で、`TaskLoader` として使えます。

pub mod task;
pub mod function;
pub mod handler;
pub mod registry;

pub use self::task::{DynTask, Task, TaskOutput, TaskReturn};
pub use self::function::TaskFn;
pub use self::handler::{Handler, TypedHandler};
pub use self::registry::{RegistryError, TaskRegistry};
