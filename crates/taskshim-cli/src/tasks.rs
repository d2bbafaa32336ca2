//! サンプル task 群
//!
//! ビルド時にリンクされ、argv[1] の entrypoint で選ばれる。

use std::time::Duration;

use anyhow::{Context, anyhow, bail};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;
use taskshim_core::typed::{Handler, RegistryError, Task, TaskFn, TaskRegistry, TaskReturn};

#[derive(Debug, Deserialize)]
struct Hello {
    #[serde(default)]
    name: Option<String>,
}

impl Task for Hello {
    const ENTRYPOINT: &'static str = "hello";
}

struct HelloHandler;

#[async_trait]
impl Handler<Hello> for HelloHandler {
    type Output = ();

    async fn handle(&self, task: Hello) -> anyhow::Result<Option<()>> {
        let name = task.name.as_deref().unwrap_or("World");
        println!("Hello, {name}!");
        Ok(None)
    }
}

#[derive(Debug, Deserialize)]
struct Lookup {
    id: String,
}

impl Task for Lookup {
    const ENTRYPOINT: &'static str = "lookup";
}

#[derive(Debug, Serialize)]
struct LookupResult {
    id: String,
    found: bool,
}

struct LookupHandler;

#[async_trait]
impl Handler<Lookup> for LookupHandler {
    type Output = LookupResult;

    async fn handle(&self, task: Lookup) -> anyhow::Result<Option<LookupResult>> {
        println!("looking up {}", task.id);
        Ok(Some(LookupResult {
            found: !task.id.is_empty(),
            id: task.id,
        }))
    }
}

async fn echo(params: serde_json::Value) -> TaskReturn {
    tokio::time::sleep(Duration::from_millis(10)).await;
    Ok(Some(params))
}

async fn reject() -> TaskReturn {
    tokio::time::sleep(Duration::from_millis(10)).await;
    let upstream: anyhow::Result<()> = Err(anyhow!("upstream timed out"));
    upstream.context("fetching report")?;
    Ok(None)
}

pub fn registry() -> Result<TaskRegistry, RegistryError> {
    let mut registry = TaskRegistry::new();
    registry.register::<Hello, _>(HelloHandler)?;
    registry.register::<Lookup, _>(LookupHandler)?;
    registry.register_fn("ok", TaskFn::nullary_sync(|| Ok(Some(json!({ "ok": true })))))?;
    registry.register_fn("echo", TaskFn::unary(echo))?;
    registry.register_fn("noop", TaskFn::nullary_sync(|| Ok(None)))?;
    registry.register_fn("fail", TaskFn::nullary_sync(|| bail!("yikes!")))?;
    registry.register_fn("reject", TaskFn::nullary(reject))?;
    registry.register_fn("panic", TaskFn::nullary_sync(|| panic!("task exploded")))?;
    Ok(registry)
}
