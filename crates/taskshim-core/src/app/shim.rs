//! Shim - 1 回の invocation を最後まで運ぶ
//!
//! # フロー
//! 1. argv を検証（ちょうど 3 要素）
//! 2. argv[2] を JSON としてデコード
//! 3. argv[1] から task を解決して呼び出す（唯一の suspension point）
//! 4. 値が返れば OutputReporter へ（forward が有効な場合のみ）
//! 5. 失敗なら stderr に診断、stdout に `airplane_output:error` を 1 行
//! 6. exit status を確定させて終了

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use tracing::{Instrument, debug, info, info_span, warn};

use super::config::ShimConfig;
use crate::domain::{ExitStatus, InvocationArgs, InvocationReport, ShimError, ShimState};
use crate::ports::{OutputReporter, Streams, TaskLoader};
use crate::protocol::ProtocolMessage;
use crate::typed::TaskOutput;

pub struct Shim {
    loader: Arc<dyn TaskLoader>,
    reporter: Arc<dyn OutputReporter>,
    streams: Arc<dyn Streams>,
    config: ShimConfig,
}

/// 通過した状態の記録
struct StateTrace {
    current: ShimState,
    visited: Vec<ShimState>,
}

impl StateTrace {
    fn new() -> Self {
        Self {
            current: ShimState::Start,
            visited: vec![ShimState::Start],
        }
    }

    fn ok(&mut self) {
        self.advance(self.current.on_ok());
    }

    fn fail(&mut self) {
        self.advance(self.current.on_fail());
    }

    fn advance(&mut self, next: ShimState) {
        debug!(from = %self.current, to = %next, "state transition");
        self.current = next;
        self.visited.push(next);
    }
}

impl Shim {
    pub(crate) fn new(
        loader: Arc<dyn TaskLoader>,
        reporter: Arc<dyn OutputReporter>,
        streams: Arc<dyn Streams>,
        config: ShimConfig,
    ) -> Self {
        Self {
            loader,
            reporter,
            streams,
            config,
        }
    }

    pub fn config(&self) -> &ShimConfig {
        &self.config
    }

    /// 1 回分の invocation を実行して結果を返す（プロセスは終了しない）
    pub async fn run<I, S>(&self, argv: I) -> InvocationReport
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let argv: Vec<String> = argv.into_iter().map(Into::into).collect();
        let span = info_span!(
            "invocation",
            argc = argv.len(),
            entrypoint = tracing::field::Empty
        );

        async move {
            let mut trace = StateTrace::new();
            trace.ok();

            let (output, error) = match self.execute(&mut trace, argv).await {
                Ok(output) => {
                    info!(has_output = output.is_some(), "task completed");
                    (output, None)
                }
                Err(err) => {
                    trace.fail();
                    self.report_failure(&err);
                    (None, Some(err))
                }
            };

            if let Err(e) = self.streams.flush() {
                warn!(error = %e, "flushing streams failed");
            }
            trace.ok();

            let status = trace.current.exit_status().unwrap_or(ExitStatus::Failure);
            InvocationReport {
                status,
                states: trace.visited,
                output,
                error,
            }
        }
        .instrument(span)
        .await
    }

    /// run() してからプロセスを終了する
    ///
    /// task が裏で残した非同期処理は待たない。
    pub async fn run_and_exit<I, S>(&self, argv: I) -> !
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let report = self.run(argv).await;
        std::process::exit(report.exit_code())
    }

    async fn execute(
        &self,
        trace: &mut StateTrace,
        argv: Vec<String>,
    ) -> Result<TaskOutput, ShimError> {
        let args = InvocationArgs::parse(argv)?;
        tracing::Span::current().record("entrypoint", args.entrypoint());
        trace.ok();

        let params = args.decode_params()?;
        trace.ok();

        let output = self.invoke(&args, params).await?;
        trace.ok();

        Ok(output)
    }

    async fn invoke(
        &self,
        args: &InvocationArgs,
        params: serde_json::Value,
    ) -> Result<TaskOutput, ShimError> {
        let task = self.loader.load(args.entrypoint())?;

        debug!("calling task");
        let output = AssertUnwindSafe(async move { task.call(params).await })
            .catch_unwind()
            .await
            .map_err(|payload| ShimError::Panicked(panic_message(payload.as_ref())))?
            .map_err(ShimError::Task)?;

        match &output {
            Some(value) if self.config.forward_output => self.reporter.report(value).await?,
            Some(_) => debug!("output forwarding disabled, dropping task output"),
            None => debug!("task returned no value"),
        }

        Ok(output)
    }

    fn report_failure(&self, err: &ShimError) {
        warn!(kind = ?err.kind(), error = %err, "task invocation failed");

        if let Err(e) = self.streams.stderr(&err.diagnostic()) {
            warn!(error = %e, "writing diagnostic failed");
        }

        let line = ProtocolMessage::error(err.to_string()).render();
        if let Err(e) = self.streams.stdout_line(&line) {
            warn!(error = %e, "writing error line failed");
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
