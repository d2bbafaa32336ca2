//! State - 1 回の invocation の状態遷移
//!
//! ```text
//! Start → ValidatingArgs → {ok: DecodingParams, fail: ReportingError}
//! DecodingParams → {ok: InvokingTask, fail: ReportingError}
//! InvokingTask → {ok: ReportingSuccess, fail: ReportingError}
//! ReportingSuccess → Exited(Success)
//! ReportingError → Exited(Failure)
//! ```
//!
//! 遷移は `on_ok` / `on_fail` の全域関数で表現するので、スキップや逆戻りは起こりえない。
//! 終端状態（Exited）は不動点。

use std::fmt;

use super::outcome::ExitStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShimState {
    Start,
    ValidatingArgs,
    DecodingParams,
    InvokingTask,
    ReportingSuccess,
    ReportingError,
    Exited(ExitStatus),
}

impl ShimState {
    /// 現在のフェーズが成功したときの次の状態
    pub fn on_ok(self) -> Self {
        match self {
            ShimState::Start => ShimState::ValidatingArgs,
            ShimState::ValidatingArgs => ShimState::DecodingParams,
            ShimState::DecodingParams => ShimState::InvokingTask,
            ShimState::InvokingTask => ShimState::ReportingSuccess,
            ShimState::ReportingSuccess => ShimState::Exited(ExitStatus::Success),
            ShimState::ReportingError => ShimState::Exited(ExitStatus::Failure),
            ShimState::Exited(status) => ShimState::Exited(status),
        }
    }

    /// 現在のフェーズが失敗したときの次の状態
    ///
    /// Start は失敗しない。報告フェーズでの書き込み失敗は結果を変えない
    /// （出力の forward は InvokingTask の一部なので、ここでは終了するだけ）。
    pub fn on_fail(self) -> Self {
        match self {
            ShimState::Start => ShimState::ValidatingArgs,
            ShimState::ValidatingArgs | ShimState::DecodingParams | ShimState::InvokingTask => {
                ShimState::ReportingError
            }
            ShimState::ReportingSuccess | ShimState::ReportingError => self.on_ok(),
            ShimState::Exited(status) => ShimState::Exited(status),
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, ShimState::Exited(_))
    }

    /// 終端なら確定した exit status
    pub fn exit_status(self) -> Option<ExitStatus> {
        match self {
            ShimState::Exited(status) => Some(status),
            _ => None,
        }
    }
}

impl fmt::Display for ShimState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShimState::Start => f.write_str("START"),
            ShimState::ValidatingArgs => f.write_str("VALIDATING_ARGS"),
            ShimState::DecodingParams => f.write_str("DECODING_PARAMS"),
            ShimState::InvokingTask => f.write_str("INVOKING_TASK"),
            ShimState::ReportingSuccess => f.write_str("REPORTING_SUCCESS"),
            ShimState::ReportingError => f.write_str("REPORTING_ERROR"),
            ShimState::Exited(status) => write!(f, "EXIT({})", status.code()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path_reaches_exit_zero() {
        let mut state = ShimState::Start;
        let mut trace = vec![state];
        while !state.is_terminal() {
            state = state.on_ok();
            trace.push(state);
        }
        assert_eq!(
            trace,
            vec![
                ShimState::Start,
                ShimState::ValidatingArgs,
                ShimState::DecodingParams,
                ShimState::InvokingTask,
                ShimState::ReportingSuccess,
                ShimState::Exited(ExitStatus::Success),
            ]
        );
    }

    #[test]
    fn every_failing_phase_goes_through_reporting_error() {
        for phase in [
            ShimState::ValidatingArgs,
            ShimState::DecodingParams,
            ShimState::InvokingTask,
        ] {
            let next = phase.on_fail();
            assert_eq!(next, ShimState::ReportingError);
            assert_eq!(next.on_ok(), ShimState::Exited(ExitStatus::Failure));
        }
    }

    #[test]
    fn reporting_phases_keep_their_outcome() {
        assert_eq!(
            ShimState::ReportingSuccess.on_fail(),
            ShimState::Exited(ExitStatus::Success)
        );
        assert_eq!(
            ShimState::ReportingError.on_fail(),
            ShimState::Exited(ExitStatus::Failure)
        );
    }

    #[test]
    fn exited_is_a_fixed_point() {
        let done = ShimState::Exited(ExitStatus::Success);
        assert_eq!(done.on_ok(), done);
        assert_eq!(done.on_fail(), done);
        assert_eq!(done.exit_status(), Some(ExitStatus::Success));
    }

    #[test]
    fn display_uses_protocol_names() {
        assert_eq!(ShimState::InvokingTask.to_string(), "INVOKING_TASK");
        assert_eq!(ShimState::Exited(ExitStatus::Failure).to_string(), "EXIT(1)");
    }
}
