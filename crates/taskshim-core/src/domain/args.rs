//! InvocationArgs - プロセス引数の検証と取り出し
//!
//! argv は必ず 3 要素:
//! - index 0: バイナリ
//! - index 1: entrypoint（TaskLoader が解決する module identifier）
//! - index 2: JSON payload

use super::errors::ShimError;

/// 期待する argv の長さ
pub const EXPECTED_ARG_COUNT: usize = 3;

/// 引数の数が合わないときにホストへ返す固定メッセージ
pub const MISCONFIGURED_ARGS_MESSAGE: &str =
    "Expected to receive a single argument (via {{JSON}}). Task CLI arguments may be misconfigured.";

/// 検証済みの argv
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationArgs {
    program: String,
    entrypoint: String,
    payload: String,
}

impl InvocationArgs {
    /// argv を検証して InvocationArgs を作る
    ///
    /// 長さが 3 でなければ `ShimError::MisconfiguredArgs`（task のエラーではなく設定ミス）。
    pub fn parse<I, S>(argv: I) -> Result<Self, ShimError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let argv: Vec<String> = argv.into_iter().map(Into::into).collect();
        let got = argv.len();
        let [program, entrypoint, payload]: [String; EXPECTED_ARG_COUNT] = argv
            .try_into()
            .map_err(|_| ShimError::MisconfiguredArgs { got })?;

        Ok(Self {
            program,
            entrypoint,
            payload,
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn entrypoint(&self) -> &str {
        &self.entrypoint
    }

    /// デコード前の payload（argv[2]）
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// payload を JSON としてデコード
    ///
    /// スキーマは見ない。検証は task 側の責務。
    pub fn decode_params(&self) -> Result<serde_json::Value, ShimError> {
        serde_json::from_str(self.payload()).map_err(ShimError::Decode)
    }
}
