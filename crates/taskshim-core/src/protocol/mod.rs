//! Protocol - `airplane_output` 行プロトコル
//!
//! stdout には task の普通の出力が自由に混ざる。ホストは `airplane_output` で始まる行だけを拾う。
//!
//! - `message`: shim 側の書き出し（ProtocolMessage）
//! - `parse`: ホスト側の読み取り（出力名と値の取り出し）

pub mod message;
pub mod parse;

pub use self::message::{ProtocolMessage, DEFAULT_OUTPUT_NAME, ERROR_OUTPUT_NAME, OUTPUT_PREFIX};
pub use self::parse::{is_output, parse_line, parse_output_name, parse_output_value};
