//! Streams port - stdout / stderr の抽象化

use std::io;

/// Streams はプロセスの標準出力と診断出力
///
/// `&self` で書けるようにして、Shim と StdoutReporter で共有できるようにしている。
pub trait Streams: Send + Sync {
    /// stdout に 1 行書く（改行は実装側で付ける）
    fn stdout_line(&self, line: &str) -> io::Result<()>;

    /// stderr に書く（人間向けのデバッグ情報）
    fn stderr(&self, text: &str) -> io::Result<()>;

    /// 終了前に呼ぶ
    fn flush(&self) -> io::Result<()>;
}
