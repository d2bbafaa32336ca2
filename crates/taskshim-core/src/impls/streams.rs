//! StdStreams / CaptureStreams

use std::io::{self, Write};

use parking_lot::Mutex;

use crate::ports::Streams;

/// プロセスの stdout / stderr に書く
///
/// 行ごとに lock を取るので、1 行が他の出力と混ざって分断されることはない。
/// flush は `flush()` でまとめて行う。書けた行が flush 失敗で取り消されることはない。
#[derive(Debug, Default, Clone, Copy)]
pub struct StdStreams;

impl Streams for StdStreams {
    fn stdout_line(&self, line: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{line}")
    }

    fn stderr(&self, text: &str) -> io::Result<()> {
        let mut err = io::stderr().lock();
        writeln!(err, "{text}")
    }

    fn flush(&self) -> io::Result<()> {
        io::stdout().flush()?;
        io::stderr().flush()
    }
}

/// メモリ上にキャプチャする Streams
#[derive(Debug, Default)]
pub struct CaptureStreams {
    stdout: Mutex<Vec<String>>,
    stderr: Mutex<Vec<String>>,
}

impl CaptureStreams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stdout_lines(&self) -> Vec<String> {
        self.stdout.lock().clone()
    }

    pub fn stderr_text(&self) -> String {
        self.stderr.lock().join("\n")
    }
}

impl Streams for CaptureStreams {
    fn stdout_line(&self, line: &str) -> io::Result<()> {
        self.stdout.lock().push(line.to_string());
        Ok(())
    }

    fn stderr(&self, text: &str) -> io::Result<()> {
        self.stderr.lock().push(text.to_string());
        Ok(())
    }

    fn flush(&self) -> io::Result<()> {
        Ok(())
    }
}
