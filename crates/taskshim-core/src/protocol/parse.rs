//! Host-side parsing of protocol lines.
//!
//! The grammar is looser than what the shim writes: names may be bare,
//! `"double quoted"` or `'single quoted'`, the colon is optional, and values
//! that are not valid JSON are kept as plain strings.

use once_cell::sync::Lazy;
use regex::Regex;

use super::message::{DEFAULT_OUTPUT_NAME, OUTPUT_PREFIX, ProtocolMessage};

static OUTPUT_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^airplane_output(?::(?:("[^"]*")|('[^']*')|([^ ]+))?)? (.*)$"#)
        .expect("output line pattern is valid")
});

/// Does this stdout line belong to the protocol?
pub fn is_output(line: &str) -> bool {
    line.starts_with(OUTPUT_PREFIX)
}

/// Output name of a protocol line, `output` when absent or empty.
pub fn parse_output_name(line: &str) -> String {
    let Some(caps) = OUTPUT_LINE.captures(line) else {
        return DEFAULT_OUTPUT_NAME.to_string();
    };

    let name = if let Some(m) = caps.get(1) {
        m.as_str().trim_matches('"')
    } else if let Some(m) = caps.get(2) {
        m.as_str().trim_matches('\'')
    } else if let Some(m) = caps.get(3) {
        m.as_str()
    } else {
        ""
    };

    match name.trim() {
        "" => DEFAULT_OUTPUT_NAME.to_string(),
        name => name.to_string(),
    }
}

/// Value of a protocol line: JSON when it parses, else the trimmed text.
pub fn parse_output_value(line: &str) -> serde_json::Value {
    let raw = OUTPUT_LINE
        .captures(line)
        .and_then(|caps| caps.get(4))
        .map(|m| m.as_str().trim())
        .unwrap_or("");

    serde_json::from_str(raw).unwrap_or_else(|_| serde_json::Value::String(raw.to_string()))
}

/// Parse a whole line; `None` for ordinary (non-protocol) output.
pub fn parse_line(line: &str) -> Option<ProtocolMessage> {
    if !is_output(line) {
        return None;
    }
    let name = parse_output_name(line);
    let value = parse_output_value(line);
    if name == DEFAULT_OUTPUT_NAME {
        Some(ProtocolMessage::output(value))
    } else {
        Some(ProtocolMessage::named(name, value))
    }
}
