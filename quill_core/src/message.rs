//! Per-call message model.
//!
//! Derives everything a renderer needs from a call site: style, namespace,
//! thread parity, title, body, and the optional elapsed-time stamp. A
//! `LogMessage` lives only for the duration of formatting one call.
//!
//! Arguments are `serde_json::Value`, a closed tagged variant over scalars,
//! sequences, and keyed records. The owned tree cannot contain reference
//! cycles, so the depth-first record serializer needs no visited set.

use crate::registry::Registry;
use crate::style::style;
use crate::{LogLevel, LogMedium, LoggerConfig};
use serde_json::Value;

/// Everything derived for one log call, ready for rendering
#[derive(Clone, Debug)]
pub struct LogMessage {
    pub medium: LogMedium,
    pub level: LogLevel,
    pub icon: &'static str,
    pub color_name: &'static str,
    pub color_rgb: (u8, u8, u8),
    pub namespace: String,
    pub thread: u8,
    pub title: String,
    pub body: String,
    pub stamp: String,
}

impl LogMessage {
    /// Build the message model for one call.
    ///
    /// `registry` supplies the ordered namespace list for thread parity and
    /// the shared elapsed-time cursor.
    pub fn build(
        medium: LogMedium,
        level: LogLevel,
        args: &[Value],
        config: &LoggerConfig,
        registry: &Registry,
    ) -> LogMessage {
        let entry = style(level);
        let namespace = config.namespace.clone();
        let thread = thread_parity(&namespace, &registry.namespaces());

        let (title, body) = split_title_body(args, medium.indent());

        let stamp = if config.timestamp {
            format!("+{:.4}ms", registry.elapsed_ms())
        } else {
            String::new()
        };

        LogMessage {
            medium,
            level,
            icon: entry.icon,
            color_name: entry.color_name,
            color_rgb: entry.color_rgb,
            namespace,
            thread,
            title,
            body,
            stamp,
        }
    }
}

/// Thread parity from the position of a namespace in the registered list.
///
/// An absent namespace has index -1, and `-1 & 1` is 1 under two's
/// complement. The bitwise rule is deliberate and load-bearing; it is not
/// the same as "even/odd of count".
pub fn thread_parity(namespace: &str, namespaces: &[String]) -> u8 {
    let index = namespaces
        .iter()
        .position(|n| n == namespace)
        .map(|i| i as i64)
        .unwrap_or(-1);
    (index & 1) as u8
}

/// Expand arguments to strings and split them into title and body.
///
/// Structured values become multi-line indented blocks; scalar coercion to
/// string form is inherent in the expansion, so anything preceding a block
/// concatenates cleanly. With more than one argument the first becomes the
/// title and the rest join with spaces; a single argument is title-only.
/// A title equal to the body clears the body, and an empty title takes the
/// body's value.
fn split_title_body(args: &[Value], indent: usize) -> (String, String) {
    let mut parts: Vec<String> = args.iter().map(|arg| expand_value(arg, indent)).collect();

    let (mut title, mut body) = if parts.len() > 1 {
        let title = parts.remove(0);
        (title, parts.join(" "))
    } else {
        (parts.pop().unwrap_or_default(), String::new())
    };

    if title == body {
        body.clear();
    }
    if title.is_empty() {
        title = std::mem::take(&mut body);
    }

    (title, body)
}

/// Render one argument as a string for the given indent width
fn expand_value(value: &Value, indent: usize) -> String {
    match value {
        Value::Array(items) => render_sequence(items, indent),
        Value::Object(_) => render_record(value, indent),
        scalar => scalar_text(scalar),
    }
}

/// Scalar display form: strings unquoted, everything else via JSON syntax
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Sequence block: comma-joined elements, one per line, indented `indent+2`
fn render_sequence(items: &[Value], indent: usize) -> String {
    let pad = " ".repeat(indent + 2);
    let lines: Vec<String> = items
        .iter()
        .map(|item| match item {
            Value::Array(_) | Value::Object(_) => format!("{}{}", pad, item),
            scalar => format!("{}{}", pad, scalar_text(scalar)),
        })
        .collect();
    format!("\n{}", lines.join(",\n"))
}

/// Record block: full-depth pretty serialization with every line re-indented
fn render_record(value: &Value, indent: usize) -> String {
    let pretty = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
    let pad = " ".repeat(indent);
    let lines: Vec<String> = pretty.lines().map(|l| format!("{}{}", pad, l)).collect();
    format!("\n{}", lines.join("\n"))
}
