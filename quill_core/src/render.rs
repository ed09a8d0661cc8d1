//! Medium-specific rendering of a message model.
//!
//! Terminal output is styled via ANSI truecolor, browser output is a
//! template string plus an ordered list of inline style directives for a
//! `%c`-substituting console API, and file output is plain text.

use crate::message::LogMessage;
use crate::registry::Registry;
use crate::{LogLevel, LogMedium, LoggerConfig};
use colored::Colorize;
use serde_json::Value;

/// Template plus matching style directives for a browser console.
///
/// `styles` always holds one entry per `%c` placeholder in `template`, in
/// order, so the pair can be handed to the console API unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrowserMessage {
    pub template: String,
    pub styles: Vec<String>,
}

/// Build and render a message in one step, returning the medium's string
/// form (for the browser medium this is the bare template).
pub fn format_message(
    medium: LogMedium,
    level: LogLevel,
    args: &[Value],
    config: &LoggerConfig,
    registry: &Registry,
) -> String {
    let msg = LogMessage::build(medium, level, args, config, registry);
    match medium {
        LogMedium::Terminal => render_terminal(&msg),
        LogMedium::Browser => render_browser(&msg).template,
        LogMedium::File => render_file(&msg),
    }
}

/// Styled terminal line: icon, namespace, `|`, bold title, body, stamp.
///
/// The namespace is underlined on thread 0 and plain on thread 1; namespace,
/// title, and body all take the level color. Empty fields are dropped before
/// joining so the output never carries double spaces.
pub fn render_terminal(msg: &LogMessage) -> String {
    let (r, g, b) = msg.color_rgb;

    let namespace = if msg.thread == 0 {
        msg.namespace.truecolor(r, g, b).underline()
    } else {
        msg.namespace.truecolor(r, g, b)
    };

    let mut parts: Vec<String> = Vec::new();
    if !msg.icon.is_empty() {
        parts.push(msg.icon.to_string());
    }
    if !msg.namespace.is_empty() {
        parts.push(namespace.to_string());
    }
    parts.push("|".to_string());
    if !msg.title.is_empty() {
        parts.push(msg.title.truecolor(r, g, b).bold().to_string());
    }
    if !msg.body.is_empty() {
        parts.push(msg.body.truecolor(r, g, b).to_string());
    }
    if !msg.stamp.is_empty() {
        parts.push(msg.stamp.clone());
    }

    parts.join(" ").trim().to_string()
}

/// Browser template with five fixed style slots: namespace, separator,
/// title, body, stamp.
///
/// Absent fields contribute an empty string and an empty style so the
/// directive positions always line up with the placeholders.
pub fn render_browser(msg: &LogMessage) -> BrowserMessage {
    let (r, g, b) = msg.color_rgb;

    let namespace_style = format!(
        "background: rgba({r},{g},{b},0.2); color: rgba({r},{g},{b},1.0); padding: 0 4px; border-radius: 2px"
    );
    let title_style = format!("color: rgb({r},{g},{b}); font-weight: bold");
    let body_style = format!("color: rgb({r},{g},{b})");
    let stamp_style = format!("color: rgba({r},{g},{b},0.6)");

    let slots: [(&str, String); 5] = [
        (msg.namespace.as_str(), namespace_style),
        ("|", String::new()),
        (msg.title.as_str(), title_style),
        (msg.body.as_str(), body_style),
        (msg.stamp.as_str(), stamp_style),
    ];

    let mut template = String::new();
    if !msg.icon.is_empty() {
        template.push_str(msg.icon);
        template.push(' ');
    }

    let mut styles = Vec::with_capacity(slots.len());
    for (text, style) in slots {
        template.push_str("%c");
        if text.is_empty() {
            styles.push(String::new());
        } else {
            template.push_str(text);
            template.push(' ');
            styles.push(style);
        }
    }

    BrowserMessage {
        template: template.trim_end().to_string(),
        styles,
    }
}

/// Plain file line: uppercased level, medium label, `|`, namespace, title,
/// body, with no color codes.
pub fn render_file(msg: &LogMessage) -> String {
    let level = msg.level.name().to_uppercase();

    let mut parts: Vec<&str> = Vec::new();
    parts.push(&level);
    parts.push(msg.medium.label());
    parts.push("|");
    if !msg.namespace.is_empty() {
        parts.push(&msg.namespace);
    }
    if !msg.title.is_empty() {
        parts.push(&msg.title);
    }
    if !msg.body.is_empty() {
        parts.push(&msg.body);
    }

    parts.join(" ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config(namespace: &str, timestamp: bool) -> LoggerConfig {
        LoggerConfig {
            write: false,
            timestamp,
            namespace: namespace.into(),
            logfile: "/tmp/test.log".into(),
        }
    }

    fn seeded_registry(namespaces: &[&str]) -> Registry {
        let registry = Registry::new();
        for (i, ns) in namespaces.iter().enumerate() {
            registry.register(&format!("/app/{}.rs", i), config(ns, false));
        }
        registry
    }

    fn plain_message(level: LogLevel, args: &[Value]) -> LogMessage {
        let registry = seeded_registry(&["app|main.rs"]);
        LogMessage::build(
            LogMedium::Terminal,
            level,
            args,
            &config("app|main.rs", false),
            &registry,
        )
    }

    #[test]
    fn test_terminal_contains_namespace_once() {
        colored::control::set_override(false);
        let msg = plain_message(LogLevel::Information, &[json!("hello"), json!("world")]);
        let line = render_terminal(&msg);
        assert_eq!(line.matches("app|main.rs").count(), 1);
        assert!(line.contains("hello"));
        assert!(line.contains("world"));
        assert!(!line.ends_with(' '));
    }

    #[test]
    fn test_terminal_ends_with_stamp_only_when_enabled() {
        colored::control::set_override(false);
        let registry = seeded_registry(&["A"]);

        let without = LogMessage::build(
            LogMedium::Terminal,
            LogLevel::Normal,
            &[json!("x")],
            &config("A", false),
            &registry,
        );
        assert!(!render_terminal(&without).ends_with("ms"));

        let with = LogMessage::build(
            LogMedium::Terminal,
            LogLevel::Normal,
            &[json!("x")],
            &config("A", true),
            &registry,
        );
        assert!(render_terminal(&with).ends_with("ms"));
    }

    #[test]
    fn test_terminal_formatting_is_idempotent() {
        colored::control::set_override(false);
        let registry = seeded_registry(&["A"]);
        let build = || {
            LogMessage::build(
                LogMedium::Terminal,
                LogLevel::Warning,
                &[json!("again"), json!("and again")],
                &config("A", false),
                &registry,
            )
        };
        assert_eq!(render_terminal(&build()), render_terminal(&build()));
    }

    #[test]
    fn test_browser_styles_align_with_placeholders() {
        let msg = plain_message(LogLevel::Error, &[json!("oops")]);
        let rendered = render_browser(&msg);
        assert_eq!(rendered.template.matches("%c").count(), rendered.styles.len());
        assert_eq!(rendered.styles.len(), 5);
        // body and stamp are absent: empty style, no text
        assert_eq!(rendered.styles[3], "");
        assert_eq!(rendered.styles[4], "");
        assert!(rendered.template.ends_with("%c%c"));
        assert!(rendered.template.contains("oops"));
    }

    #[test]
    fn test_browser_namespace_style_has_two_opacities() {
        let msg = plain_message(LogLevel::Information, &[json!("x")]);
        let rendered = render_browser(&msg);
        assert!(rendered.styles[0].contains("0.2"));
        assert!(rendered.styles[0].contains("1.0"));
        assert!(rendered.template.contains("app|main.rs"));
    }

    #[test]
    fn test_file_line_is_plain_and_ordered() {
        let registry = seeded_registry(&["app|main.rs"]);
        let msg = LogMessage::build(
            LogMedium::File,
            LogLevel::Warning,
            &[json!("title"), json!("body text")],
            &config("app|main.rs", false),
            &registry,
        );
        let line = render_file(&msg);
        assert_eq!(line, "WARNING File | app|main.rs title body text");
        assert!(!line.contains('\u{1b}'));
    }

    #[test]
    fn test_file_line_drops_empty_fields() {
        let registry = seeded_registry(&["ns"]);
        let msg = LogMessage::build(
            LogMedium::File,
            LogLevel::Fatal,
            &[json!("only")],
            &config("ns", false),
            &registry,
        );
        assert_eq!(render_file(&msg), "FATAL File | ns only");
    }

    #[test]
    fn test_format_message_dispatches_by_medium() {
        colored::control::set_override(false);
        let registry = seeded_registry(&["ns"]);
        let cfg = config("ns", false);

        let file = format_message(LogMedium::File, LogLevel::Normal, &[json!("m")], &cfg, &registry);
        assert!(file.starts_with("NORMAL File"));

        let browser =
            format_message(LogMedium::Browser, LogLevel::Normal, &[json!("m")], &cfg, &registry);
        assert!(browser.contains("%c"));

        let terminal =
            format_message(LogMedium::Terminal, LogLevel::Normal, &[json!("m")], &cfg, &registry);
        assert!(!terminal.contains("%c"));
    }
}
