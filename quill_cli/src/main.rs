use clap::{Parser, Subcommand};
use quill_core::*;
use serde_json::Value;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "quill")]
#[command(about = "Namespaced multi-target logging utility", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable timestamps on every message
    #[arg(long, global = true)]
    timestamp: bool,

    /// Also append messages to the log file
    #[arg(long, global = true)]
    write: bool,

    /// Override the log file path
    #[arg(long, global = true)]
    logfile: Option<PathBuf>,

    /// Format for a GUI-embedded console instead of a terminal
    #[arg(long, global = true)]
    gui: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Emit one sample message per level (default)
    Demo,

    /// Emit a single message at the given level
    Emit {
        /// Level (debug, log, info, warn, error, fatal)
        #[arg(long, default_value = "log")]
        level: String,

        /// Message arguments; JSON arrays/objects become indented blocks
        args: Vec<String>,
    },
}

fn main() -> Result<()> {
    quill_core::logging::init();

    let cli = Cli::parse();
    let logger = build_logger(&cli);

    match cli.command {
        Some(Commands::Emit { ref level, ref args }) => cmd_emit(&logger, level, args),
        Some(Commands::Demo) | None => cmd_demo(&logger),
    }
}

fn build_logger(cli: &Cli) -> Logger {
    let root_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let metadata = AppMetadata::new("quill", root_dir.clone()).with_product_name("Quill");
    let caller = CallerIdentity::new("quill_cli", root_dir.join("src/main.rs"));

    let options = LoggerOptions {
        write: Some(cli.write),
        timestamp: Some(cli.timestamp),
        namespace: None,
        logfile: cli.logfile.clone(),
    };

    let host = if cli.gui {
        HostContext::GuiShell
    } else {
        HostContext::Plain
    };

    Logger::builder(metadata, caller)
        .without_config_file()
        .options(options)
        .host(host)
        .build()
}

fn cmd_demo(logger: &Logger) -> Result<()> {
    logger.debug(&[arg("debug message (visible only with QUILL_DEBUG)")]);
    logger.log(&[arg("plain message")]);
    logger.info(&[arg("informational"), arg("with body")]);
    logger.warn(&[arg("warning"), serde_json::json!(["first", "second"])]);
    logger.error(&[arg("error"), serde_json::json!({"code": 42})]);
    logger.fatal(&[arg("fatal severity label, process continues")]);
    Ok(())
}

fn cmd_emit(logger: &Logger, level: &str, raw_args: &[String]) -> Result<()> {
    let args: Vec<Value> = raw_args.iter().map(|s| parse_arg(s)).collect();

    match level.to_lowercase().as_str() {
        "debug" => logger.debug(&args),
        "log" | "normal" => logger.log(&args),
        "info" | "information" => logger.info(&args),
        "warn" | "warning" => logger.warn(&args),
        "error" => logger.error(&args),
        "fatal" => logger.fatal(&args),
        other => {
            eprintln!("Unknown level: {}. Using log.", other);
            logger.log(&args);
        }
    }
    Ok(())
}

/// Parse a CLI argument as JSON, falling back to a plain string
fn parse_arg(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

fn arg(s: &str) -> Value {
    Value::String(s.to_string())
}
