#![forbid(unsafe_code)]

//! Core engine for the Quill namespaced, multi-target logger.
//!
//! This crate provides:
//! - Level/medium/style domain types
//! - The per-caller configuration registry (thread parity, header trigger)
//! - Message model derivation (namespace, title/body, elapsed stamps)
//! - Terminal, browser-console, and file rendering
//! - The logger factory and the locked file-append sink

pub mod types;
pub mod error;
pub mod style;
pub mod config;
pub mod registry;
pub mod message;
pub mod render;
pub mod sink;
pub mod logger;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use style::{style, StyleEntry};
pub use config::{ConfigFile, Gates, LoggerConfig, LoggerOptions};
pub use registry::Registry;
pub use message::LogMessage;
pub use render::{format_message, BrowserMessage};
pub use sink::{FileSink, LineSink};
pub use logger::{Console, Logger, LoggerBuilder, StdoutConsole};
