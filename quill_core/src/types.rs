//! Core domain types for the Quill logging system.
//!
//! This module defines the fundamental types used throughout the system:
//! - Log levels and output media
//! - Host context (plain process vs GUI shell)
//! - Caller identity and application metadata

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Level and Medium
// ============================================================================

/// Severity of a log message
///
/// `Fatal` is a severity label only; nothing in the engine terminates the
/// process.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Debug,
    Normal,
    Information,
    Warning,
    Error,
    Fatal,
}

impl LogLevel {
    /// All levels, in severity order
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Debug,
        LogLevel::Normal,
        LogLevel::Information,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Fatal,
    ];

    /// Lowercase level name
    pub fn name(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Normal => "normal",
            LogLevel::Information => "information",
            LogLevel::Warning => "warning",
            LogLevel::Error => "error",
            LogLevel::Fatal => "fatal",
        }
    }
}

/// Output medium a message is rendered for
///
/// The medium determines the rendering strategy only; message derivation is
/// identical apart from the indent width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogMedium {
    Terminal,
    Browser,
    File,
}

impl LogMedium {
    /// Capitalized medium label, used verbatim in file-medium lines
    pub fn label(&self) -> &'static str {
        match self {
            LogMedium::Terminal => "Terminal",
            LogMedium::Browser => "Browser",
            LogMedium::File => "File",
        }
    }

    /// Fixed prefix width used to indent structured values in the body.
    ///
    /// Non-browser media carry a longer fixed-format prefix, so their blocks
    /// indent deeper.
    pub fn indent(&self) -> usize {
        match self {
            LogMedium::Browser => 4,
            LogMedium::Terminal | LogMedium::File => 8,
        }
    }
}

// ============================================================================
// Host context
// ============================================================================

/// Where the process is running, which selects the console medium
///
/// A process embedded in a GUI shell gets browser-style formatting; a plain
/// process gets terminal formatting. This is supplied by the host rather
/// than detected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HostContext {
    #[default]
    Plain,
    GuiShell,
}

impl HostContext {
    /// Console medium for this context
    pub fn console_medium(&self) -> LogMedium {
        match self {
            HostContext::Plain => LogMedium::Terminal,
            HostContext::GuiShell => LogMedium::Browser,
        }
    }
}

// ============================================================================
// Caller identity and application metadata
// ============================================================================

/// Identity of the module creating a logger
///
/// Callers supply their own package name and module path explicitly; the
/// engine never inspects the call stack.
#[derive(Clone, Debug)]
pub struct CallerIdentity {
    pub package: String,
    pub path: PathBuf,
}

impl CallerIdentity {
    pub fn new(package: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            package: package.into(),
            path: path.into(),
        }
    }

    /// Final path component, used in namespace derivation
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|f| f.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.to_string_lossy().into_owned())
    }

    /// Registry key for this caller
    pub fn key(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }
}

/// Metadata of the consuming application
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppMetadata {
    pub name: String,
    pub product_name: Option<String>,
    /// Directory tree the application's own modules live under
    pub root_dir: PathBuf,
}

impl AppMetadata {
    pub fn new(name: impl Into<String>, root_dir: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            product_name: None,
            root_dir: root_dir.into(),
        }
    }

    pub fn with_product_name(mut self, product_name: impl Into<String>) -> Self {
        self.product_name = Some(product_name.into());
        self
    }

    /// Display name: `product_name` falling back to `name`
    pub fn display_name(&self) -> &str {
        self.product_name.as_deref().unwrap_or(&self.name)
    }

    /// Whether a caller path belongs to the application's own tree
    pub fn is_local(&self, caller: &CallerIdentity) -> bool {
        caller.path.starts_with(&self.root_dir)
    }
}
