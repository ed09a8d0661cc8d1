//! Logger factory and instance.
//!
//! Creating a logger merges caller options with defaults, derives the
//! caller's namespace, registers the configuration, and (on the very first
//! registration) writes the log-file header. The instance exposes one
//! method per level plus raw formatting.
//!
//! Nothing here propagates an error into caller code: sink failures are
//! reported on the error channel and absorbed.

use crate::config::{ConfigFile, Gates, LoggerConfig, LoggerOptions};
use crate::message::LogMessage;
use crate::registry::Registry;
use crate::render;
use crate::sink::{FileSink, LineSink};
use crate::{AppMetadata, CallerIdentity, HostContext, LogLevel, LogMedium};
use serde_json::Value;
use std::sync::Arc;

/// Console output capability.
///
/// The host decides what to do with the rendered text; a GUI shell passes
/// `styles` to its `%c`-substituting console API, a plain process ignores
/// them.
pub trait Console: Send + Sync {
    fn emit(&self, text: &str, styles: &[String]);
}

/// Default console: prints the text to stdout and ignores style directives
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn emit(&self, text: &str, _styles: &[String]) {
        println!("{}", text);
    }
}

/// A configured logger bound to one caller
pub struct Logger {
    config: LoggerConfig,
    registry: Arc<Registry>,
    gates: Gates,
    host: HostContext,
    console: Arc<dyn Console>,
}

impl Logger {
    /// Start building a logger for the given application and caller
    pub fn builder(metadata: AppMetadata, caller: CallerIdentity) -> LoggerBuilder {
        LoggerBuilder {
            metadata,
            caller,
            options: LoggerOptions::default(),
            use_config_file: true,
            registry: None,
            gates: None,
            host: HostContext::default(),
            console: None,
        }
    }

    /// The resolved configuration
    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// Format arguments for the console medium without emitting anything
    pub fn format(&self, level: LogLevel, args: &[Value]) -> String {
        render::format_message(
            self.host.console_medium(),
            level,
            args,
            &self.config,
            &self.registry,
        )
    }

    pub fn debug(&self, args: &[Value]) {
        if !self.gates.debug {
            return;
        }
        self.emit(LogLevel::Debug, args);
    }

    pub fn log(&self, args: &[Value]) {
        self.emit(LogLevel::Normal, args);
    }

    pub fn info(&self, args: &[Value]) {
        self.emit(LogLevel::Information, args);
    }

    pub fn warn(&self, args: &[Value]) {
        self.emit(LogLevel::Warning, args);
    }

    pub fn error(&self, args: &[Value]) {
        self.emit(LogLevel::Error, args);
    }

    pub fn fatal(&self, args: &[Value]) {
        self.emit(LogLevel::Fatal, args);
    }

    /// Whether a call would write to the log file
    fn file_writes_enabled(&self) -> bool {
        self.config.write && !self.gates.no_log
    }

    fn emit(&self, level: LogLevel, args: &[Value]) {
        if args.is_empty() {
            return;
        }

        // Console first, synchronously and in call order.
        let medium = self.host.console_medium();
        match medium {
            LogMedium::Browser => {
                let msg = LogMessage::build(medium, level, args, &self.config, &self.registry);
                let rendered = render::render_browser(&msg);
                self.console.emit(&rendered.template, &rendered.styles);
            }
            _ => {
                let msg = LogMessage::build(medium, level, args, &self.config, &self.registry);
                self.console.emit(&render::render_terminal(&msg), &[]);
            }
        }

        // Then the file variant, best-effort.
        if self.file_writes_enabled() {
            let msg =
                LogMessage::build(LogMedium::File, level, args, &self.config, &self.registry);
            let sink = FileSink::new(&self.config.logfile);
            if let Err(e) = sink.append(&render::render_file(&msg)) {
                tracing::error!("Failed to append to {:?}: {}", self.config.logfile, e);
            }
        }
    }
}

/// Builder collecting options and injected collaborators
pub struct LoggerBuilder {
    metadata: AppMetadata,
    caller: CallerIdentity,
    options: LoggerOptions,
    use_config_file: bool,
    registry: Option<Arc<Registry>>,
    gates: Option<Gates>,
    host: HostContext,
    console: Option<Arc<dyn Console>>,
}

impl LoggerBuilder {
    /// Override configuration fields for this logger
    pub fn options(mut self, options: LoggerOptions) -> Self {
        self.options = options;
        self
    }

    /// Skip loading defaults from the user's config file
    pub fn without_config_file(mut self) -> Self {
        self.use_config_file = false;
        self
    }

    /// Use a specific registry instead of the process-global one
    pub fn registry(mut self, registry: Arc<Registry>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Use specific gates instead of reading the environment
    pub fn gates(mut self, gates: Gates) -> Self {
        self.gates = Some(gates);
        self
    }

    /// Declare the host context (plain process vs GUI shell)
    pub fn host(mut self, host: HostContext) -> Self {
        self.host = host;
        self
    }

    /// Use a specific console capability
    pub fn console(mut self, console: Arc<dyn Console>) -> Self {
        self.console = Some(console);
        self
    }

    /// Resolve configuration, register the caller, and produce the logger
    pub fn build(self) -> Logger {
        let registry = self.registry.unwrap_or_else(Registry::global);
        let gates = self.gates.unwrap_or_else(Gates::from_env);

        // Defaults, then config-file options, then caller options.
        let mut layered = LoggerOptions::default();
        if self.use_config_file {
            match ConfigFile::load() {
                Ok(file) => layered = file.logger,
                Err(e) => tracing::warn!("Ignoring unreadable config file: {}", e),
            }
        }
        let layered = layered.overridden_by(&self.options);

        let mut config = layered.apply_to(LoggerConfig::defaults(self.metadata.display_name()));
        if config.namespace.is_empty() {
            config.namespace = derive_namespace(&self.metadata, &self.caller);
        }

        registry.register(&self.caller.key(), config.clone());

        // The header claim stays open until a registration with file
        // writing enabled, and fires at most once per registry.
        if config.write && !gates.no_log && registry.claim_header() {
            let sink = FileSink::new(&config.logfile);
            if let Err(e) = sink.append_header() {
                tracing::error!("Failed to write log header to {:?}: {}", config.logfile, e);
            }
        }

        Logger {
            config,
            registry,
            gates,
            host: self.host,
            console: self.console.unwrap_or_else(|| Arc::new(StdoutConsole)),
        }
    }
}

/// Namespace for a caller: `<app display name>|…/<file>` for modules under
/// the application's own tree, `<package>|<file>` for third-party callers.
fn derive_namespace(metadata: &AppMetadata, caller: &CallerIdentity) -> String {
    if metadata.is_local(caller) {
        format!("{}|…/{}", metadata.display_name(), caller.file_name())
    } else {
        format!("{}|{}", caller.package, caller.file_name())
    }
}
