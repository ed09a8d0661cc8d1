//! Process-wide configuration registry.
//!
//! Maps caller identity to logger configuration while preserving insertion
//! order; the ordered namespace list is the sole source of truth for thread
//! parity. Also owns the shared elapsed-time cursor used for timestamps.
//!
//! The registry is an explicitly owned service passed to loggers at
//! construction. A process-global default instance exists for applications
//! that want ambient sharing; tests construct their own.

use crate::LoggerConfig;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Instant;

static GLOBAL: Lazy<Arc<Registry>> = Lazy::new(|| Arc::new(Registry::new()));

#[derive(Default)]
struct Inner {
    order: Vec<String>,
    configs: HashMap<String, LoggerConfig>,
    last_stamp: Option<Instant>,
    header_written: bool,
}

/// Ordered caller-path to configuration map with a shared timestamp cursor
#[derive(Default)]
pub struct Registry {
    inner: Mutex<Inner>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-global default registry
    pub fn global() -> Arc<Registry> {
        GLOBAL.clone()
    }

    /// Insert or overwrite the configuration for a caller path.
    ///
    /// Overwriting keeps the caller's original insertion position. Returns
    /// true iff the registry was empty beforehand.
    pub fn register(&self, caller_path: &str, config: LoggerConfig) -> bool {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        let first = inner.order.is_empty();
        if !inner.configs.contains_key(caller_path) {
            inner.order.push(caller_path.to_string());
        }
        inner.configs.insert(caller_path.to_string(), config);
        first
    }

    /// Claim the one-time log-file header.
    ///
    /// Returns true exactly once per registry, atomically. The claim is
    /// deferred until a write-enabled logger asks for it, so a process
    /// whose earliest loggers never write still gets its header before the
    /// first persisted message line.
    pub fn claim_header(&self) -> bool {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        let claimed = !inner.header_written;
        inner.header_written = true;
        claimed
    }

    /// Namespaces of every registered configuration, in registration order.
    ///
    /// Returns a snapshot so one message construction reads a consistent
    /// list.
    pub fn namespaces(&self) -> Vec<String> {
        let inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner
            .order
            .iter()
            .filter_map(|path| inner.configs.get(path))
            .map(|config| config.namespace.clone())
            .collect()
    }

    /// Number of registered callers
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fractional milliseconds elapsed since the previous call.
    ///
    /// The cursor is shared across all namespaces: the first call
    /// initializes it and yields zero, and every call resets it, so the
    /// value is inter-call elapsed time rather than a per-message duration.
    pub fn elapsed_ms(&self) -> f64 {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        let now = Instant::now();
        let elapsed = inner
            .last_stamp
            .map(|prev| now.duration_since(prev).as_secs_f64() * 1000.0)
            .unwrap_or(0.0);
        inner.last_stamp = Some(now);
        elapsed
    }
}
