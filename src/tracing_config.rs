//! Opt-in log output for inspecting synthesis decisions.
//!
//! `DECLASS_LOG` (falling back to `RUST_LOG`) holds the filter directives and
//! `DECLASS_LOG_FORMAT` picks the output shape:
//!
//! - `text` (default): flat `fmt` lines
//! - `tree`: indented span hierarchy via `tracing-tree`
//! - `json`: one JSON object per event
//!
//! ```bash
//! # Every synthesized decorator, grouped by member
//! DECLASS_LOG=declass_synth=trace DECLASS_LOG_FORMAT=tree my-codemod app/
//!
//! # Only suppressed members and dropped names
//! DECLASS_LOG=declass_synth=debug my-codemod app/
//! ```
//!
//! Nothing is installed unless one of the filter variables is set.

use tracing::Dispatch;
use tracing::dispatcher::SetGlobalDefaultError;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Log output shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Flat text lines (default).
    Text,
    /// Hierarchical indented tree via `tracing-tree`.
    Tree,
    /// Newline-delimited JSON objects.
    Json,
}

impl LogFormat {
    /// Parse a `DECLASS_LOG_FORMAT` value; anything unrecognised is `Text`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// What `init_tracing` would install, read from a variable lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub format: LogFormat,
    pub directives: String,
}

impl LogSettings {
    /// `None` when neither `DECLASS_LOG` nor `RUST_LOG` is present.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let directives = lookup("DECLASS_LOG").or_else(|| lookup("RUST_LOG"))?;
        let format = lookup("DECLASS_LOG_FORMAT")
            .map(|value| LogFormat::parse(&value))
            .unwrap_or(LogFormat::Text);
        Some(Self { format, directives })
    }

    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the subscriber without installing it.
    pub fn dispatch(&self) -> Dispatch {
        build_dispatch(self.format, &self.directives)
    }

    /// Install as the process-wide subscriber.
    pub fn install(&self) -> Result<(), SetGlobalDefaultError> {
        tracing::dispatcher::set_global_default(self.dispatch())
    }
}

/// A stderr subscriber in `format`, filtered by `directives`.
///
/// Unparseable directives are skipped rather than rejected.
pub fn build_dispatch(format: LogFormat, directives: &str) -> Dispatch {
    let filter = EnvFilter::builder().parse_lossy(directives);
    let registry = Registry::default().with(filter);

    match format {
        LogFormat::Tree => Dispatch::new(
            registry.with(
                tracing_tree::HierarchicalLayer::new(2)
                    .with_writer(std::io::stderr)
                    .with_indent_lines(true)
                    .with_deferred_spans(true)
                    .with_targets(true),
            ),
        ),
        LogFormat::Json => Dispatch::new(
            registry.with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_writer(std::io::stderr),
            ),
        ),
        LogFormat::Text => Dispatch::new(
            registry.with(fmt::layer().with_target(true).with_writer(std::io::stderr)),
        ),
    }
}

/// Install the subscriber described by the environment, if any.
///
/// Returns `false` when logging is not requested or a subscriber is already
/// installed; a driver's own subscriber always wins.
pub fn init_tracing() -> bool {
    let Some(settings) = LogSettings::from_env() else {
        return false;
    };
    match settings.install() {
        Ok(()) => true,
        Err(err) => {
            tracing::debug!(%err, "global subscriber already installed");
            false
        }
    }
}

#[cfg(test)]
#[path = "../tests/tracing_config.rs"]
mod tests;
