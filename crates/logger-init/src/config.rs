//! crates/logger-init/src/config.rs
//! Optional configuration values and the fluent builder that accumulates them.

use crate::boundary;
use crate::levels::LogLevel;

/// Accumulated configuration for the default logger.
///
/// Every field is independently optional. `None` means "not configured":
/// the receiving runtime substitutes its own documented default for such a
/// field, and this side never coalesces an unset field into a concrete
/// value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoggerConfig {
    /// Context name tagging all records emitted through the logger.
    pub context: Option<String>,
    /// Whether records carry the originating module name.
    pub show_module: Option<bool>,
    /// Whether records carry the originating source file.
    pub show_file: Option<bool>,
    /// Whether records carry the originating line number.
    pub show_line: Option<bool>,
    /// Minimum severity threshold for emitted records.
    pub level: Option<LogLevel>,
}

/// Fluent builder for the process-wide default logger.
///
/// Setters take the builder by value and return it, so calls chain. The
/// last write wins for every field. The terminal
/// [`set_as_default_logger`](Self::set_as_default_logger) consumes the
/// builder, so a finalized builder cannot be reused.
///
/// ```ignore
/// use logger_init::{LogLevel, LoggerConfigBuilder};
///
/// LoggerConfigBuilder::new()
///     .context("APPL")
///     .show_file(true)
///     .level(LogLevel::Warn)
///     .set_as_default_logger();
/// ```
#[derive(Clone, Debug, Default)]
pub struct LoggerConfigBuilder {
    config: LoggerConfig,
}

impl LoggerConfigBuilder {
    /// Creates a builder with every field unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the context name tagging all subsequent records.
    ///
    /// Any text is accepted; no length or charset validation happens at
    /// this layer.
    #[must_use]
    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.config.context = Some(context.into());
        self
    }

    /// Sets whether records carry the originating module name.
    #[must_use]
    pub fn show_module(mut self, show_module: bool) -> Self {
        self.config.show_module = Some(show_module);
        self
    }

    /// Sets whether records carry the originating source file.
    #[must_use]
    pub fn show_file(mut self, show_file: bool) -> Self {
        self.config.show_file = Some(show_file);
        self
    }

    /// Sets whether records carry the originating line number.
    #[must_use]
    pub fn show_line(mut self, show_line: bool) -> Self {
        self.config.show_line = Some(show_line);
        self
    }

    /// Sets the minimum severity threshold.
    #[must_use]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.config.level = Some(level);
        self
    }

    /// Returns the accumulated configuration without touching the boundary.
    #[must_use]
    pub fn build(self) -> LoggerConfig {
        self.config
    }

    /// Installs the accumulated configuration as the process-wide default
    /// logger.
    ///
    /// Blocks until the synchronous boundary call returns. The call cannot
    /// fail locally and reports nothing back: whether the receiving runtime
    /// accepted the installation is not observable here.
    pub fn set_as_default_logger(self) {
        boundary::install(&self.config);
    }
}
