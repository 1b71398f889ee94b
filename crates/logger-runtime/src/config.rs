//! crates/logger-runtime/src/config.rs
//! Owned configuration record and its documented defaults.

use logger_init::LogLevel;

/// Configuration installed as the process-wide default logger.
///
/// Unlike the caller-side value set, every field here is concrete: the
/// install entry point substitutes the defaults below for every field the
/// caller left unset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstalledConfig {
    /// Context name tagging emitted records. Defaults to `"DFLT"`.
    pub context: String,
    /// Whether records carry the originating module name. Defaults to off.
    pub show_module: bool,
    /// Whether records carry the originating source file. Defaults to off.
    pub show_file: bool,
    /// Whether records carry the originating line number. Defaults to off.
    pub show_line: bool,
    /// Minimum severity threshold. Defaults to [`LogLevel::Info`].
    pub level: LogLevel,
}

impl Default for InstalledConfig {
    fn default() -> Self {
        Self {
            context: "DFLT".to_string(),
            show_module: false,
            show_file: false,
            show_line: false,
            level: LogLevel::Info,
        }
    }
}
