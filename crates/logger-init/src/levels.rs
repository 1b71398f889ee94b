//! crates/logger-init/src/levels.rs
//! Severity levels shared across the default-logger installation boundary.

/// Severity threshold for the default logger.
///
/// The discriminants are the wire ordinals exchanged with the logging
/// runtime; both sides rely on this exact mapping, so the values are stable
/// and must never be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum LogLevel {
    /// No records are emitted.
    Off = 0,
    /// Unrecoverable failures.
    Fatal = 1,
    /// Recoverable failures.
    Error = 2,
    /// Suspicious conditions.
    Warn = 3,
    /// Normal operational records.
    Info = 4,
    /// Diagnostics for developers.
    Debug = 5,
    /// High-volume tracing output.
    Verbose = 6,
}

impl LogLevel {
    /// Decodes a wire ordinal back into a level.
    ///
    /// Returns `None` for ordinals outside `0..=6`.
    #[must_use]
    pub const fn from_u8(ordinal: u8) -> Option<Self> {
        match ordinal {
            0 => Some(Self::Off),
            1 => Some(Self::Fatal),
            2 => Some(Self::Error),
            3 => Some(Self::Warn),
            4 => Some(Self::Info),
            5 => Some(Self::Debug),
            6 => Some(Self::Verbose),
            _ => None,
        }
    }

    /// Returns the wire ordinal for this level.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Returns a human-readable name for the level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Fatal => "fatal",
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Verbose => "verbose",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
