#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! # Overview
//!
//! `logger_runtime` is the receiving side of the default-logger
//! installation boundary. It exports the C-ABI entry point
//! `install_default_logger`, decodes the flat call shape produced by the
//! `logger-init` builder, substitutes documented defaults for unset fields,
//! and installs the result into a process-wide write-once cell.
//!
//! # Invariants
//!
//! - Every value referenced by a caller pointer is copied into owned
//!   storage before the entry point returns; no pointer is retained.
//! - The first installation wins. Later installations are silently ignored,
//!   matching the boundary contract of reporting nothing back.
//! - No panic reaches the boundary: undecodable input falls back to the
//!   defaults of [`InstalledConfig`].
//!
//! # Examples
//!
//! ```
//! use logger_runtime::{default_logger, install, InstalledConfig};
//!
//! assert!(install(InstalledConfig::default()));
//! let installed = default_logger().unwrap();
//! assert_eq!(installed.context, "DFLT");
//!
//! // A second installation keeps the first configuration.
//! assert!(!install(InstalledConfig { context: "OTHR".into(), ..Default::default() }));
//! assert_eq!(default_logger().unwrap().context, "DFLT");
//! ```

use std::sync::RwLock;

mod config;
mod ffi;

pub use config::InstalledConfig;

/// Process-wide default logger configuration.
///
/// Mutation is confined to [`install`]; the cell behaves as write-once.
static DEFAULT_LOGGER: RwLock<Option<InstalledConfig>> = RwLock::new(None);

/// Installs `config` as the process-wide default logger.
///
/// Returns `true` when the configuration was installed and `false` when a
/// default logger was already present, in which case the existing one is
/// kept. The outcome is intentionally not observable across the boundary.
pub fn install(config: InstalledConfig) -> bool {
    let mut slot = match DEFAULT_LOGGER.write() {
        Ok(slot) => slot,
        Err(poisoned) => poisoned.into_inner(),
    };

    if slot.is_some() {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            context = %config.context,
            "default logger already installed, ignoring"
        );
        return false;
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        context = %config.context,
        level = %config.level,
        "installing default logger"
    );
    *slot = Some(config);
    true
}

/// Returns a snapshot of the installed default logger, if any.
#[must_use]
pub fn default_logger() -> Option<InstalledConfig> {
    match DEFAULT_LOGGER.read() {
        Ok(slot) => slot.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

/// Clears the installed default logger so tests can start from scratch.
#[doc(hidden)]
pub fn reset_for_testing() {
    let mut slot = match DEFAULT_LOGGER.write() {
        Ok(slot) => slot,
        Err(poisoned) => poisoned.into_inner(),
    };
    *slot = None;
}
