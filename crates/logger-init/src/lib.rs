#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! # Overview
//!
//! `logger_init` configures the process-wide default logging sink owned by a
//! separate logging runtime. The runtime is reachable only through a single
//! C-ABI entry point, so the crate's job is to accumulate a set of
//! independently optional settings and translate them into the flat,
//! primitive-only call shape that boundary accepts.
//!
//! # Design
//!
//! [`LoggerConfigBuilder`] collects up to five optional values: a context
//! label, three display toggles, and a severity threshold. Presence is
//! tracked with `Option` internally and converted to nullable pointers only
//! at the boundary crossing, so an unset field is always distinguishable
//! from any concrete value. The terminal
//! [`set_as_default_logger`](LoggerConfigBuilder::set_as_default_logger)
//! consumes the builder, encodes the accumulated configuration, and performs
//! the synchronous installation call.
//!
//! # Invariants
//!
//! - Unset fields are never coalesced to defaults on this side of the
//!   boundary; defaults belong to the receiving runtime.
//! - Every pointer handed across the boundary references storage that lives
//!   until the call returns, and no longer. The callee copies what it needs
//!   and must not retain the pointers.
//! - The severity ordinals (`Off` = 0 through `Verbose` = 6) are part of the
//!   wire contract shared with the runtime.
//! - No operation in this crate fails or panics; the boundary call carries
//!   no status in either direction.
//!
//! # Examples
//!
//! ```ignore
//! use logger_init::{LogLevel, LoggerConfigBuilder};
//!
//! LoggerConfigBuilder::new()
//!     .context("APPL")
//!     .show_module(true)
//!     .show_line(true)
//!     .level(LogLevel::Debug)
//!     .set_as_default_logger();
//! ```

mod boundary;
mod config;
mod levels;

pub use config::{LoggerConfig, LoggerConfigBuilder};
pub use levels::LogLevel;

// Unit-test binaries link the workspace runtime as the provider of the
// boundary symbol; production consumers link the real logging runtime.
#[cfg(test)]
use logger_runtime as _;
