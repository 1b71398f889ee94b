//! crates/logger-runtime/src/ffi.rs
//! C-ABI install entry point consumed across the boundary.

use core::ffi::c_char;
use core::slice;

use logger_init::LogLevel;

use crate::config::InstalledConfig;

/// Installs the process-wide default logger from flat boundary arguments.
///
/// A null pointer selects the default documented on [`InstalledConfig`] for
/// that field. All referenced values are copied before this function
/// returns; no pointer is retained. Nothing is reported back: a repeated
/// installation is silently ignored and a severity ordinal outside `0..=6`
/// falls back to the default level.
///
/// Context bytes are copied verbatim for valid UTF-8; invalid sequences are
/// replaced, since no error channel exists to reject them.
///
/// # Safety
///
/// Every non-null pointer must reference memory valid for reads for the
/// duration of the call, and `context_ptr`, when non-null, must reference
/// `context_len` readable bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn install_default_logger(
    context_ptr: *const c_char,
    context_len: usize,
    show_module_ptr: *const bool,
    show_file_ptr: *const bool,
    show_line_ptr: *const bool,
    severity_ptr: *const u8,
) {
    let mut config = InstalledConfig::default();

    if !context_ptr.is_null() {
        // SAFETY: the caller guarantees `context_len` readable bytes.
        let bytes = unsafe { slice::from_raw_parts(context_ptr.cast::<u8>(), context_len) };
        config.context = String::from_utf8_lossy(bytes).into_owned();
    }

    if !show_module_ptr.is_null() {
        // SAFETY: non-null pointers are readable for the call's duration.
        config.show_module = unsafe { *show_module_ptr };
    }

    if !show_file_ptr.is_null() {
        // SAFETY: non-null pointers are readable for the call's duration.
        config.show_file = unsafe { *show_file_ptr };
    }

    if !show_line_ptr.is_null() {
        // SAFETY: non-null pointers are readable for the call's duration.
        config.show_line = unsafe { *show_line_ptr };
    }

    if !severity_ptr.is_null() {
        // SAFETY: non-null pointers are readable for the call's duration.
        let ordinal = unsafe { *severity_ptr };
        if let Some(level) = LogLevel::from_u8(ordinal) {
            config.level = level;
        }
    }

    crate::install(config);
}
