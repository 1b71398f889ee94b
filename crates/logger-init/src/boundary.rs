//! crates/logger-init/src/boundary.rs
//! Flat encoding of [`LoggerConfig`] for the installation boundary call.
//!
//! The receiving runtime has no notion of an optional value, so presence is
//! encoded as pointer nullability: a null pointer means "not configured",
//! a non-null pointer references the configured value for exactly one call.
//! The callee copies every referenced value before returning and must not
//! retain the pointers; nothing is allocated for the indirections and no
//! ownership crosses the boundary in either direction.

use core::ffi::c_char;
use core::ptr;

use crate::config::LoggerConfig;
use crate::levels::LogLevel;

unsafe extern "C" {
    /// Installation entry point exported by the logging runtime.
    ///
    /// Consumes the flat call shape synchronously and reports nothing back.
    fn install_default_logger(
        context_ptr: *const c_char,
        context_len: usize,
        show_module_ptr: *const bool,
        show_file_ptr: *const bool,
        show_line_ptr: *const bool,
        severity_ptr: *const u8,
    );
}

/// Call-scoped storage backing one boundary call.
///
/// The context is borrowed from the configuration; the scalar fields are
/// copied into this value so every present field has an address to hand
/// across the boundary. Dropping the value invalidates all pointers
/// produced from it, which is why instances never outlive [`install`].
#[derive(Debug)]
struct Encoded<'a> {
    context: Option<&'a str>,
    show_module: Option<bool>,
    show_file: Option<bool>,
    show_line: Option<bool>,
    severity: Option<u8>,
}

impl<'a> Encoded<'a> {
    fn new(config: &'a LoggerConfig) -> Self {
        Self {
            context: config.context.as_deref(),
            show_module: config.show_module,
            show_file: config.show_file,
            show_line: config.show_line,
            severity: config.level.map(LogLevel::as_u8),
        }
    }

    /// Pointer to the context bytes, null when the context is unset.
    fn context_ptr(&self) -> *const c_char {
        self.context.map_or(ptr::null(), |s| s.as_ptr().cast())
    }

    /// Byte length of the context, 0 when the context is unset.
    fn context_len(&self) -> usize {
        self.context.map_or(0, str::len)
    }

    fn show_module_ptr(&self) -> *const bool {
        opt_ptr(&self.show_module)
    }

    fn show_file_ptr(&self) -> *const bool {
        opt_ptr(&self.show_file)
    }

    fn show_line_ptr(&self) -> *const bool {
        opt_ptr(&self.show_line)
    }

    fn severity_ptr(&self) -> *const u8 {
        opt_ptr(&self.severity)
    }
}

/// Nullable-pointer view of an optional value.
fn opt_ptr<T>(value: &Option<T>) -> *const T {
    value.as_ref().map_or(ptr::null(), ptr::from_ref)
}

/// Performs the synchronous boundary call installing `config`.
pub(crate) fn install(config: &LoggerConfig) {
    let encoded = Encoded::new(config);

    // SAFETY: every non-null pointer references storage owned by `encoded`
    // or borrowed from `config`, both alive until the call returns. The
    // callee copies the referenced values and does not retain the pointers.
    unsafe {
        install_default_logger(
            encoded.context_ptr(),
            encoded.context_len(),
            encoded.show_module_ptr(),
            encoded.show_file_ptr(),
            encoded.show_line_ptr(),
            encoded.severity_ptr(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LoggerConfigBuilder;
    use core::slice;

    fn context_bytes<'a>(encoded: &'a Encoded<'a>) -> &'a [u8] {
        assert!(!encoded.context_ptr().is_null());
        // SAFETY: the pointer references `context_len` bytes borrowed from
        // the configuration owned by the test.
        unsafe { slice::from_raw_parts(encoded.context_ptr().cast::<u8>(), encoded.context_len()) }
    }

    #[test]
    fn empty_config_encodes_all_null() {
        let config = LoggerConfig::default();
        let encoded = Encoded::new(&config);

        assert!(encoded.context_ptr().is_null());
        assert_eq!(encoded.context_len(), 0);
        assert!(encoded.show_module_ptr().is_null());
        assert!(encoded.show_file_ptr().is_null());
        assert!(encoded.show_line_ptr().is_null());
        assert!(encoded.severity_ptr().is_null());
    }

    #[test]
    fn single_field_subsets_encode_exactly_one_non_null() {
        let config = LoggerConfigBuilder::new().show_file(true).build();
        let encoded = Encoded::new(&config);
        assert!(encoded.context_ptr().is_null());
        assert!(encoded.show_module_ptr().is_null());
        assert!(!encoded.show_file_ptr().is_null());
        assert!(encoded.show_line_ptr().is_null());
        assert!(encoded.severity_ptr().is_null());

        let config = LoggerConfigBuilder::new().level(LogLevel::Off).build();
        let encoded = Encoded::new(&config);
        assert!(encoded.context_ptr().is_null());
        assert!(encoded.show_module_ptr().is_null());
        assert!(encoded.show_file_ptr().is_null());
        assert!(encoded.show_line_ptr().is_null());
        assert!(!encoded.severity_ptr().is_null());
    }

    #[test]
    fn context_pointer_references_exact_bytes() {
        let config = LoggerConfigBuilder::new().context("ABCD").build();
        let encoded = Encoded::new(&config);

        assert_eq!(encoded.context_len(), 4);
        assert_eq!(context_bytes(&encoded), b"ABCD");
    }

    #[test]
    fn empty_context_keeps_non_null_pointer_with_zero_length() {
        let config = LoggerConfigBuilder::new().context("").build();
        let encoded = Encoded::new(&config);

        assert!(!encoded.context_ptr().is_null());
        assert_eq!(encoded.context_len(), 0);
        assert_eq!(context_bytes(&encoded), b"");
    }

    #[test]
    fn non_ascii_context_round_trips_byte_for_byte() {
        let text = "ctx\u{00e9}\u{2713}";
        let config = LoggerConfigBuilder::new().context(text).build();
        let encoded = Encoded::new(&config);

        assert_eq!(encoded.context_len(), text.len());
        assert_eq!(context_bytes(&encoded), text.as_bytes());
    }

    #[test]
    fn severity_encodes_to_stable_ordinals() {
        let expected = [
            (LogLevel::Off, 0u8),
            (LogLevel::Fatal, 1),
            (LogLevel::Error, 2),
            (LogLevel::Warn, 3),
            (LogLevel::Info, 4),
            (LogLevel::Debug, 5),
            (LogLevel::Verbose, 6),
        ];

        for (level, ordinal) in expected {
            let config = LoggerConfigBuilder::new().level(level).build();
            let encoded = Encoded::new(&config);
            let ptr = encoded.severity_ptr();
            assert!(!ptr.is_null());
            // SAFETY: the pointer references the ordinal cell owned by
            // `encoded`, which is alive for this read.
            assert_eq!(unsafe { *ptr }, ordinal);
        }
    }

    #[test]
    fn last_write_wins_reaches_the_boundary() {
        let config = LoggerConfigBuilder::new()
            .show_module(true)
            .show_module(false)
            .build();
        let encoded = Encoded::new(&config);

        let ptr = encoded.show_module_ptr();
        assert!(!ptr.is_null());
        // SAFETY: the pointer references the toggle cell owned by `encoded`.
        assert!(!unsafe { *ptr });
    }

    #[test]
    fn full_scenario_encodes_context_and_toggles() {
        let config = LoggerConfigBuilder::new()
            .context("ABCD")
            .show_module(true)
            .show_file(true)
            .show_line(true)
            .build();
        let encoded = Encoded::new(&config);

        assert_eq!(context_bytes(&encoded), b"ABCD");
        for ptr in [
            encoded.show_module_ptr(),
            encoded.show_file_ptr(),
            encoded.show_line_ptr(),
        ] {
            assert!(!ptr.is_null());
            // SAFETY: each pointer references a toggle cell owned by
            // `encoded`.
            assert!(unsafe { *ptr });
        }
        assert!(encoded.severity_ptr().is_null());
    }
}
