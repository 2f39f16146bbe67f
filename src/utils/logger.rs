/// Debug logging utility
use std::fmt;
use std::io::Write;
use std::sync::OnceLock;

#[doc(hidden)]
pub use log;

static DEBUG_ENABLED: OnceLock<bool> = OnceLock::new();

/// Initialize logging. `debug` turns on the debug_print!/debug_eprint! macros.
/// RUST_LOG still takes precedence over the default filter.
pub fn init_logging(debug: bool) {
    let _ = DEBUG_ENABLED.set(debug);

    let default_filter = if debug { "debug" } else { "warn" };
    let _ = env_logger::Builder
        ::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .try_init();

    if debug {
        log::debug!("🐛 Debug logging enabled");
    }
}

/// Check if debug logging is enabled
pub fn is_debug_enabled() -> bool {
    *DEBUG_ENABLED.get().unwrap_or(&false)
}

/// Write an error line to `out` directly, bypassing the log filter
pub fn write_error(out: &mut impl Write, args: fmt::Arguments<'_>) {
    // Nothing sensible to do if stderr itself is gone
    let _ = writeln!(out, "{}", args);
}

/// Debug print macro - only logs if debug logging is enabled
#[macro_export]
macro_rules! debug_print {
    ($($arg:tt)*) => {
        if $crate::utils::logger::is_debug_enabled() {
            $crate::utils::logger::log::debug!($($arg)*);
        }
    };
}

/// Debug error print macro - only logs if debug logging is enabled
#[macro_export]
macro_rules! debug_eprint {
    ($($arg:tt)*) => {
        if $crate::utils::logger::is_debug_enabled() {
            $crate::utils::logger::log::warn!($($arg)*);
        }
    };
}

/// Always print macro - for output that should always show
#[macro_export]
macro_rules! always_print {
    ($($arg:tt)*) => {
        println!($($arg)*)
    };
}

/// Always error print macro - for critical errors that should always show.
/// Goes straight to stderr so RUST_LOG can never hide it.
#[macro_export]
macro_rules! always_eprint {
    ($($arg:tt)*) => {
        $crate::utils::logger::write_error(&mut std::io::stderr(), format_args!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_is_off_until_initialized() {
        // Tests never call init_logging, so the switch stays unset
        assert!(!is_debug_enabled());
    }

    #[test]
    fn errors_are_written_without_a_logger() {
        // No env_logger is installed here, so a log::error! would vanish
        let mut out = Vec::new();
        write_error(&mut out, format_args!("❌ {}", "Invalid timestamp 'x'"));
        assert_eq!(String::from_utf8(out).unwrap(), "❌ Invalid timestamp 'x'\n");
    }
}
