//! Logging macros.
//!
//! The crate logs through either [`log`](https://docs.rs/log) or
//! [`tracing`](https://docs.rs/tracing), chosen at compile time:
//!
//! | Feature    | Backend         | Default |
//! |------------|-----------------|---------|
//! | `log`      | `log` crate     | yes     |
//! | `tracing`  | `tracing` crate | no      |
//!
//! Enable at most one. With neither enabled the macros expand to nothing.
//!
//! ```ignore
//! use menu_breadcrumb::{debug_log, trace_log, warn_log};
//!
//! trace_log!("applies('{}') = {}", path, applies);
//! debug_log!("Menu '{}' skipped: active trail length {}", menu, len);
//! warn_log!("Menu '{}' listed twice in configuration", menu);
//! ```

/// Emit a **trace**-level message through the enabled backend.
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($arg)*);
        #[cfg(feature = "log")]
        ::log::trace!($($arg)*);
    };
}

/// Emit a **debug**-level message through the enabled backend.
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!($($arg)*);
        #[cfg(feature = "log")]
        ::log::debug!($($arg)*);
    };
}

/// Emit a **warn**-level message through the enabled backend.
#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::warn!($($arg)*);
        #[cfg(feature = "log")]
        ::log::warn!($($arg)*);
    };
}
