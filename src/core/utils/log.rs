//! Logging Macros
//!
//! Browser builds write straight to the devtools console through web-sys.
//! Native builds (tests, tools) emit `tracing` events instead, because the
//! console bindings only exist inside a JS host.
//!
//! Usage:
//! ```rust
//! use chemlab_engine::{lab_log, lab_warn};
//!
//! lab_log!("catalogue loaded: {} reactions", 6);
//! lab_warn!("duplicate reaction ignored: {}", "ammonia+bleach");
//! ```

/// Informational message
#[macro_export]
macro_rules! lab_log {
    ($($arg:tt)*) => {
        $crate::core::utils::log::info(&format!($($arg)*))
    };
}

/// Recoverable problem (bad save data, duplicate catalogue entry, ...)
#[macro_export]
macro_rules! lab_warn {
    ($($arg:tt)*) => {
        $crate::core::utils::log::warn(&format!($($arg)*))
    };
}

#[doc(hidden)]
pub fn info(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::console::log_1(&message.into());
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::info!(target: "chemlab", "{}", message);
    }
}

#[doc(hidden)]
pub fn warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::console::warn_1(&message.into());
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::warn!(target: "chemlab", "{}", message);
    }
}
