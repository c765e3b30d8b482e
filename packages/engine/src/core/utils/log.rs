//! Console logging macros
//!
//! On wasm32 these forward to the browser console through `web_sys`.
//! Native builds (tests, benches, embedding hosts) have no console import,
//! so the macros only type-check their arguments there.
//!
//! Usage:
//! ```rust
//! use gravity_engine::{engine_log, engine_warn};
//!
//! let bodies = 3;
//! engine_log!("registered {} bodies", bodies);
//! engine_warn!("body {} has no mass", 7);
//! ```

/// Log an informational message to the console
#[macro_export]
macro_rules! engine_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            $crate::__web_sys::console::log_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}

/// Log a warning to the console
#[macro_export]
macro_rules! engine_warn {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            $crate::__web_sys::console::warn_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}
