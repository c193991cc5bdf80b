//! Console logging macros
//!
//! On wasm32 these forward to the browser console through `web_sys`.
//! Native builds (tests, benches, tools) have no console import to call,
//! so the arguments are type-checked and dropped.
//!
//! Usage:
//! ```rust
//! use verlet_sandbox_engine::console_log;
//!
//! let count = 3;
//! console_log!("spawned {} particles", count);
//! ```

/// Log an info line to the JS console.
#[macro_export]
macro_rules! console_log {
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

/// Log a warning line to the JS console.
#[macro_export]
macro_rules! console_warn {
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
