//! Conditional logging macros.
//!
//! With the `tracing` feature this is `tracing::debug`; without it the
//! macro expands to nothing.

#[cfg(feature = "tracing")]
pub use tracing::debug;

/// No-op stand-in for `tracing::debug` when the `tracing` feature is off.
#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::debug;
