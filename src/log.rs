//! Logging macros that compile away unless the `tracing` feature is on.
//!
//! Call sites use `crate::log::debug!` / `crate::log::warn!` with the usual
//! `tracing` field syntax. Without the feature every invocation expands to
//! nothing, so the kernel stays free of runtime dependencies by default.

#[cfg(feature = "tracing")]
pub use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
#[macro_export]
#[doc(hidden)]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
#[doc(hidden)]
macro_rules! warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, warn};
