// ============================================================================
// Utilities Module
// Process-level helpers for binaries and demos
// ============================================================================

#[cfg(feature = "logging")]
mod logging;

#[cfg(feature = "logging")]
pub use logging::{init_logging, init_logging_with_filter};
