// ============================================================================
// Logging Setup
// Installs a tracing subscriber for binaries and demos
// ============================================================================

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt;

/// Install a global subscriber at `DEBUG`, so binding lifecycle and repeat
/// timer events are visible.
///
/// Returns `false` when a subscriber was already installed.
pub fn init_logging() -> bool {
    init_logging_with_filter(LevelFilter::DEBUG)
}

pub fn init_logging_with_filter(level: LevelFilter) -> bool {
    fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_rejected() {
        init_logging_with_filter(LevelFilter::WARN);
        assert!(!init_logging());
    }
}
