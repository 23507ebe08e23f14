// ============================================================================
// Capability Probe
// Decides whether the host's native numeric input needs the fallback
// ============================================================================

use std::fmt;

/// Native numeric-input support reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeSupport {
    /// The element degrades to a text field
    Missing,
    /// Reports the numeric type but lacks stepping behavior
    Partial,
    /// Fully supported; the fallback stays out of the way
    Full,
}

impl NativeSupport {
    #[inline]
    pub fn needs_fallback(self) -> bool {
        !matches!(self, NativeSupport::Full)
    }
}

impl fmt::Display for NativeSupport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NativeSupport::Missing => write!(f, "missing"),
            NativeSupport::Partial => write!(f, "partial"),
            NativeSupport::Full => write!(f, "full"),
        }
    }
}

/// Injected activation decision.
///
/// Implementations typically create a throwaway numeric input and inspect
/// it; the engine never sniffs the environment on its own.
pub trait CapabilityProbe {
    fn native_support(&self) -> NativeSupport;

    /// `true` when spin buttons should be attached
    fn needs_polyfill(&self) -> bool {
        self.native_support().needs_fallback()
    }
}

/// Probe with a fixed answer; handy for tests and for hosts that decide up front.
#[derive(Debug, Clone, Copy)]
pub struct StaticProbe(pub NativeSupport);

impl CapabilityProbe for StaticProbe {
    fn native_support(&self) -> NativeSupport {
        self.0
    }
}

/// Probe backed by a closure, evaluated on every call.
pub struct FnProbe<F>(F);

impl<F: Fn() -> NativeSupport> FnProbe<F> {
    pub fn new(probe: F) -> Self {
        Self(probe)
    }
}

impl<F: Fn() -> NativeSupport> CapabilityProbe for FnProbe<F> {
    fn native_support(&self) -> NativeSupport {
        (self.0)()
    }
}

/// Classify a host report: the `type` a freshly created numeric input ends
/// up with, plus whether the host is known to only half implement it.
pub fn support_from_report(reported_type: &str, known_partial: bool) -> NativeSupport {
    if reported_type.eq_ignore_ascii_case("text") {
        NativeSupport::Missing
    } else if known_partial {
        NativeSupport::Partial
    } else {
        NativeSupport::Full
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_static_probe() {
        assert!(StaticProbe(NativeSupport::Missing).needs_polyfill());
        assert!(StaticProbe(NativeSupport::Partial).needs_polyfill());
        assert!(!StaticProbe(NativeSupport::Full).needs_polyfill());
    }

    #[test]
    fn test_fn_probe_is_evaluated_lazily() {
        let calls = Cell::new(0);
        let probe = FnProbe::new(|| {
            calls.set(calls.get() + 1);
            NativeSupport::Full
        });
        assert_eq!(calls.get(), 0);
        assert!(!probe.needs_polyfill());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_support_from_report() {
        assert_eq!(support_from_report("text", false), NativeSupport::Missing);
        assert_eq!(support_from_report("number", true), NativeSupport::Partial);
        assert_eq!(support_from_report("number", false), NativeSupport::Full);
        assert_eq!(NativeSupport::Partial.to_string(), "partial");
    }
}
