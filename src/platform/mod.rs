// ============================================================================
// Platform Module
// Host capability detection and the activation entry point
//
// Usage:
// ```ignore
// use number_spin::platform::{input_number, Applied, StaticProbe, NativeSupport};
//
// match input_number(&probe, elements, &config, handler) {
//     Applied::PassThrough(elements) => { /* native control is fine */ }
//     Applied::Bound(outcome) => { /* keep outcome.bound alive */ }
// }
// ```
// ============================================================================

mod probe;

pub use probe::{support_from_report, CapabilityProbe, FnProbe, NativeSupport, StaticProbe};

use crate::domain::SpinConfig;
use crate::interfaces::{EventHandler, NumericElement};
use crate::widget::{bind, BindOutcome};
use std::sync::Arc;

/// What the activation entry point did with its input.
pub enum Applied<E: NumericElement> {
    /// Native support is sufficient; elements returned untouched
    PassThrough(Vec<E>),
    /// The fallback was applied
    Bound(BindOutcome<E>),
}

impl<E: NumericElement> Applied<E> {
    pub fn is_pass_through(&self) -> bool {
        matches!(self, Applied::PassThrough(_))
    }
}

/// Bind when the probe reports insufficient support, pass through otherwise.
pub fn input_number<P, E, I>(
    probe: &P,
    elements: I,
    config: &SpinConfig,
    event_handler: Arc<dyn EventHandler>,
) -> Applied<E>
where
    P: CapabilityProbe + ?Sized,
    E: NumericElement,
    I: IntoIterator<Item = E>,
{
    let support = probe.native_support();
    if !support.needs_fallback() {
        tracing::debug!(%support, "native numeric input sufficient, passing through");
        return Applied::PassThrough(elements.into_iter().collect());
    }

    tracing::debug!(%support, "applying numeric input fallback");
    Applied::Bound(bind(elements, config, event_handler))
}
