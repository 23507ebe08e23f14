// ============================================================================
// Bind Entry Point
// Fits a batch of elements with spin buttons
// ============================================================================

use super::binding::WidgetBinding;
use super::errors::BindError;
use crate::domain::SpinConfig;
use crate::interfaces::{EventHandler, NumericElement, SpinEvent};
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, warn};

/// Result of one bind batch. Every input element ends up in exactly one list.
pub struct BindOutcome<E: NumericElement> {
    /// Newly fitted elements
    pub bound: Vec<WidgetBinding<E>>,

    /// Filtered out: not numeric, or already fitted
    pub skipped: Vec<E>,

    /// Refused, each with its own error
    pub failed: Vec<(E, BindError)>,
}

impl<E: NumericElement> BindOutcome<E> {
    fn new() -> Self {
        Self {
            bound: Vec::new(),
            skipped: Vec::new(),
            failed: Vec::new(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Fit every numeric, not yet fitted element with spin buttons.
///
/// Non-numeric and already fitted elements are skipped, not reported as
/// errors. An element that cannot be measured fails alone; the rest of the
/// batch is still bound. An invalid configuration fails every candidate.
///
/// # Example
/// ```
/// use number_spin::prelude::*;
/// use number_spin::interfaces::MemoryElement;
/// use std::sync::Arc;
///
/// let elements = vec![
///     MemoryElement::number_input().with_value("1"),
///     MemoryElement::text_input(),
///     MemoryElement::number_input().hidden(),
/// ];
/// let outcome = bind(elements, &SpinConfig::default(), Arc::new(NoOpEventHandler));
/// assert_eq!(outcome.bound.len(), 1);
/// assert_eq!(outcome.skipped.len(), 1);
/// assert_eq!(outcome.failed.len(), 1);
/// ```
pub fn bind<E, I>(
    elements: I,
    config: &SpinConfig,
    event_handler: Arc<dyn EventHandler>,
) -> BindOutcome<E>
where
    E: NumericElement,
    I: IntoIterator<Item = E>,
{
    let mut outcome = BindOutcome::new();
    let config_error = config.validate().err();

    for element in elements {
        if !element.is_number_input() || element.has_affordances() {
            outcome.skipped.push(element);
            continue;
        }

        if let Some(reason) = &config_error {
            reject(&event_handler, reason.clone());
            outcome
                .failed
                .push((element, BindError::InvalidConfig(reason.clone())));
            continue;
        }

        match WidgetBinding::attach(element, config, Arc::clone(&event_handler)) {
            Ok(binding) => outcome.bound.push(binding),
            Err((element, err)) => {
                warn!(error = %err, "element not bound");
                reject(&event_handler, err.to_string());
                outcome.failed.push((element, err));
            },
        }
    }

    debug!(
        bound = outcome.bound.len(),
        skipped = outcome.skipped.len(),
        failed = outcome.failed.len(),
        "bind batch finished"
    );
    outcome
}

fn reject(event_handler: &Arc<dyn EventHandler>, reason: String) {
    event_handler.on_event(SpinEvent::BindRejected {
        reason,
        timestamp: Utc::now(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RepeatTiming;
    use crate::interfaces::{MemoryElement, NoOpEventHandler};
    use parking_lot::Mutex;
    use std::time::Duration;

    #[derive(Default)]
    struct Rejections(Mutex<Vec<String>>);

    impl EventHandler for Rejections {
        fn on_event(&self, event: SpinEvent) {
            if let SpinEvent::BindRejected { reason, .. } = event {
                self.0.lock().push(reason);
            }
        }
    }

    #[test]
    fn test_failure_does_not_affect_batch() {
        let elements = vec![
            MemoryElement::number_input().with_value("1"),
            MemoryElement::number_input().detached(),
            MemoryElement::number_input().with_value("2"),
        ];
        let outcome = bind(elements, &SpinConfig::default(), Arc::new(NoOpEventHandler));

        assert_eq!(outcome.bound.len(), 2);
        assert_eq!(outcome.failed.len(), 1);
        assert!(!outcome.is_complete());
        assert!(matches!(outcome.failed[0].1, BindError::Attachment { .. }));
    }

    #[test]
    fn test_rebinding_is_a_no_op() {
        let first = bind(
            vec![MemoryElement::number_input()],
            &SpinConfig::default(),
            Arc::new(NoOpEventHandler),
        );
        let already_fitted: Vec<MemoryElement> = first
            .bound
            .iter()
            .map(|binding| binding.element().clone())
            .collect();
        assert!(already_fitted[0].has_affordances());

        let second = bind(
            already_fitted,
            &SpinConfig::default(),
            Arc::new(NoOpEventHandler),
        );
        assert!(second.bound.is_empty());
        assert_eq!(second.skipped.len(), 1);
    }

    #[test]
    fn test_invalid_config_fails_candidates() {
        let config = SpinConfig::default()
            .with_repeat(RepeatTiming::new(Duration::from_millis(1), Duration::ZERO));
        let outcome = bind(
            vec![MemoryElement::number_input(), MemoryElement::text_input()],
            &config,
            Arc::new(NoOpEventHandler),
        );
        assert_eq!(outcome.failed.len(), 1);
        assert_eq!(outcome.skipped.len(), 1);
        assert!(matches!(outcome.failed[0].1, BindError::InvalidConfig(_)));
        assert!(!outcome.failed[0].0.has_affordances());
    }

    #[test]
    fn test_only_refused_elements_are_reported() {
        let rejections = Arc::new(Rejections::default());
        let outcome = bind(
            vec![
                MemoryElement::text_input(),
                MemoryElement::number_input().detached(),
                MemoryElement::number_input(),
            ],
            &SpinConfig::default(),
            rejections.clone(),
        );
        assert_eq!(outcome.skipped.len(), 1);
        assert_eq!(outcome.failed.len(), 1);
        assert_eq!(rejections.0.lock().len(), 1);

        // a second pass over the fitted element skips it silently
        let refitted: Vec<MemoryElement> = outcome
            .bound
            .iter()
            .map(|binding| binding.element().clone())
            .collect();
        let again = bind(refitted, &SpinConfig::default(), rejections.clone());
        assert_eq!(again.skipped.len(), 1);
        assert_eq!(rejections.0.lock().len(), 1);
    }
}
