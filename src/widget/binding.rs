// ============================================================================
// Widget Binding
// One element, its spin buttons, and the handlers that drive them
// ============================================================================

use super::errors::BindError;
use super::input::{key_action, Disposition, Key, KeyAction, ObservedAttribute, WheelInput};
use super::registry::{self, RegistryToken};
use super::repeat::RepeatTimer;
use super::style_sync::style_changes;
use crate::domain::{
    BindingId, RepeatTiming, SpinConfig, StepDirection, WidgetState, WidgetTransition,
};
use crate::interfaces::{
    AffordanceContainer, AffordanceSpec, EventHandler, NumericElement, SharedScheduler,
    SpinEvent, TimerHandle,
};
use crate::numeric::{is_number, DecimalValue};
use crate::stepping::{next_value, read_parameters, settle};
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Upper bound on write/re-validate rounds for a single programmatic change.
const MAX_SETTLE_PASSES: usize = 4;

/// A numeric input fitted with spin buttons.
///
/// Every host event is delivered through an explicit `&mut self` method;
/// the binding keeps no hidden callbacks. Handlers run synchronously and
/// never fail: bad user text is repaired, not reported.
pub struct WidgetBinding<E: NumericElement> {
    /// Registry identity
    id: BindingId,

    /// The bound input, single source of truth for value and constraints
    element: E,

    /// Spin button container, only ever styled
    container: E::Container,

    /// Focus lifecycle
    state: WidgetState,

    /// Press-and-hold delays
    timing: RepeatTiming,

    /// Outstanding repeat timer while a button is held, cancelled on drop
    repeat: Option<RepeatTimer>,

    /// Event handler for processing events
    event_handler: Arc<dyn EventHandler>,

    /// Keeps the binding listed in the registry
    _token: RegistryToken,
}

impl<E: NumericElement> WidgetBinding<E> {
    /// Fit `element` with spin buttons.
    ///
    /// The element must be attached and have a measurable height; on failure
    /// it is handed back untouched together with the error.
    pub(crate) fn attach(
        mut element: E,
        config: &SpinConfig,
        event_handler: Arc<dyn EventHandler>,
    ) -> Result<Self, (E, BindError)> {
        if !(element.is_attached() && element.measured_height() > 0.0) {
            return Err((
                element,
                BindError::Attachment {
                    reason: "element must be in the document and displayed so that its height can be measured"
                        .to_string(),
                },
            ));
        }

        let state = match WidgetState::Unbound.transition(WidgetTransition::Attach) {
            Ok(state) => state,
            Err(reason) => return Err((element, BindError::Attachment { reason })),
        };

        let spec = AffordanceSpec {
            class: config.affordance_class(element.is_disabled()),
            increment_markup: config.increment_affordance_markup.clone(),
            decrement_markup: config.decrement_affordance_markup.clone(),
        };
        let container = element.attach_affordances(&spec);

        let id = BindingId::new();
        let mut binding = Self {
            id,
            element,
            container,
            state,
            timing: config.repeat,
            repeat: None,
            event_handler,
            _token: registry::register(id),
        };

        binding.sync_style();
        debug!(binding = %id, "spin buttons attached");
        binding.emit(SpinEvent::Bound {
            binding_id: id,
            timestamp: Utc::now(),
        });

        Ok(binding)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn id(&self) -> BindingId {
        self.id
    }

    pub fn element(&self) -> &E {
        &self.element
    }

    /// Mutable access for the host, e.g. to apply user typing or attribute
    /// edits before reporting them through the `on_*` handlers.
    pub fn element_mut(&mut self) -> &mut E {
        &mut self.element
    }

    pub fn container(&self) -> &E::Container {
        &self.container
    }

    pub fn state(&self) -> WidgetState {
        self.state
    }

    pub fn repeat_timer(&self) -> Option<&RepeatTimer> {
        self.repeat.as_ref()
    }

    // ========================================================================
    // Stepping
    // ========================================================================

    pub fn increment(&mut self) {
        self.step(StepDirection::Up);
    }

    pub fn decrement(&mut self) {
        self.step(StepDirection::Down);
    }

    /// One step in `direction`; no-op while the element is disabled.
    pub fn step(&mut self, direction: StepDirection) {
        if self.element.is_disabled() {
            trace!(binding = %self.id, %direction, "ignored step on disabled element");
            return;
        }

        let params = read_parameters(&self.element);
        match next_value(&params, direction) {
            Ok(value) => {
                let text = value.to_string();
                trace!(binding = %self.id, %direction, from = %params.value, to = %text, "step");
                self.emit(SpinEvent::Stepped {
                    binding_id: self.id,
                    direction,
                    value: text.clone(),
                    timestamp: Utc::now(),
                });
                self.commit(text);
            },
            Err(err) => warn!(binding = %self.id, %direction, error = %err, "step abandoned"),
        }
    }

    // ========================================================================
    // Change policy
    // ========================================================================

    /// Handle a change notification for the current text.
    ///
    /// Invalid text is replaced by `min` (when numeric) or `0`; numeric text
    /// is clipped and snapped. The value is only rewritten, and change only
    /// re-emitted, when the result differs numerically from the text.
    pub fn on_change(&mut self) {
        if let Some(corrected) = self.correction() {
            self.commit(corrected);
        }
    }

    /// Write `text`, notify, and re-run the change policy until it is satisfied.
    fn commit(&mut self, mut text: String) {
        for _ in 0..MAX_SETTLE_PASSES {
            self.element.set_value(&text);
            self.element.dispatch_change();

            match self.correction() {
                Some(next) => {
                    self.emit(SpinEvent::ValueCorrected {
                        binding_id: self.id,
                        from: text,
                        to: next.clone(),
                        timestamp: Utc::now(),
                    });
                    text = next;
                },
                None => return,
            }
        }
        warn!(binding = %self.id, value = %text, "value did not settle");
    }

    /// Text the change policy wants instead of the current one, if any.
    fn correction(&self) -> Option<String> {
        let current = self.element.value();

        if !is_number(&current) {
            let fallback = self
                .element
                .attribute("min")
                .filter(|min| is_number(min))
                .unwrap_or_else(|| "0".to_string());
            return Some(fallback);
        }

        let params = read_parameters(&self.element);
        match settle(&params) {
            Ok(settled) => {
                let unchanged = DecimalValue::from_number(&current)
                    .map(|value| value == settled)
                    .unwrap_or(false);
                (!unchanged).then(|| settled.to_string())
            },
            Err(err) => {
                warn!(binding = %self.id, value = %current, error = %err, "cannot validate value");
                None
            },
        }
    }

    // ========================================================================
    // Keyboard, wheel and focus
    // ========================================================================

    /// Keystroke policy. Arrow keys step and keep their default action;
    /// disallowed characters are suppressed.
    pub fn on_key(&mut self, key: Key) -> Disposition {
        match key_action(key) {
            KeyAction::Step(direction) => {
                self.step(direction);
                Disposition::Default
            },
            KeyAction::PassThrough => Disposition::Default,
            KeyAction::Suppress => Disposition::PreventDefault,
        }
    }

    pub fn on_focus(&mut self) {
        self.transition(WidgetTransition::Focus);
    }

    pub fn on_blur(&mut self) {
        self.transition(WidgetTransition::Blur);
    }

    /// Wheel steps only while focused, so page scrolling is left alone otherwise.
    pub fn on_wheel(&mut self, wheel: WheelInput) -> Disposition {
        if !self.state.accepts_wheel() {
            return Disposition::Default;
        }
        self.step(wheel.direction());
        Disposition::PreventDefault
    }

    fn transition(&mut self, transition: WidgetTransition) {
        match self.state.transition(transition) {
            Ok(next) => {
                trace!(binding = %self.id, from = ?self.state, to = ?next, "state change");
                self.state = next;
            },
            Err(reason) => warn!(binding = %self.id, %reason, "rejected state change"),
        }
    }

    // ========================================================================
    // Attribute observation
    // ========================================================================

    /// Single entry point for attribute mutations reported by the host.
    ///
    /// `class`/`style` re-mirror the element's transitional styles onto the
    /// button container; `min`/`max`/`step` re-validate the current value.
    /// Other names are ignored.
    pub fn on_attribute_changed(&mut self, name: &str) {
        match ObservedAttribute::from_name(name) {
            Some(attribute) if attribute.is_presentational() => self.sync_style(),
            Some(_) => {
                self.element.dispatch_change();
                self.on_change();
            },
            None => {},
        }
    }

    fn sync_style(&mut self) {
        let changes = style_changes(&self.element, &self.container);
        self.container.apply_style(&changes);
    }

    // ========================================================================
    // Press-and-hold
    // ========================================================================

    /// Step once, then arm the long initial delay on `scheduler`.
    ///
    /// The timer stays pending until release, leave, [`unbind`](Self::unbind)
    /// or the binding being dropped, whichever comes first.
    pub fn on_pointer_down(&mut self, direction: StepDirection, scheduler: &SharedScheduler) {
        self.cancel_repeat();
        self.step(direction);

        if self.element.is_disabled() {
            return;
        }

        self.repeat = Some(RepeatTimer::arm(
            scheduler.clone(),
            self.timing.initial_delay,
            direction,
        ));
        self.emit(SpinEvent::RepeatArmed {
            binding_id: self.id,
            direction,
            timestamp: Utc::now(),
        });
    }

    /// Route an elapsed timer. Returns `false` for handles this binding does
    /// not own (stale or foreign), which are ignored.
    pub fn on_timer_fired(&mut self, handle: TimerHandle) -> bool {
        let direction = match &self.repeat {
            Some(timer) if timer.handle() == handle => timer.direction(),
            _ => return false,
        };

        self.step(direction);

        let interval = self.timing.interval;
        if let Some(timer) = self.repeat.as_mut() {
            timer.rearm(interval);
        }
        true
    }

    pub fn on_pointer_up(&mut self) {
        self.cancel_repeat();
    }

    pub fn on_pointer_leave(&mut self) {
        self.cancel_repeat();
    }

    fn cancel_repeat(&mut self) {
        if let Some(timer) = self.repeat.take() {
            trace!(binding = %self.id, repeats = timer.repeats(), "repeat cancelled");
            self.emit(SpinEvent::RepeatCancelled {
                binding_id: self.id,
                repeats: timer.repeats(),
                timestamp: Utc::now(),
            });
        }
    }

    // ========================================================================
    // Teardown
    // ========================================================================

    /// Cancel any pending repeat, leave the registry and hand the element back.
    ///
    /// The spin buttons themselves belong to the host and stay where they are.
    pub fn unbind(mut self) -> E {
        self.cancel_repeat();
        debug!(binding = %self.id, "unbound");
        self.emit(SpinEvent::Unbound {
            binding_id: self.id,
            timestamp: Utc::now(),
        });
        self.element
    }

    fn emit(&self, event: SpinEvent) {
        self.event_handler.on_event(event);
    }
}
