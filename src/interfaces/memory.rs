// ============================================================================
// In-Memory Host Collaborators
// Headless element, container and virtual-clock scheduler
// ============================================================================
//
// Used by the test suites and the demo binary; also a reference for what a
// real host adapter has to provide.

use super::element::{AffordanceContainer, AffordanceSpec, NumericElement};
use super::scheduler::{Scheduler, SharedScheduler, TimerHandle};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

// ============================================================================
// Element
// ============================================================================

/// Headless numeric input with attributes, computed styles and a change counter.
#[derive(Debug, Clone)]
pub struct MemoryElement {
    number_input: bool,
    attached: bool,
    height: f64,
    disabled: bool,
    value: String,
    attributes: HashMap<String, String>,
    styles: HashMap<String, String>,
    affordances: Option<AffordanceSpec>,
    changes: usize,
}

impl MemoryElement {
    /// A visible, attached `<input type="number">` with an empty value.
    pub fn number_input() -> Self {
        Self {
            number_input: true,
            attached: true,
            height: 24.0,
            disabled: false,
            value: String::new(),
            attributes: HashMap::new(),
            styles: HashMap::new(),
            affordances: None,
            changes: 0,
        }
    }

    /// A visible, attached input of some other kind.
    pub fn text_input() -> Self {
        Self {
            number_input: false,
            ..Self::number_input()
        }
    }

    /// Builder method: Set an attribute
    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Builder method: Set the value text
    pub fn with_value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self
    }

    /// Builder method: Set a computed style property
    pub fn with_style(mut self, property: &str, value: &str) -> Self {
        self.set_style(property, value);
        self
    }

    /// Builder method: Mark as disabled
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Builder method: Detach from the document
    pub fn detached(mut self) -> Self {
        self.attached = false;
        self
    }

    /// Builder method: Collapse to zero height (e.g. `display: none`)
    pub fn hidden(mut self) -> Self {
        self.height = 0.0;
        self
    }

    pub fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    pub fn remove_attribute(&mut self, name: &str) {
        self.attributes.remove(name);
    }

    pub fn set_style(&mut self, property: &str, value: &str) {
        self.styles.insert(property.to_string(), value.to_string());
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Simulate typing: replaces the text without a change notification.
    pub fn type_text(&mut self, text: &str) {
        self.value = text.to_string();
    }

    /// Number of change notifications dispatched so far
    pub fn change_count(&self) -> usize {
        self.changes
    }

    /// What the engine asked the host to build, if anything
    pub fn affordances(&self) -> Option<&AffordanceSpec> {
        self.affordances.as_ref()
    }
}

impl NumericElement for MemoryElement {
    type Container = MemoryContainer;

    fn is_number_input(&self) -> bool {
        self.number_input
    }

    fn has_affordances(&self) -> bool {
        self.affordances.is_some()
    }

    fn is_attached(&self) -> bool {
        self.attached
    }

    fn measured_height(&self) -> f64 {
        if self.styles.get("display").map(String::as_str) == Some("none") {
            0.0
        } else {
            self.height
        }
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.get(name).cloned()
    }

    fn value(&self) -> String {
        self.value.clone()
    }

    fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }

    fn is_disabled(&self) -> bool {
        self.disabled
    }

    fn computed_style(&self, property: &str) -> Option<String> {
        self.styles.get(property).cloned()
    }

    fn attach_affordances(&mut self, spec: &AffordanceSpec) -> MemoryContainer {
        self.affordances = Some(spec.clone());
        MemoryContainer::default()
    }

    fn dispatch_change(&mut self) {
        self.changes += 1;
    }
}

// ============================================================================
// Container
// ============================================================================

/// Style bag standing in for the spin button container.
#[derive(Debug, Clone, Default)]
pub struct MemoryContainer {
    styles: HashMap<String, String>,
    writes: usize,
}

impl MemoryContainer {
    /// Number of `apply_style` calls received
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl AffordanceContainer for MemoryContainer {
    fn style(&self, property: &str) -> Option<String> {
        self.styles.get(property).cloned()
    }

    fn apply_style(&mut self, changes: &[(String, String)]) {
        self.writes += 1;
        for (property, value) in changes {
            self.styles.insert(property.clone(), value.clone());
        }
    }
}

// ============================================================================
// Scheduler
// ============================================================================

/// Virtual-clock scheduler.
///
/// `advance` moves the horizon; `pop_due` then hands out elapsed timers one
/// at a time in deadline order, moving the clock to each deadline so timers
/// scheduled while handling a fired one are measured from its firing time.
///
/// ```
/// use number_spin::interfaces::{ManualScheduler, Scheduler};
/// use std::time::Duration;
///
/// let mut clock = ManualScheduler::new();
/// let handle = clock.schedule(Duration::from_millis(5));
/// clock.advance(Duration::from_millis(5));
/// assert_eq!(clock.pop_due(), Some(handle));
/// assert_eq!(clock.pop_due(), None);
/// ```
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    horizon: Duration,
    next_id: u64,
    pending: Vec<(Duration, TimerHandle)>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Let `by` more time elapse.
    pub fn advance(&mut self, by: Duration) {
        self.horizon += by;
    }

    /// Next timer due at or before the horizon.
    pub fn pop_due(&mut self) -> Option<TimerHandle> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, (deadline, _))| *deadline <= self.horizon)
            .min_by_key(|(_, (deadline, handle))| (*deadline, *handle))
            .map(|(index, _)| index);

        match index {
            Some(index) => {
                let (deadline, handle) = self.pending.remove(index);
                self.now = deadline;
                Some(handle)
            },
            None => {
                self.now = self.horizon;
                None
            },
        }
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration) -> TimerHandle {
        let handle = TimerHandle::from_raw(self.next_id);
        self.next_id += 1;
        self.pending.push((self.now + delay, handle));
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.pending.retain(|(_, pending)| *pending != handle);
    }
}

// ============================================================================
// Shared Clock
// ============================================================================

/// Host-side handle on a [`ManualScheduler`] that bindings share.
///
/// Each call locks only for its own duration, so fired handles can be fed
/// straight back into the binding:
///
/// ```
/// use number_spin::interfaces::{ManualClock, MemoryElement};
/// use number_spin::prelude::*;
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// let clock = ManualClock::new();
/// let mut outcome = bind(
///     vec![MemoryElement::number_input().with_value("0")],
///     &SpinConfig::default(),
///     Arc::new(NoOpEventHandler),
/// );
/// let binding = &mut outcome.bound[0];
///
/// binding.on_pointer_down(StepDirection::Up, &clock.scheduler());
/// clock.advance(Duration::from_millis(700));
/// while let Some(handle) = clock.pop_due() {
///     binding.on_timer_fired(handle);
/// }
/// assert_eq!(binding.element().value(), "2");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ManualClock(Arc<Mutex<ManualScheduler>>);

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// The same scheduler, as handed to bindings
    pub fn scheduler(&self) -> SharedScheduler {
        self.0.clone()
    }

    pub fn now(&self) -> Duration {
        self.0.lock().now()
    }

    pub fn pending_count(&self) -> usize {
        self.0.lock().pending_count()
    }

    pub fn advance(&self, by: Duration) {
        self.0.lock().advance(by);
    }

    pub fn pop_due(&self) -> Option<TimerHandle> {
        self.0.lock().pop_due()
    }
}
