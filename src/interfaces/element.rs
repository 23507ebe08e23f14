// ============================================================================
// Element Interface
// Contract between the spin engine and the host's input element
// ============================================================================

/// Attributes whose mutation the host must report through
/// [`WidgetBinding::on_attribute_changed`](crate::widget::WidgetBinding::on_attribute_changed).
pub const OBSERVED_ATTRIBUTES: [&str; 5] = ["class", "style", "min", "max", "step"];

/// Everything the host needs to build the two spin buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffordanceSpec {
    /// Class list shared by both buttons (includes the disabled class when applicable)
    pub class: String,
    /// Content of the increment button
    pub increment_markup: String,
    /// Content of the decrement button
    pub decrement_markup: String,
}

/// A numeric input element owned by the host environment.
///
/// The engine reads `min`, `max`, `step` and the current value through this
/// trait and only ever writes the value. Element creation, wrapping and CSS
/// class assembly stay on the host side of [`attach_affordances`].
///
/// [`attach_affordances`]: NumericElement::attach_affordances
pub trait NumericElement {
    /// Container holding the two spin buttons
    type Container: AffordanceContainer;

    /// Whether this element is an input of the numeric kind
    fn is_number_input(&self) -> bool;

    /// Whether spin buttons are already attached next to this element
    fn has_affordances(&self) -> bool;

    /// Whether the element is part of the document
    fn is_attached(&self) -> bool;

    /// Rendered height; zero when hidden or not laid out
    fn measured_height(&self) -> f64;

    /// Raw attribute text
    fn attribute(&self, name: &str) -> Option<String>;

    /// Current value text
    fn value(&self) -> String;

    /// Overwrite the value text. Must not emit a change notification by itself.
    fn set_value(&mut self, value: &str);

    fn is_disabled(&self) -> bool;

    /// Computed style property, e.g. `opacity` or `display`
    fn computed_style(&self, property: &str) -> Option<String>;

    /// Build the spin buttons and their container next to the element
    fn attach_affordances(&mut self, spec: &AffordanceSpec) -> Self::Container;

    /// Fire the platform's change notification.
    ///
    /// Called right after the binding writes a value and again when `min`,
    /// `max` or `step` change, in both cases before the binding re-validates.
    /// A host that routes the notification back into `on_change` gets the
    /// same correction the binding is about to apply itself.
    fn dispatch_change(&mut self);
}

/// The element wrapping the spin buttons; only its style is touched.
pub trait AffordanceContainer {
    fn style(&self, property: &str) -> Option<String>;

    /// Apply several style properties at once
    fn apply_style(&mut self, changes: &[(String, String)]);
}
