// ============================================================================
// Style Mirroring
// Copies transitional CSS state from the input onto the button container
// ============================================================================

use crate::interfaces::{AffordanceContainer, NumericElement};
use smallvec::SmallVec;

/// Properties copied from the input so fades and hides also apply to the buttons.
pub const MIRRORED_PROPERTIES: [&str; 18] = [
    "opacity",
    "visibility",
    "-moz-transition-property",
    "-moz-transition-duration",
    "-moz-transition-timing-function",
    "-moz-transition-delay",
    "-webkit-transition-property",
    "-webkit-transition-duration",
    "-webkit-transition-timing-function",
    "-webkit-transition-delay",
    "-o-transition-property",
    "-o-transition-duration",
    "-o-transition-timing-function",
    "-o-transition-delay",
    "transition-property",
    "transition-duration",
    "transition-timing-function",
    "transition-delay",
];

pub(crate) type StyleChanges = SmallVec<[(String, String); 4]>;

/// Style writes needed to bring the container in line with the element.
///
/// Only properties that differ are included; `display` is always present,
/// `none` when the element is hidden and `inherit` otherwise.
pub(crate) fn style_changes<E: NumericElement>(element: &E, container: &E::Container) -> StyleChanges {
    let mut changes = StyleChanges::new();

    for property in MIRRORED_PROPERTIES {
        if let Some(value) = element.computed_style(property) {
            if container.style(property).as_deref() != Some(value.as_str()) {
                changes.push((property.to_string(), value));
            }
        }
    }

    let display = match element.computed_style("display").as_deref() {
        Some("none") => "none",
        _ => "inherit",
    };
    changes.push(("display".to_string(), display.to_string()));

    changes
}
