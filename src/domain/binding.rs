// ============================================================================
// Binding Domain Model
// ============================================================================

use std::fmt;
use uuid::Uuid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Value Objects
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BindingId(Uuid);

impl BindingId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for BindingId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BindingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StepDirection {
    /// Increment affordance, ArrowUp, wheel up
    Up,
    /// Decrement affordance, ArrowDown, wheel down
    Down,
}

impl fmt::Display for StepDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepDirection::Up => write!(f, "increment"),
            StepDirection::Down => write!(f, "decrement"),
        }
    }
}

// ============================================================================
// Widget State Machine
// ============================================================================

pub mod state {
    #[cfg(feature = "serde")]
    use serde::{Deserialize, Serialize};

    /// Lifecycle of one bound element.
    ///
    /// `Unbound -> Bound -> (Focused <-> Blurred)`. There is no terminal
    /// state; a binding ends when its element leaves the document.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    pub enum WidgetState {
        Unbound,
        Bound,
        Focused,
        Blurred,
    }

    impl WidgetState {
        /// Wheel events are only consumed while the element holds focus.
        pub fn accepts_wheel(&self) -> bool {
            matches!(self, WidgetState::Focused)
        }

        pub fn is_bound(&self) -> bool {
            !matches!(self, WidgetState::Unbound)
        }
    }

    #[derive(Debug, Clone, Copy)]
    pub enum WidgetTransition {
        Attach,
        Focus,
        Blur,
    }

    impl WidgetState {
        pub fn transition(&self, transition: WidgetTransition) -> Result<WidgetState, String> {
            match (self, transition) {
                (WidgetState::Unbound, WidgetTransition::Attach) => Ok(WidgetState::Bound),

                (WidgetState::Bound, WidgetTransition::Focus)
                | (WidgetState::Blurred, WidgetTransition::Focus)
                | (WidgetState::Focused, WidgetTransition::Focus) => Ok(WidgetState::Focused),

                (WidgetState::Bound, WidgetTransition::Blur)
                | (WidgetState::Focused, WidgetTransition::Blur)
                | (WidgetState::Blurred, WidgetTransition::Blur) => Ok(WidgetState::Blurred),

                _ => Err(format!(
                    "Invalid transition from {:?} via {:?}",
                    self, transition
                )),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::state::{WidgetState, WidgetTransition};
    use super::*;

    #[test]
    fn test_binding_ids_are_unique() {
        assert_ne!(BindingId::new(), BindingId::new());
    }

    #[test]
    fn test_focus_cycle() {
        let bound = WidgetState::Unbound
            .transition(WidgetTransition::Attach)
            .unwrap();
        assert_eq!(bound, WidgetState::Bound);
        assert!(!bound.accepts_wheel());

        let focused = bound.transition(WidgetTransition::Focus).unwrap();
        assert!(focused.accepts_wheel());

        let blurred = focused.transition(WidgetTransition::Blur).unwrap();
        assert!(!blurred.accepts_wheel());
        assert_eq!(
            blurred.transition(WidgetTransition::Focus).unwrap(),
            WidgetState::Focused
        );
    }

    #[test]
    fn test_invalid_transitions() {
        assert!(WidgetState::Unbound
            .transition(WidgetTransition::Focus)
            .is_err());
        assert!(WidgetState::Bound
            .transition(WidgetTransition::Attach)
            .is_err());
    }

    #[test]
    fn test_direction_display() {
        assert_eq!(StepDirection::Up.to_string(), "increment");
        assert_eq!(StepDirection::Down.to_string(), "decrement");
    }
}
