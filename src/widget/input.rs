// ============================================================================
// Input Policy
// Keystroke filtering, wheel direction and observed attribute names
// ============================================================================

use crate::domain::StepDirection;

/// What the host should do with the event's default action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Let the platform handle the event as usual
    Default,
    /// Suppress the platform's default action
    PreventDefault,
}

// ============================================================================
// Keyboard
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Backspace,
    Tab,
    Delete,
    Home,
    End,
    Character(char),
    Other,
}

impl Key {
    /// Decode legacy `keypress` codes.
    ///
    /// `key_code` identifies navigation keys; `which` carries the character
    /// code for printable keys.
    pub fn from_codes(key_code: u32, which: u32) -> Self {
        match key_code {
            38 => Key::ArrowUp,
            40 => Key::ArrowDown,
            37 => Key::ArrowLeft,
            39 => Key::ArrowRight,
            8 => Key::Backspace,
            9 => Key::Tab,
            46 => Key::Delete,
            36 => Key::Home,
            35 => Key::End,
            _ => char::from_u32(which)
                .filter(|c| !c.is_control())
                .map_or(Key::Other, Key::Character),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Step(StepDirection),
    PassThrough,
    Suppress,
}

/// Keystroke policy: arrows step, editing keys, digits and `-` pass,
/// everything else is blocked.
pub fn key_action(key: Key) -> KeyAction {
    match key {
        Key::ArrowUp => KeyAction::Step(StepDirection::Up),
        Key::ArrowDown => KeyAction::Step(StepDirection::Down),
        Key::ArrowLeft
        | Key::ArrowRight
        | Key::Backspace
        | Key::Tab
        | Key::Delete
        | Key::Home
        | Key::End => KeyAction::PassThrough,
        Key::Character(c) if c.is_ascii_digit() || c == '-' => KeyAction::PassThrough,
        Key::Character(_) | Key::Other => KeyAction::Suppress,
    }
}

// ============================================================================
// Wheel
// ============================================================================

/// Wheel input in either of the two legacy conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelInput {
    /// `mousewheel.wheelDelta`: positive means up
    WheelDelta(i32),
    /// `DOMMouseScroll.detail`: negative means up
    ScrollDetail(i32),
}

impl WheelInput {
    pub fn direction(self) -> StepDirection {
        match self {
            WheelInput::WheelDelta(delta) if delta > 0 => StepDirection::Up,
            WheelInput::ScrollDetail(detail) if detail < 0 => StepDirection::Up,
            _ => StepDirection::Down,
        }
    }
}

// ============================================================================
// Observed attributes
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObservedAttribute {
    Class,
    Style,
    Min,
    Max,
    Step,
}

impl ObservedAttribute {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "class" => Some(ObservedAttribute::Class),
            "style" => Some(ObservedAttribute::Style),
            "min" => Some(ObservedAttribute::Min),
            "max" => Some(ObservedAttribute::Max),
            "step" => Some(ObservedAttribute::Step),
            _ => None,
        }
    }

    /// Presentation attributes are mirrored; constraint attributes re-validate.
    pub fn is_presentational(self) -> bool {
        matches!(self, ObservedAttribute::Class | ObservedAttribute::Style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::OBSERVED_ATTRIBUTES;

    #[test]
    fn test_arrow_keys_step() {
        assert_eq!(
            key_action(Key::from_codes(38, 0)),
            KeyAction::Step(StepDirection::Up)
        );
        assert_eq!(
            key_action(Key::from_codes(40, 0)),
            KeyAction::Step(StepDirection::Down)
        );
    }

    #[test]
    fn test_editing_keys_pass() {
        for code in [8, 9, 35, 36, 37, 39, 46] {
            assert_eq!(key_action(Key::from_codes(code, 0)), KeyAction::PassThrough);
        }
    }

    #[test]
    fn test_digits_and_minus_pass() {
        for which in (48..=57).chain([45]) {
            assert_eq!(key_action(Key::from_codes(0, which)), KeyAction::PassThrough);
        }
    }

    #[test]
    fn test_everything_else_suppressed() {
        for c in ['a', 'e', '+', ' ', ','] {
            assert_eq!(key_action(Key::Character(c)), KeyAction::Suppress);
        }
        assert_eq!(key_action(Key::from_codes(0, 13)), KeyAction::Suppress);
    }

    #[test]
    fn test_wheel_conventions() {
        assert_eq!(WheelInput::WheelDelta(120).direction(), StepDirection::Up);
        assert_eq!(WheelInput::WheelDelta(-120).direction(), StepDirection::Down);
        assert_eq!(WheelInput::ScrollDetail(-3).direction(), StepDirection::Up);
        assert_eq!(WheelInput::ScrollDetail(3).direction(), StepDirection::Down);
    }

    #[test]
    fn test_observed_attribute_names() {
        for name in OBSERVED_ATTRIBUTES {
            assert!(ObservedAttribute::from_name(name).is_some(), "{}", name);
        }
        assert_eq!(ObservedAttribute::from_name("value"), None);
        assert!(ObservedAttribute::Style.is_presentational());
        assert!(!ObservedAttribute::Step.is_presentational());
    }
}
