// ============================================================================
// Spin Control Configuration
// Affordance styling, markup and press-and-hold timing
// ============================================================================

use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default class list applied to both spin buttons.
pub const DEFAULT_AFFORDANCE_STYLE: &str = "btn btn-xs btn-default";

/// Class appended to the button class list when the input is disabled.
pub const DEFAULT_DISABLED_AFFORDANCE_STYLE: &str = "disabled";

/// Default content of the increment button.
pub const DEFAULT_INCREMENT_MARKUP: &str = "<i class='caret caret-sm caret-up' />";

/// Default content of the decrement button.
pub const DEFAULT_DECREMENT_MARKUP: &str = "<i class='caret caret-sm' />";

// ============================================================================
// Repeat Timing
// ============================================================================

/// Two-tier delay for press-and-hold: one long pause, then fast repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RepeatTiming {
    /// Pause between the immediate step and the first repeat
    pub initial_delay: Duration,
    /// Pause between consecutive repeats
    pub interval: Duration,
}

impl RepeatTiming {
    pub const fn new(initial_delay: Duration, interval: Duration) -> Self {
        Self {
            initial_delay,
            interval,
        }
    }
}

impl Default for RepeatTiming {
    fn default() -> Self {
        Self::new(Duration::from_millis(700), Duration::from_millis(10))
    }
}

// ============================================================================
// Complete Spin Configuration
// ============================================================================

/// Configuration passed to [`bind`](crate::widget::bind).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpinConfig {
    /// Class appended to the affordances of a disabled input
    pub disabled_affordance_style: String,

    /// Class list shared by both affordances
    pub affordance_style: String,

    /// Content of the increment affordance
    pub increment_affordance_markup: String,

    /// Content of the decrement affordance
    pub decrement_affordance_markup: String,

    /// Press-and-hold timing
    pub repeat: RepeatTiming,
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self {
            disabled_affordance_style: DEFAULT_DISABLED_AFFORDANCE_STYLE.to_string(),
            affordance_style: DEFAULT_AFFORDANCE_STYLE.to_string(),
            increment_affordance_markup: DEFAULT_INCREMENT_MARKUP.to_string(),
            decrement_affordance_markup: DEFAULT_DECREMENT_MARKUP.to_string(),
            repeat: RepeatTiming::default(),
        }
    }
}

impl SpinConfig {
    /// Builder method: Set the shared affordance class list
    pub fn with_affordance_style(mut self, style: impl Into<String>) -> Self {
        self.affordance_style = style.into();
        self
    }

    /// Builder method: Set the class appended for disabled inputs
    pub fn with_disabled_affordance_style(mut self, style: impl Into<String>) -> Self {
        self.disabled_affordance_style = style.into();
        self
    }

    /// Builder method: Set the affordance contents
    pub fn with_markup(
        mut self,
        increment: impl Into<String>,
        decrement: impl Into<String>,
    ) -> Self {
        self.increment_affordance_markup = increment.into();
        self.decrement_affordance_markup = decrement.into();
        self
    }

    /// Builder method: Set press-and-hold timing
    pub fn with_repeat(mut self, repeat: RepeatTiming) -> Self {
        self.repeat = repeat;
        self
    }

    /// Class list for the affordances of an input with the given disabled state.
    pub fn affordance_class(&self, disabled: bool) -> String {
        let base = self.affordance_style.trim();
        let extra = self.disabled_affordance_style.trim();
        if disabled && !extra.is_empty() {
            format!("{} {}", base, extra).trim().to_string()
        } else {
            base.to_string()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.repeat.interval.is_zero() {
            return Err("Repeat interval must be positive".to_string());
        }

        if self.repeat.initial_delay < self.repeat.interval {
            return Err("Initial repeat delay cannot be shorter than the repeat interval".to_string());
        }

        Ok(())
    }
}

// ============================================================================
// JSON Loading
// ============================================================================

#[cfg(feature = "serde")]
impl SpinConfig {
    /// Parse and validate a configuration. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: Self = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self).map_err(|e| e.to_string())
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl SpinConfig {
    /// Plain-text affordances for hosts without an icon font
    pub fn text_arrows() -> Self {
        Self::default().with_markup("\u{25B2}", "\u{25BC}")
    }

    /// Deterministic timing for tests and scripted demos
    /// - 100 unit pause, 10 unit repeat
    pub fn fast_repeat() -> Self {
        Self::default().with_repeat(RepeatTiming::new(
            Duration::from_millis(100),
            Duration::from_millis(10),
        ))
    }
}
