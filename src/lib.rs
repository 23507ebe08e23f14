// ============================================================================
// Number Spin Library
// Fallback numeric spin input with exact decimal stepping
// ============================================================================

//! # Number Spin
//!
//! Spin buttons for numeric inputs on hosts whose native control is missing
//! or incomplete.
//!
//! ## Features
//!
//! - **Exact decimal arithmetic** on strings, never binary floating point
//! - **Clipping and step-lattice snapping** against `min`/`max`/`step`
//! - **Keyboard, wheel and attribute handlers** on an explicit binding object
//! - **Press-and-hold repeat** with a long initial pause and fast repeats
//! - **Injected host collaborators** for elements, timers and capability probing
//!
//! ## Example
//!
//! ```rust
//! use number_spin::prelude::*;
//! use number_spin::interfaces::MemoryElement;
//! use std::sync::Arc;
//!
//! assert_eq!(add("0.1", "0.2").unwrap(), "0.3");
//!
//! let input = MemoryElement::number_input()
//!     .with_attribute("min", "0")
//!     .with_attribute("max", "10")
//!     .with_attribute("step", "0.5")
//!     .with_value("9.8");
//!
//! let mut outcome = bind(vec![input], &SpinConfig::default(), Arc::new(NoOpEventHandler));
//! let binding = &mut outcome.bound[0];
//!
//! binding.increment();
//! assert_eq!(binding.element().value(), "10");
//! ```

pub mod domain;
pub mod interfaces;
pub mod numeric;
pub mod platform;
pub mod stepping;
pub mod utils;
pub mod widget;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        BindingId, RepeatTiming, SpinConfig, StepDirection, StepParameters, WidgetState,
        WidgetTransition,
    };
    pub use crate::interfaces::{
        AffordanceContainer, EventHandler, LoggingEventHandler, NoOpEventHandler,
        NumericElement, Scheduler, SharedScheduler, SpinEvent, TimerHandle,
    };
    pub use crate::numeric::{add, subtract, DecimalValue, NumericError};
    pub use crate::platform::{input_number, Applied, CapabilityProbe, NativeSupport, StaticProbe};
    pub use crate::widget::{
        bind, BindError, BindOutcome, Disposition, Key, WheelInput, WidgetBinding,
    };
}
