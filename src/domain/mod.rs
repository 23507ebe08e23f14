// ============================================================================
// Domain Models Module
// Contains the core value objects, configuration and state machine
// ============================================================================

pub mod binding;
pub mod config;
pub mod params;

pub use binding::{BindingId, StepDirection};
pub use config::{RepeatTiming, SpinConfig};
pub use params::StepParameters;

// Re-export state machine
pub use binding::state::{WidgetState, WidgetTransition};
