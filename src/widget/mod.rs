// ============================================================================
// Widget Module
// Binds elements and mediates host events into stepping operations
// ============================================================================

mod bind;
mod binding;
mod errors;
mod input;
mod repeat;
mod style_sync;

pub mod registry;

pub use bind::{bind, BindOutcome};
pub use binding::WidgetBinding;
pub use errors::BindError;
pub use input::{key_action, Disposition, Key, KeyAction, ObservedAttribute, WheelInput};
pub use repeat::{RepeatPhase, RepeatTimer};
pub use style_sync::MIRRORED_PROPERTIES;
