// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts with the host environment
// ============================================================================

mod element;
mod event_handler;
mod memory;
mod scheduler;

pub use element::{AffordanceContainer, AffordanceSpec, NumericElement, OBSERVED_ATTRIBUTES};
pub use event_handler::{EventHandler, LoggingEventHandler, NoOpEventHandler, SpinEvent};
pub use memory::{ManualClock, ManualScheduler, MemoryContainer, MemoryElement};
pub use scheduler::{Scheduler, SharedScheduler, TimerHandle};
