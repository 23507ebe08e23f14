// ============================================================================
// Event Handler Interface
// Defines the contract for observing spin control events
// ============================================================================

use crate::domain::{BindingId, StepDirection};
use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by widget bindings
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SpinEvent {
    /// Spin buttons attached to an element
    Bound {
        binding_id: BindingId,
        timestamp: DateTime<Utc>,
    },

    /// Element refused during a bind batch
    BindRejected {
        reason: String,
        timestamp: DateTime<Utc>,
    },

    /// Value moved by one step
    Stepped {
        binding_id: BindingId,
        direction: StepDirection,
        value: String,
        timestamp: DateTime<Utc>,
    },

    /// Change policy rewrote the value text
    ValueCorrected {
        binding_id: BindingId,
        from: String,
        to: String,
        timestamp: DateTime<Utc>,
    },

    /// Press-and-hold armed its first delayed repeat
    RepeatArmed {
        binding_id: BindingId,
        direction: StepDirection,
        timestamp: DateTime<Utc>,
    },

    /// Press-and-hold released
    RepeatCancelled {
        binding_id: BindingId,
        repeats: u32,
        timestamp: DateTime<Utc>,
    },

    /// Binding torn down explicitly
    Unbound {
        binding_id: BindingId,
        timestamp: DateTime<Utc>,
    },
}

/// Event handler trait for processing spin events
/// Implementations can handle logging, metrics, test recording, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a spin event
    fn on_event(&self, event: SpinEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<SpinEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: SpinEvent) {}
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: SpinEvent) {
        tracing::debug!("Spin control event: {:?}", event);
    }
}
