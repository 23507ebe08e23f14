// ============================================================================
// Scheduler Interface
// One-shot timers for press-and-hold repeat
// ============================================================================

use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Opaque identifier of a scheduled one-shot timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

impl TimerHandle {
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// Host timer facility (`setTimeout`/`clearTimeout` in a browser).
///
/// When a timer elapses the host calls
/// [`WidgetBinding::on_timer_fired`](crate::widget::WidgetBinding::on_timer_fired)
/// with its handle. Cancelling an unknown or already fired handle is a no-op.
pub trait Scheduler {
    fn schedule(&mut self, delay: Duration) -> TimerHandle;

    fn cancel(&mut self, handle: TimerHandle);
}

/// Scheduler shared between the host and the bindings arming timers on it.
///
/// A held repeat timer keeps a clone and cancels itself when dropped, so a
/// binding that goes away mid-hold leaves nothing pending. The lock is taken
/// briefly inside binding calls; never call into a binding while holding it.
pub type SharedScheduler = Arc<Mutex<dyn Scheduler + Send>>;
