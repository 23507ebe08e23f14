// ============================================================================
// Repeat Timer
// Transient press-and-hold state of one binding
// ============================================================================

use crate::domain::StepDirection;
use crate::interfaces::{SharedScheduler, TimerHandle};
use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatPhase {
    /// Waiting out the long initial delay
    InitialDelay,
    /// Firing on the short interval
    Repeating,
}

/// The single outstanding timer of a held spin button.
///
/// Owns its pending timer: dropping the `RepeatTimer` (release, leave, or
/// the binding itself going away) cancels it on the scheduler.
pub struct RepeatTimer {
    handle: TimerHandle,
    direction: StepDirection,
    phase: RepeatPhase,
    repeats: u32,
    scheduler: SharedScheduler,
}

impl RepeatTimer {
    /// Schedule the initial delay.
    pub(crate) fn arm(scheduler: SharedScheduler, delay: Duration, direction: StepDirection) -> Self {
        let handle = scheduler.lock().schedule(delay);
        Self {
            handle,
            direction,
            phase: RepeatPhase::InitialDelay,
            repeats: 0,
            scheduler,
        }
    }

    /// Record one firing and schedule the next.
    pub(crate) fn rearm(&mut self, interval: Duration) {
        let mut scheduler = self.scheduler.lock();
        scheduler.cancel(self.handle);
        self.handle = scheduler.schedule(interval);
        drop(scheduler);
        self.phase = RepeatPhase::Repeating;
        self.repeats += 1;
    }

    #[inline]
    pub fn handle(&self) -> TimerHandle {
        self.handle
    }

    #[inline]
    pub fn direction(&self) -> StepDirection {
        self.direction
    }

    #[inline]
    pub fn phase(&self) -> RepeatPhase {
        self.phase
    }

    /// Steps fired by the timer so far (the immediate step is not counted)
    #[inline]
    pub fn repeats(&self) -> u32 {
        self.repeats
    }
}

impl Drop for RepeatTimer {
    fn drop(&mut self) {
        self.scheduler.lock().cancel(self.handle);
    }
}

impl fmt::Debug for RepeatTimer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RepeatTimer")
            .field("handle", &self.handle)
            .field("direction", &self.direction)
            .field("phase", &self.phase)
            .field("repeats", &self.repeats)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::ManualClock;

    #[test]
    fn test_phases() {
        let clock = ManualClock::new();
        let mut timer = RepeatTimer::arm(clock.scheduler(), Duration::from_millis(700), StepDirection::Up);
        assert_eq!(timer.phase(), RepeatPhase::InitialDelay);
        assert_eq!(timer.repeats(), 0);

        clock.advance(Duration::from_millis(700));
        assert_eq!(clock.pop_due(), Some(timer.handle()));
        timer.rearm(Duration::from_millis(10));
        timer.rearm(Duration::from_millis(10));
        assert_eq!(timer.phase(), RepeatPhase::Repeating);
        assert_eq!(timer.repeats(), 2);
        assert_eq!(timer.direction(), StepDirection::Up);
    }

    #[test]
    fn test_drop_cancels_pending_timer() {
        let clock = ManualClock::new();
        let timer = RepeatTimer::arm(clock.scheduler(), Duration::from_millis(700), StepDirection::Down);
        assert_eq!(clock.pending_count(), 1);

        drop(timer);
        assert_eq!(clock.pending_count(), 0);
        clock.advance(Duration::from_secs(1));
        assert_eq!(clock.pop_due(), None);
    }
}
