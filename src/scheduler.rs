//! Redraw timer: the host scheduling seam and the single-pending-callback timer.

use crate::time::TimeDuration;

/// Interactive redraw period. The second hand advances once per period.
pub const INTERACTIVE_UPDATE_RATE_MS: u64 = 1_000;

/// Trait for abstracting the host's one-shot timer service.
///
/// When a scheduled callback fires, the host must pass its handle to
/// [`WatchFace::on_timer_fired`](crate::WatchFace::on_timer_fired).
pub trait Scheduler {
    /// Delay type accepted by the host timer.
    type Duration: TimeDuration;

    /// Identifies one scheduled callback.
    type Handle: Copy + PartialEq;

    /// Schedules a callback after `delay`.
    fn schedule(&mut self, delay: Self::Duration) -> Result<Self::Handle, ScheduleError>;

    /// Cancels a pending callback. Cancelling a fired or unknown handle is a no-op.
    fn cancel(&mut self, handle: Self::Handle);
}

/// Errors reported by a [`Scheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScheduleError {
    /// The host refused to schedule the callback.
    Rejected,
}

impl core::fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ScheduleError::Rejected => write!(f, "host refused to schedule the redraw timer"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ScheduleError {}

/// Delay until the next whole-second boundary.
///
/// Returns a value in `1..=1000` ms; exactly on a boundary it waits a full period.
pub fn next_tick_delay<D: TimeDuration>(now_millis: u64) -> D {
    D::from_millis(INTERACTIVE_UPDATE_RATE_MS - (now_millis % INTERACTIVE_UPDATE_RATE_MS))
}

/// Holds at most one pending scheduler handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickTimer<H> {
    pending: Option<H>,
}

impl<H: Copy + PartialEq> TickTimer<H> {
    pub const fn new() -> Self {
        Self { pending: None }
    }

    /// Cancels any pending callback, then schedules a new one after `delay`.
    ///
    /// On error no callback is pending.
    pub fn arm<S>(&mut self, scheduler: &mut S, delay: S::Duration) -> Result<(), ScheduleError>
    where
        S: Scheduler<Handle = H>,
    {
        self.disarm(scheduler);
        let handle = scheduler.schedule(delay)?;
        self.pending = Some(handle);
        Ok(())
    }

    /// Cancels the pending callback, if any.
    pub fn disarm<S>(&mut self, scheduler: &mut S)
    where
        S: Scheduler<Handle = H>,
    {
        if let Some(handle) = self.pending.take() {
            scheduler.cancel(handle);
        }
    }

    /// Marks the pending callback as fired if `handle` is the pending one.
    ///
    /// Returns false for stale handles.
    pub fn fire(&mut self, handle: H) -> bool {
        if self.pending == Some(handle) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns true if `handle` is the pending callback.
    pub fn is_current(&self, handle: H) -> bool {
        self.pending == Some(handle)
    }
}

impl<H: Copy + PartialEq> Default for TickTimer<H> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::time::Duration;

    struct CountingScheduler {
        next: u32,
        live: Option<u32>,
        cancelled: u32,
        refuse: bool,
    }

    impl Scheduler for CountingScheduler {
        type Duration = Duration;
        type Handle = u32;

        fn schedule(&mut self, _delay: Duration) -> Result<u32, ScheduleError> {
            if self.refuse {
                return Err(ScheduleError::Rejected);
            }
            assert!(self.live.is_none(), "two callbacks pending");
            self.next += 1;
            self.live = Some(self.next);
            Ok(self.next)
        }

        fn cancel(&mut self, handle: u32) {
            if self.live == Some(handle) {
                self.live = None;
            }
            self.cancelled += 1;
        }
    }

    fn scheduler() -> CountingScheduler {
        CountingScheduler {
            next: 0,
            live: None,
            cancelled: 0,
            refuse: false,
        }
    }

    #[test]
    fn delay_aligns_to_second_boundary() {
        let d: Duration = next_tick_delay(12_345);
        assert_eq!(d, Duration::from_millis(655));
        let d: Duration = next_tick_delay(1_000);
        assert_eq!(d, Duration::from_millis(1_000));
        let d: Duration = next_tick_delay(1_999);
        assert_eq!(d, Duration::from_millis(1));
    }

    #[test]
    fn rearm_cancels_previous() {
        let mut s = scheduler();
        let mut timer = TickTimer::new();
        timer.arm(&mut s, Duration::ZERO).unwrap();
        timer.arm(&mut s, Duration::from_millis(500)).unwrap();
        assert_eq!(s.cancelled, 1);
        assert!(timer.is_current(2));
        assert!(!timer.is_current(1));
    }

    #[test]
    fn failed_arm_leaves_nothing_pending() {
        let mut s = scheduler();
        let mut timer = TickTimer::new();
        timer.arm(&mut s, Duration::ZERO).unwrap();
        s.refuse = true;
        assert_eq!(timer.arm(&mut s, Duration::ZERO), Err(ScheduleError::Rejected));
        assert!(!timer.is_pending());
        assert!(s.live.is_none());
    }

    #[test]
    fn fire_ignores_stale_handle() {
        let mut s = scheduler();
        let mut timer = TickTimer::new();
        timer.arm(&mut s, Duration::ZERO).unwrap();
        assert!(!timer.fire(7));
        assert!(timer.fire(1));
        assert!(!timer.is_pending());
    }
}
