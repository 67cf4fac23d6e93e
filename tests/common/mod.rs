//! Shared test infrastructure for analog-face integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use analog_face::{RedrawSink, ScheduleError, Scheduler, TimeDuration, TimeSource, WallClockSample};
use core::cell::{Cell, RefCell};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }
}

/// Mock time source with controllable time advancement (UTC, no offset)
pub struct MockTimeSource {
    epoch_millis: Cell<u64>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            epoch_millis: Cell::new(0),
        }
    }

    /// Time source starting at the given time of day on 1970-01-01
    pub fn at(hour: u64, minute: u64, second: u64, millis: u64) -> Self {
        let source = Self::new();
        source.set_millis(((hour * 60 + minute) * 60 + second) * 1_000 + millis);
        source
    }

    /// Advance time by the given number of milliseconds
    pub fn advance(&self, millis: u64) {
        self.epoch_millis.set(self.epoch_millis.get() + millis);
    }

    pub fn set_millis(&self, millis: u64) {
        self.epoch_millis.set(millis);
    }
}

impl TimeSource for MockTimeSource {
    fn now(&self) -> WallClockSample {
        WallClockSample::from_epoch_millis(self.epoch_millis.get(), 0)
    }

    fn epoch_millis(&self) -> u64 {
        self.epoch_millis.get()
    }
}

// ============================================================================
// Mock Scheduler
// ============================================================================

/// Mock scheduler that records every schedule and cancel call
///
/// The watch face owns its scheduler, so tests hand it `&MockScheduler` and
/// inspect the recorded calls through the shared reference.
pub struct MockScheduler {
    next_handle: Cell<u32>,
    live: RefCell<heapless::Vec<u32, 8>>,
    delays: RefCell<heapless::Vec<u64, 32>>,
    cancelled: RefCell<heapless::Vec<u32, 32>>,
    refuse: Cell<bool>,
}

impl MockScheduler {
    pub fn new() -> Self {
        Self {
            next_handle: Cell::new(0),
            live: RefCell::new(heapless::Vec::new()),
            delays: RefCell::new(heapless::Vec::new()),
            cancelled: RefCell::new(heapless::Vec::new()),
            refuse: Cell::new(false),
        }
    }

    /// Make subsequent schedule calls fail
    pub fn set_refuse(&self, refuse: bool) {
        self.refuse.set(refuse);
    }

    /// Handles scheduled and neither fired nor cancelled
    pub fn live(&self) -> heapless::Vec<u32, 8> {
        self.live.borrow().clone()
    }

    /// All requested delays in milliseconds, in order
    pub fn delays(&self) -> heapless::Vec<u64, 32> {
        self.delays.borrow().clone()
    }

    pub fn last_delay(&self) -> Option<u64> {
        self.delays.borrow().last().copied()
    }

    pub fn cancelled(&self) -> heapless::Vec<u32, 32> {
        self.cancelled.borrow().clone()
    }

    /// Simulate the host firing the pending callback, returning its handle
    pub fn fire(&self) -> Option<u32> {
        let mut live = self.live.borrow_mut();
        if live.is_empty() {
            None
        } else {
            Some(live.remove(0))
        }
    }
}

impl Scheduler for &MockScheduler {
    type Duration = TestDuration;
    type Handle = u32;

    fn schedule(&mut self, delay: TestDuration) -> Result<u32, ScheduleError> {
        if self.refuse.get() {
            return Err(ScheduleError::Rejected);
        }
        let handle = self.next_handle.get() + 1;
        self.next_handle.set(handle);
        let _ = self.live.borrow_mut().push(handle);
        let _ = self.delays.borrow_mut().push(delay.0);
        Ok(handle)
    }

    fn cancel(&mut self, handle: u32) {
        self.live.borrow_mut().retain(|h| *h != handle);
        let _ = self.cancelled.borrow_mut().push(handle);
    }
}

// ============================================================================
// Mock Redraw Sink
// ============================================================================

/// Mock host that counts redraw requests
pub struct MockHost {
    redraws: Cell<u32>,
}

impl MockHost {
    pub fn new() -> Self {
        Self {
            redraws: Cell::new(0),
        }
    }

    pub fn redraws(&self) -> u32 {
        self.redraws.get()
    }
}

impl RedrawSink for &MockHost {
    fn request_redraw(&mut self) {
        self.redraws.set(self.redraws.get() + 1);
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

pub fn sample(hour: u8, minute: u8, second: u8) -> WallClockSample {
    WallClockSample::new(hour, minute, second).unwrap()
}

/// Compare two points with floating-point tolerance
pub fn points_close(a: analog_face::Point, b: analog_face::Point) -> bool {
    const EPSILON: f32 = 0.01;
    (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON
}
