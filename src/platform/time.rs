//! Frame scheduling
//!
//! The loop never runs its own timer. It asks a `FrameScheduler` for one more
//! frame signal, and the driver calls back into the loop when it fires.

use std::time::{Duration, Instant};

/// Source of per-frame signals (display refresh, a fake clock in tests)
pub trait FrameScheduler {
    /// Ask for one more frame signal
    fn request_next_tick(&mut self);

    /// Consume the outstanding request, if any. Drivers call this when the
    /// signal fires and only tick the loop on `true`.
    fn take_request(&mut self) -> bool;

    /// Whether a request is outstanding
    fn is_pending(&self) -> bool;
}

/// Deterministic scheduler: signals fire only when the driver says so
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    pending: bool,
    /// Total requests made (for tests and diagnostics)
    requests: u64,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> u64 {
        self.requests
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_next_tick(&mut self) {
        self.pending = true;
        self.requests += 1;
    }

    fn take_request(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    fn is_pending(&self) -> bool {
        self.pending
    }
}

/// Real-time scheduler pacing signals at a fixed interval
#[derive(Debug, Clone)]
pub struct FixedRateScheduler {
    interval: Duration,
    next_deadline: Instant,
    pending: bool,
}

impl FixedRateScheduler {
    /// 60 Hz, the display rate the tuning constants assume
    pub fn sixty_hz() -> Self {
        Self::new(Duration::from_micros(16_667))
    }

    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_deadline: Instant::now(),
            pending: false,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Block until the next frame deadline if a request is outstanding.
    /// Returns whether a signal fired.
    pub fn wait(&mut self) -> bool {
        if !self.pending {
            return false;
        }
        let now = Instant::now();
        if self.next_deadline > now {
            std::thread::sleep(self.next_deadline - now);
        } else {
            // Fell behind (stall, debugger); restart the cadence from now
            self.next_deadline = now;
        }
        self.next_deadline += self.interval;
        self.take_request()
    }
}

impl FrameScheduler for FixedRateScheduler {
    fn request_next_tick(&mut self) {
        self.pending = true;
    }

    fn take_request(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    fn is_pending(&self) -> bool {
        self.pending
    }
}
