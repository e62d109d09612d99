//! Real-time interval timers.
//!
//! The battle screen runs two one-second timers outside the turn cycle:
//! the cooldown countdown and the turn-timer display. Time is pushed in
//! from the host loop; a timer converts elapsed time into whole ticks and
//! carries the remainder.

use std::time::Duration;

/// Lifecycle of an interval timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerStatus {
    Running,
    Paused,
    /// Torn down; never ticks again.
    Cancelled,
}

/// Fixed-period timer driven by elapsed time.
#[derive(Clone, Debug)]
pub struct IntervalTimer {
    period: Duration,
    carry: Duration,
    status: TimerStatus,
}

impl IntervalTimer {
    /// A running timer with the given period.
    ///
    /// A zero period is bumped to one millisecond.
    #[must_use]
    pub fn new(period: Duration) -> Self {
        Self {
            period: period.max(Duration::from_millis(1)),
            carry: Duration::ZERO,
            status: TimerStatus::Running,
        }
    }

    /// A running one-second timer.
    #[must_use]
    pub fn every_second() -> Self {
        Self::new(Duration::from_secs(1))
    }

    /// Feed elapsed time; returns how many periods completed.
    ///
    /// Paused and cancelled timers swallow the time without ticking.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if self.status != TimerStatus::Running {
            return 0;
        }

        self.carry += elapsed;
        let mut ticks = 0;
        while self.carry >= self.period {
            self.carry -= self.period;
            ticks += 1;
        }
        ticks
    }

    pub fn pause(&mut self) {
        if self.status == TimerStatus::Running {
            self.status = TimerStatus::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.status == TimerStatus::Paused {
            self.status = TimerStatus::Running;
        }
    }

    /// Drop the partial period, e.g. when the display is reset.
    pub fn restart(&mut self) {
        self.carry = Duration::ZERO;
    }

    pub fn cancel(&mut self) {
        self.status = TimerStatus::Cancelled;
        self.carry = Duration::ZERO;
    }

    #[must_use]
    pub fn status(&self) -> TimerStatus {
        self.status
    }
}
