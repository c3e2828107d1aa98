use std::mem::MaybeUninit;
use std::ops::{Add, Sub};
use std::time::Duration;

use libc::timespec;

use super::panic::{BadStackAddrPanic, ClockUnsupportedPanic, UnexpectedErrorPanic};
use super::syscall::{err_no, from_timespec};
use crate::util::panic::Panic;

/// A reading of the system's monotonic clock, which never goes backwards.
///
/// Only the difference between two instants is meaningful. Arithmetic saturates instead of
/// overflowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant {
    pub(crate) since_epoch: Duration,
}

impl Instant {
    /// Reads the current time from `CLOCK_MONOTONIC`.
    ///
    /// # Panics
    /// Panics if the system doesn't support a monotonic clock.
    pub fn now() -> Instant {
        let mut raw: MaybeUninit<timespec> = MaybeUninit::uninit();
        // SAFETY: raw is a valid pointer to enough space for a timespec.
        if unsafe { libc::clock_gettime(libc::CLOCK_MONOTONIC, raw.as_mut_ptr()) } == -1 {
            match err_no() {
                libc::EFAULT => BadStackAddrPanic.panic(),
                libc::EINVAL => ClockUnsupportedPanic.panic(),
                e => UnexpectedErrorPanic(e).panic(),
            }
        }
        // SAFETY: clock_gettime either initializes raw or returns an error and diverges.
        let raw = unsafe { raw.assume_init() };

        Instant {
            since_epoch: from_timespec(&raw),
        }
    }

    /// Returns the time elapsed between `earlier` and `self`, or zero if `earlier` is later.
    pub const fn saturating_duration_since(&self, earlier: Instant) -> Duration {
        self.since_epoch.saturating_sub(earlier.since_epoch)
    }

    /// Returns the time elapsed since `self` was read.
    ///
    /// # Panics
    /// Panics if the system doesn't support a monotonic clock.
    pub fn elapsed(&self) -> Duration {
        Instant::now().saturating_duration_since(*self)
    }
}

impl Add<Duration> for Instant {
    type Output = Instant;

    fn add(self, rhs: Duration) -> Instant {
        Instant {
            since_epoch: self.since_epoch.saturating_add(rhs),
        }
    }
}

impl Sub for Instant {
    type Output = Duration;

    fn sub(self, rhs: Instant) -> Duration {
        self.saturating_duration_since(rhs)
    }
}
