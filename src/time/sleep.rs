use std::mem::MaybeUninit;
use std::time::Duration;

use libc::timespec;

use super::panic::{BadStackAddrPanic, UnexpectedErrorPanic};
use super::syscall::{err_no, from_timespec, to_timespec};
use super::{Instant, InterruptError, InvalidDurationError, SleepError};
use crate::util::panic::Panic;

/// Suspends the current thread for at least `duration`, with a single call to `nanosleep`.
///
/// If a signal handler interrupts the sleep, an [`InterruptError`] is returned with the time that
/// was left. [`sleep_until`] handles this itself.
pub fn sleep(duration: Duration) -> Result<(), SleepError> {
    let request = to_timespec(duration)?;
    let mut remaining: MaybeUninit<timespec> = MaybeUninit::uninit();

    // SAFETY: request is a valid timespec and remaining is a valid pointer to enough space for
    // another.
    if unsafe { libc::nanosleep(&request, remaining.as_mut_ptr()) } == -1 {
        match err_no() {
            libc::EINTR => {
                // SAFETY: nanosleep writes the remaining time when interrupted.
                let remaining = unsafe { remaining.assume_init() };
                Err(InterruptError {
                    remaining: from_timespec(&remaining),
                })?
            },
            libc::EINVAL => Err(InvalidDurationError)?,
            libc::EFAULT => BadStackAddrPanic.panic(),
            e => UnexpectedErrorPanic(e).panic(),
        }
    }
    Ok(())
}

/// Suspends the current thread until the monotonic clock reaches `deadline`. Returns immediately
/// if it already has.
///
/// Interruptions are retried until the deadline is reached.
pub fn sleep_until(deadline: Instant) -> Result<(), InvalidDurationError> {
    loop {
        let now = Instant::now();
        if now >= deadline {
            return Ok(());
        }

        match sleep(deadline - now) {
            Ok(()) => {},
            Err(SleepError::Interrupt(InterruptError { remaining })) => {
                tracing::warn!(?remaining, "sleep interrupted by signal, retrying");
            },
            Err(SleepError::InvalidDuration(e)) => return Err(e),
        }
    }
}
