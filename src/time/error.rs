use std::time::Duration;

use derive_more::{Display, Error, From, IsVariant};

/// A sleep was cut short by a signal handler.
#[derive(Debug, Display, Clone, Copy, PartialEq, Error)]
#[display("interrupted by signal with {remaining:?} left to sleep")]
pub struct InterruptError {
    /// The part of the requested duration that wasn't slept.
    pub remaining: Duration,
}

/// The duration is too long for the system clock to represent.
#[derive(Debug, Display, Clone, Copy, PartialEq, Error)]
#[display("duration can't be represented by the system clock")]
pub struct InvalidDurationError;

/// An error returned by [`sleep`](super::sleep).
#[derive(Debug, Display, Clone, Copy, PartialEq, From, Error, IsVariant)]
pub enum SleepError {
    /// See [`InterruptError`].
    Interrupt(InterruptError),
    /// See [`InvalidDurationError`].
    InvalidDuration(InvalidDurationError),
}
