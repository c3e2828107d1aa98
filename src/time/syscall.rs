use std::io;
use std::mem::MaybeUninit;
use std::time::Duration;

use libc::{c_int, c_long, time_t, timespec};

use super::InvalidDurationError;

pub fn err_no() -> c_int {
    // SAFETY: raw_os_error guarantees Some if constructed from last_os_error.
    unsafe { io::Error::last_os_error().raw_os_error().unwrap_unchecked() }
}

pub fn to_timespec(duration: Duration) -> Result<timespec, InvalidDurationError> {
    // SAFETY: timespec is plain old data, for which all zeroes is a valid value. Zeroing it also
    // covers the padding fields that some targets have.
    let mut raw: timespec = unsafe { MaybeUninit::zeroed().assume_init() };
    raw.tv_sec = time_t::try_from(duration.as_secs()).map_err(|_| InvalidDurationError)?;
    raw.tv_nsec = duration.subsec_nanos() as c_long;
    Ok(raw)
}

#[allow(clippy::unnecessary_cast)]
pub fn from_timespec(raw: &timespec) -> Duration {
    // Negative values never come out of the monotonic clock or nanosleep.
    Duration::new(raw.tv_sec.max(0) as u64, raw.tv_nsec.max(0) as u32)
}
