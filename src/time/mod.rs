//! A monotonic clock and sleeping, as thin wrappers over Linux syscalls.
//!
//! This is what [`ThreadScheduler`](crate::functions::ThreadScheduler) uses to wait for its
//! deadlines. It relies on `libc` for the syscalls themselves.

mod error;
mod instant;
mod panic;
mod sleep;
mod syscall;


pub use error::*;
pub use instant::*;
pub use sleep::*;
