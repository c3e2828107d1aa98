use std::error::Error;

/// Asserts that running `$run` panics, catching the unwind so the test can carry on.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert_panics!($run, "expected a panic, but the block returned normally")
    };
    ($run:block, $msg:literal) => {
        let caught = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run));
        assert!(caught.is_err(), $msg);
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;

/// An error which indicates a bug rather than a recoverable condition, and is therefore raised as a
/// panic carrying its own message.
pub trait Panic: Error {
    /// Panics with the [`Display`](std::fmt::Display) message of `self`.
    fn panic(&self) -> ! {
        panic!("{}", self)
    }
}
