//! Decorators which wrap a function to change when, or how often, it runs.
//!
//! # Purpose
//! [`once`] and [`memoize`] return closures which own some private state: a cached result or a
//! cache of results. That state lives exactly as long as the returned closure. The explicit
//! [`Once`] and [`Memoize`] types are there for when the state needs to be inspected.
//!
//! [`delay`] defers a call by handing it to a [`Scheduler`]. There is no global timer, which means
//! tests can use a [`ManualScheduler`] and advance time themselves.
#![warn(missing_docs)]

mod delay;
mod memoize;
mod once;
#[cfg(all(feature = "time", target_os = "linux"))]
mod thread;


pub use delay::*;
pub use memoize::*;
pub use once::*;
#[cfg(all(feature = "time", target_os = "linux"))]
pub use thread::*;
