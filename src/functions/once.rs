use std::mem;

use derive_more::{Display, Error};

use crate::util::panic::Panic;

/// Raised when a [`Once`] is called again after its function panicked.
#[derive(Debug, Display, Error)]
#[display("function wrapped by Once panicked during its only call")]
pub struct PoisonedOncePanic;
impl Panic for PoisonedOncePanic {}

/// A function which is called at most once, with its result kept for every subsequent call.
///
/// This is the state behind [`once`], for when it is useful to hold on to the wrapper itself.
#[derive(Debug)]
pub struct Once<F, R> {
    state: State<F, R>,
}

#[derive(Debug)]
enum State<F, R> {
    Pending(F),
    Running,
    Done(R),
}

impl<F: FnOnce() -> R, R> Once<F, R> {
    /// Wraps `func` without calling it.
    pub const fn new(func: F) -> Once<F, R> {
        Once {
            state: State::Pending(func),
        }
    }

    /// Calls the wrapped function if it hasn't been called yet, then returns a reference to its
    /// result.
    ///
    /// # Panics
    /// Panics if the wrapped function panicked during an earlier call, as there is no result to
    /// return and the function can't be called again.
    pub fn call(&mut self) -> &R {
        if matches!(self.state, State::Pending(_))
            && let State::Pending(func) = mem::replace(&mut self.state, State::Running)
        {
            self.state = State::Done(func());
        }

        match &self.state {
            State::Done(result) => result,
            _ => PoisonedOncePanic.panic(),
        }
    }

    /// Returns true if the wrapped function has already been called and returned.
    pub const fn is_called(&self) -> bool {
        matches!(self.state, State::Done(_))
    }

    /// Consumes the wrapper, returning the cached result if the function has been called.
    pub fn into_result(self) -> Option<R> {
        match self.state {
            State::Done(result) => Some(result),
            _ => None,
        }
    }
}

/// Returns a closure which calls `func` the first time it is invoked. Every invocation, including
/// the first, returns a clone of that first result, and `func` is never called again.
///
/// # Panics
/// The returned closure panics if `func` panicked during the first invocation.
pub fn once<F, R>(func: F) -> impl FnMut() -> R
where
    F: FnOnce() -> R,
    R: Clone,
{
    let mut guard = Once::new(func);
    move || guard.call().clone()
}
