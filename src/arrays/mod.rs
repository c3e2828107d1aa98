//! Algorithms which build a new sequence out of one or more existing ones.
//!
//! # Purpose
//! These are the helpers with slightly more going on than a single loop: shuffling, stable
//! sorting by a derived key, zipping sequences of different lengths, flattening arbitrarily
//! nested sequences and the set-like [`intersection`] and [`difference`].
//!
//! # Method
//! Variadic inputs are slices of slices, so every sequence has to hold the same type of element.
//! [`Value`](crate::value::Value) is the escape hatch for mixing types.
//!
//! None of these modify their inputs.
#![warn(missing_docs)]

mod flatten;
mod set;
mod shuffle;
mod sort;
mod zip;

#[cfg(test)]
mod tests;

pub use flatten::*;
pub use set::*;
pub use shuffle::*;
pub use sort::*;
pub use zip::*;
