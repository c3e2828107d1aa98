//! Helpers which operate on collections of values.
//!
//! # Purpose
//! A "collection" here is either a sequence or a map. Sequence-only helpers ([`filter`],
//! [`uniq`], [`pluck`] and so on) take slices, so anything that derefs to `[T]` works. Helpers
//! that make sense for maps as well ([`each`], [`contains`], [`reduce`], [`every`], [`some`])
//! accept any [`Collection`].
//!
//! # Method
//! [`Collection`] is a thin trait over the existing iterators of each type. It yields each item
//! with its key, where the key of a sequence is the item's index.
#![warn(missing_docs)]

mod collection;
mod query;
mod sequence;

#[cfg(test)]
mod tests;

pub use collection::*;
pub use query::*;
pub use sequence::*;
