//! A dynamic value model, along with the capability traits that the rest of the crate uses to stay
//! generic over "any value".
//!
//! # Purpose
//! Most helpers in this crate are generic, but some of them only make sense on untyped data:
//! plucking a property by name, invoking a method by name or flattening arrays which are nested to
//! an arbitrary depth. [`Value`] fills that gap. It is also the easiest way to write tests that
//! mix strings and numbers in one sequence.
//!
//! # Method
//! The traits here describe the minimum capability a helper needs:
//! - [`Truthy`] for predicates which return something other than a [`bool`].
//! - [`Properties`] for types that can be addressed by a property name.
//!
//! Both are implemented for [`Value`] and for the relevant standard types.
#![warn(missing_docs)]

mod error;
mod methods;
mod property;
mod truthy;
mod value;


pub use error::*;
pub use property::*;
pub use truthy::*;
pub use value::*;
