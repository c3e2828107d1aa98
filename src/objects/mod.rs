//! Helpers for merging the properties of one map into another.
//!
//! Both helpers are generic over [`Mapping`], so any of the supported map types can be merged,
//! including into a map of a different type. The [`Object`](crate::value::Object) inside a
//! [`Value`](crate::value::Value) is an [`IndexMap`](indexmap::IndexMap) and works too.
#![warn(missing_docs)]

mod mapping;
mod merge;


pub use mapping::*;
pub use merge::*;
