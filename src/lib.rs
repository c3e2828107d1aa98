//! This crate is my attempt at writing a small "utility belt": helpers for collections, objects,
//! functions and arrays, in the spirit of the utility libraries that dynamic languages tend to
//! ship with.
//!
//! # Purpose
//! This repo / crate is a learning exercise, with no expectation for it to be used in production.
//! Most of these helpers are a few lines long and the standard library already has an equivalent
//! for many of them ([`Iterator::filter`], [`slice::sort_by`], etc.). The interesting part is
//! figuring out how an API designed around "any value" translates into Rust's type system.
//!
//! # Method
//! Every helper is a free function that is generic over the minimum capability it needs:
//! - Sequences are slices, so [`Vec`]s, arrays and boxed slices all work.
//! - Anything that can be iterated as key-value entries implements
//!   [`Collection`](collections::Collection), which covers both sequences (keyed by index) and
//!   maps (keyed by their keys).
//! - Predicates can return anything [`Truthy`](value::Truthy), not just [`bool`].
//! - Variadic arguments become slices of slices.
//!
//! For the operations which only really make sense on untyped data (plucking a property by name,
//! invoking a method by name, flattening arbitrarily nested arrays) there is a dynamic
//! [`Value`](value::Value) type, modelled after the values of a JSON-like language.
//!
//! # Error Handling
//! Almost nothing here can fail. Where something can (invoking a named method on a value of the
//! wrong kind, sleeping on a timer), errors are strongly typed structs implementing
//! [`Error`](std::error::Error), gathered into enums for static dispatch. Logic errors that
//! indicate a bug in the caller panic instead, and are documented under `# Panics`.
//!
//! # Time
//! [`delay`](functions::delay) never reaches for a global timer. It is handed a
//! [`Scheduler`](functions::Scheduler) instead: either a
//! [`ManualScheduler`](functions::ManualScheduler) with a virtual clock (which is what the tests
//! use) or, on Linux, a [`ThreadScheduler`](functions::ThreadScheduler) which relies on the thin
//! `libc` wrappers in [`time`].
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "arrays")]
pub mod arrays;
#[cfg(feature = "collections")]
pub mod collections;
#[cfg(feature = "functions")]
pub mod functions;
#[cfg(feature = "objects")]
pub mod objects;
#[cfg(all(feature = "time", target_os = "linux"))]
pub mod time;
pub mod value;

pub(crate) mod util;
