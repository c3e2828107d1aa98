use derive_more::{Display, Error, From, IsVariant};

/// The method name passed to [`Value::call_method`](super::Value::call_method) isn't supported.
#[derive(Debug, Display, Clone, PartialEq, Error)]
#[display("no method named {name:?}")]
pub struct UnknownMethodError {
    /// The name that was looked up.
    pub name: String,
}

/// The method exists, but not for the kind of value it was called on.
#[derive(Debug, Display, Clone, PartialEq, Error)]
#[display("method {method:?} can't be called on a value of kind {receiver}")]
pub struct ReceiverMismatchError {
    /// The name of the method.
    pub method: String,
    /// The kind of the receiver, as returned by [`Value::kind`](super::Value::kind).
    pub receiver: &'static str,
}

/// An argument the method needs is missing or of the wrong kind.
#[derive(Debug, Display, Clone, PartialEq, Error)]
#[display("argument {index} to method {method:?} is missing or of the wrong kind")]
pub struct BadArgumentError {
    /// The name of the method.
    pub method: String,
    /// The position of the offending argument.
    pub index: usize,
}

/// An error produced when invoking a method on a [`Value`](super::Value) by name.
#[derive(Debug, Display, Clone, PartialEq, From, Error, IsVariant)]
pub enum MethodError {
    /// See [`UnknownMethodError`].
    UnknownMethod(UnknownMethodError),
    /// See [`ReceiverMismatchError`].
    ReceiverMismatch(ReceiverMismatchError),
    /// See [`BadArgumentError`].
    BadArgument(BadArgumentError),
}
