use std::error::Error;

pub(crate) trait ResultExtension<T> {
    /// Unwraps an [`Ok`] value, or logs the error and panics with its message. Used where a
    /// failure can only be caused by a bug, such as a background task hitting an invalid deadline.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T> for Result<T, E> {
    fn throw(self) -> T {
        self.unwrap_or_else(|error| {
            tracing::error!(%error, "unrecoverable error");
            panic!("{error}")
        })
    }
}
