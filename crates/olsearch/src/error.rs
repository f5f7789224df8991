pub(crate) type DynError = Box<dyn std::error::Error + Send + Sync>;

/// Error returned by the search functions, [`Error::kind`] tells the failures apart.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: Option<String>,
    source: Option<DynError>,
}

/// Types of errors that make up an [`Error`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The error is associated with an underlying IO or network error.
    IO,
    /// The server answered with a non-success status code.
    Status,
    /// An error caused when parsing/deserialization fails.
    Deserialize,
    /// An error when an operation has failed to return a value.
    NoValue,
}

impl Error {
    /// Creates a new [`Error`] based on the [`ErrorKind`] and message to describe the error.
    pub fn new<S: Into<String>>(kind: ErrorKind, message: S) -> Self {
        Self {
            kind,
            message: Some(message.into()),
            source: None,
        }
    }

    /// Wraps an existing error as the source of [`Error`].
    pub fn wrap<E>(kind: ErrorKind, source: E) -> Self
    where
        E: Into<DynError>,
    {
        Self {
            kind,
            message: None,
            source: Some(source.into()),
        }
    }

    /// Returns the kind of error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::IO => "IO error",
            Self::Status => "Status error",
            Self::Deserialize => "Deserialize error",
            Self::NoValue => "No value error",
        })
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)?;

        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }

        match &self.source {
            Some(cause) => write!(f, ": caused by {cause}"),
            None => Ok(()),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| &**e as _)
    }
}

#[cfg(test)]
mod tests {
    use super::{Error, ErrorKind};

    #[test]
    fn display_includes_kind_and_message() {
        let err = Error::new(ErrorKind::NoValue, "No books found!");
        assert_eq!("No value error: No books found!", err.to_string());
    }

    #[test]
    fn kind_display_is_used_as_prefix() {
        let err = Error::new(ErrorKind::Status, "404 Not Found");
        assert_eq!("Status error", ErrorKind::Status.to_string());
        assert_eq!("Status error: 404 Not Found", err.to_string());
    }

    #[test]
    fn wrapped_error_is_exposed_as_source() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "connection reset");
        let err = Error::wrap(ErrorKind::IO, io);

        assert_eq!(ErrorKind::IO, err.kind());
        assert_eq!("IO error: caused by connection reset", err.to_string());
        assert!(std::error::Error::source(&err).is_some());
    }
}
