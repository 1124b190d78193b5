use std::fmt;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    /// A font could not be selected, parsed, or embedded.
    Font(String),
    Image(String),
    /// Caller-supplied layout input violates a precondition (row/column
    /// mismatch, non-positive width, ...).
    Layout(String),
    Content(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {e}"),
            Error::Font(msg) => write!(f, "font error: {msg}"),
            Error::Image(msg) => write!(f, "image error: {msg}"),
            Error::Layout(msg) => write!(f, "invalid layout input: {msg}"),
            Error::Content(e) => write!(f, "invalid report content: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Content(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Error::Io(value)
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Error::Content(value)
    }
}
