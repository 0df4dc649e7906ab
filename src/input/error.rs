use std::fmt;
use std::io;

/// Failure to read from the input stream. Never retried.
#[derive(Debug)]
pub enum InputError {
    /// The stream reached end of input while a prompt was waiting
    Closed,
    Io(io::Error),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Closed => write!(f, "Input stream closed"),
            InputError::Io(err) => write!(f, "Input error: {}", err),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::Closed => None,
            InputError::Io(err) => Some(err),
        }
    }
}

impl From<io::Error> for InputError {
    fn from(err: io::Error) -> Self {
        InputError::Io(err)
    }
}
