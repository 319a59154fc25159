//! Error types for building and drawing scenes.

use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a draw call (or a scene parse).
#[derive(Debug)]
pub enum Error {
    /// A scene description named a primitive kind that does not exist.
    UnrecognizedPrimitive { line: usize, kind: String },
    /// An arrow whose head and tail coincide has no direction.
    ZeroLengthArrow,
    /// A cone head needs at least three ring vertices.
    InvalidResolution(usize),
    /// Head length and radius must be finite and not negative.
    InvalidArrowHead { length: f64, radius: f64 },
    /// Grid steps must be finite and positive.
    InvalidGridSize(f64),
    /// An axis range must be finite with `min < max`.
    InvalidRange { min: f64, max: f64 },
    /// A coordinate slice was longer than the dimension allows.
    Arity { got: usize, max: usize },
    UnknownColor(String),
    UnknownLineStyle(String),
    UnknownOption { line: usize, key: String },
    /// Malformed scene text.
    Parse { line: usize, msg: String },
    Io(std::io::Error),
    Dxf(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnrecognizedPrimitive { line, kind } => {
                write!(f, "line {}: unrecognized object: {}", line, kind)
            }
            Error::ZeroLengthArrow => write!(f, "arrow direction vector must be non-zero"),
            Error::InvalidResolution(n) => {
                write!(f, "arrow head resolution must be at least 3, got {}", n)
            }
            Error::InvalidArrowHead { length, radius } => write!(
                f,
                "invalid arrow head (length {}, radius {}), expecting finite non-negative values",
                length, radius
            ),
            Error::InvalidGridSize(s) => write!(f, "grid size must be positive, got {}", s),
            Error::InvalidRange { min, max } => {
                write!(f, "invalid axis range [{}, {}]", min, max)
            }
            Error::Arity { got, max } => write!(
                f,
                "coordinate tuple has {} values, at most {} are accepted",
                got, max
            ),
            Error::UnknownColor(c) => write!(f, "unknown color: {}", c),
            Error::UnknownLineStyle(s) => write!(f, "unknown line style: {}", s),
            Error::UnknownOption { line, key } => write!(f, "line {}: unknown option {}", line, key),
            Error::Parse { line, msg } => write!(f, "line {}: {}", line, msg),
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::Dxf(e) => write!(f, "dxf error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}
