use std::{error::Error as StdError, fmt, io, result::Result as StdResult};

/// A proof or line asked for by number that the document does not contain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    NoSuchProof { index: usize, available: usize },
    NoSuchLine { proof: usize, number: i64 },
    NotALine { proof: usize, number: i64 },
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSuchProof {
                index,
                available: 0,
            } => write!(f, "proof {index} requested but the document contains no proofs"),
            Self::NoSuchProof { index, available } => {
                write!(f, "proof {index} requested but the document contains {available}")
            }
            Self::NoSuchLine { proof, number } => {
                write!(f, "proof {proof} has no line numbered {number}")
            }
            Self::NotALine { proof, number } => {
                write!(f, "line {number} of proof {proof} is an ellipsis row")
            }
        }
    }
}

impl StdError for LookupError {}

#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    Json(serde_json::Error),
    Lookup(LookupError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {e}"),
            Self::Json(e) => write!(f, "JSON error: {e}"),
            Self::Lookup(e) => write!(f, "Lookup error: {e}"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Lookup(e) => Some(e),
        }
    }
}

impl From<LookupError> for Error {
    fn from(e: LookupError) -> Self {
        Self::Lookup(e)
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

pub type Result<T> = StdResult<T, Error>;
