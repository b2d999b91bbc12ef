use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum LibraryError {
    NotFound {
        message: String,
    },
    // This is a retry-able error, which indicates that the record being written has been
    // updated by another caller since it was read, i.e. the stored version no longer matches.
    // The caller can re-read the record and retry the operation.
    CurrentlyUnavailable {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn unavailable(message: &str, reason_code: Option<String>, retryable: bool) -> LibraryError {
        LibraryError::CurrentlyUnavailable { message: message.to_string(), reason_code, retryable }
    }

    pub fn version_conflict(key: &str, expected: i64, actual: i64) -> LibraryError {
        LibraryError::unavailable(
            format!("stale version {} for {}, stored version is {}", expected, key, actual).as_str(),
            Some("409".to_string()), true)
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn retryable(&self) -> bool {
        match self {
            LibraryError::NotFound { .. } => { false }
            LibraryError::CurrentlyUnavailable { retryable, .. } => { *retryable }
            LibraryError::Serialization { .. } => { false }
            LibraryError::Runtime { .. } => { false }
        }
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::runtime(
            format!("io {:?}", err).as_str(), None)
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::CurrentlyUnavailable { message, reason_code, retryable } => {
                write!(f, "{} {:?} {}", message, reason_code, retryable)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for library operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

// BorrowResult is the outcome of a borrow request. Variants are listed in the order
// in which the service evaluates them, the first applicable one wins.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum BorrowResult {
    Success,
    PatronNotFound,
    BookNotFound,
    NotAvailable,
    LimitReached,
}

impl Display for BorrowResult {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BorrowResult::Success => write!(f, "Success"),
            BorrowResult::PatronNotFound => write!(f, "PatronNotFound"),
            BorrowResult::BookNotFound => write!(f, "BookNotFound"),
            BorrowResult::NotAvailable => write!(f, "NotAvailable"),
            BorrowResult::LimitReached => write!(f, "LimitReached"),
        }
    }
}
