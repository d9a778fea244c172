//! Error types for matchgen

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Matchgen errors
///
/// These cover configuration and integration faults. User input problems
/// (a bad class name) are not errors in this sense; they come back as
/// [`ValidationFailure`](crate::validate::ValidationFailure) values so the
/// hosting dialog can show them inline.
#[derive(Error, Debug)]
pub enum Error {
    #[error("no candidate source roots were supplied; at least one is required")]
    NoCandidateRoots,

    #[error("{0}")]
    Other(String),
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Other(s.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Other(s)
    }
}
