//! Error types for docrank.

use std::path::PathBuf;

use thiserror::Error;

/// docrank error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Caller passed an argument the engine cannot work with.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// A document could not be opened or read.
    ///
    /// Recovered locally everywhere it can occur: the build skips the
    /// document, a query drops the affected match.
    #[error("unreadable document {}: {source}", path.display())]
    DocumentUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for docrank operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_display() {
        let err = Error::InvalidArgument("document path must not be empty");
        assert_eq!(
            err.to_string(),
            "invalid argument: document path must not be empty"
        );
    }
}
