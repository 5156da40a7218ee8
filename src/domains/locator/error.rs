//! Locator error types.
//!
//! The `Display` text of each variant is the exact message sent to clients.

use thiserror::Error;

use crate::core::security::PathSecurityError;

/// Every way a locate request can fail.
#[derive(Debug, Error)]
pub enum LocateError {
    /// Path could not be resolved, or resolved outside the trust boundary.
    #[error(transparent)]
    Path(#[from] PathSecurityError),

    /// The snippet is empty or whitespace only.
    #[error("Snippet is empty.")]
    EmptySnippet,

    /// No contiguous run of lines matches the snippet.
    #[error("Snippet was not found.")]
    NotFound,

    /// Reading the file or the working directory failed.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Anything else that went wrong while serving the request.
    #[error("An unknown error occurred.")]
    Unknown,
}

impl LocateError {
    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Path(PathSecurityError::OutsideRootDirectory { .. }) => "containment",
            Self::Path(PathSecurityError::CannotCanonicalize { .. }) | Self::Io(_) => "io",
            Self::EmptySnippet => "invalid_input",
            Self::NotFound => "not_found",
            Self::Unknown => "unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn test_client_messages() {
        let outside = LocateError::from(PathSecurityError::OutsideRootDirectory {
            path: PathBuf::from("/etc/passwd"),
            root: PathBuf::from("/work"),
        });
        assert_eq!(
            outside.to_string(),
            "File path is outside of the current working directory."
        );
        assert_eq!(outside.kind(), "containment");
        assert_eq!(LocateError::EmptySnippet.to_string(), "Snippet is empty.");
        assert_eq!(LocateError::NotFound.to_string(), "Snippet was not found.");
        assert_eq!(
            LocateError::Unknown.to_string(),
            "An unknown error occurred."
        );
    }

    #[test]
    fn test_io_message_is_verbatim() {
        let err = LocateError::from(io::Error::other("permission denied"));
        assert_eq!(err.to_string(), "permission denied");
        assert_eq!(err.kind(), "io");
    }
}
