//! Error types for docxform library.

use std::io;
use thiserror::Error;

/// Result type alias for docxform operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while turning a Word document into a form schema.
#[derive(Error, Debug)]
pub enum Error {
    /// The upload contained no bytes.
    #[error("Empty input: no document data")]
    EmptyInput,

    /// Wrong or unsupported extension, or the bytes are not a DOCX package.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The package passed validation but its content could not be read.
    #[error("Failed to parse Word document: {0}")]
    CorruptDocument(String),

    /// The schema could not be serialized (or re-parsed) as JSON.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O error when reading a document from disk.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Failure category of an [`Error`], for callers that branch on the kind
/// rather than on messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Zero-length upload
    EmptyInput,
    /// Extension or signature check failed
    UnsupportedFormat,
    /// Container structure unreadable
    CorruptDocument,
    /// Output could not be produced
    SerializationFailure,
    /// File could not be read
    Io,
}

impl Error {
    /// Get the failure category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::EmptyInput => ErrorKind::EmptyInput,
            Error::UnsupportedFormat(_) => ErrorKind::UnsupportedFormat,
            Error::CorruptDocument(_) => ErrorKind::CorruptDocument,
            Error::Serialization(_) => ErrorKind::SerializationFailure,
            Error::Io(_) => ErrorKind::Io,
        }
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::FileNotFound => {
                Error::CorruptDocument("missing main document part".to_string())
            }
            _ => Error::CorruptDocument(err.to_string()),
        }
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::CorruptDocument(format!("malformed document XML: {}", err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::EmptyInput;
        assert_eq!(err.to_string(), "Empty input: no document data");

        let err = Error::CorruptDocument("truncated body".to_string());
        assert_eq!(
            err.to_string(),
            "Failed to parse Word document: truncated body"
        );
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(Error::EmptyInput.kind(), ErrorKind::EmptyInput);
        assert_eq!(
            Error::UnsupportedFormat("x".into()).kind(),
            ErrorKind::UnsupportedFormat
        );
        assert_eq!(
            Error::Serialization("x".into()).kind(),
            ErrorKind::SerializationFailure
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[test]
    fn test_zip_error_is_corrupt() {
        let err: Error = zip::result::ZipError::FileNotFound.into();
        assert_eq!(err.kind(), ErrorKind::CorruptDocument);
    }
}
