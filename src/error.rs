//! Error types for PDF Reader MCP Server
//!
//! The `Display` text of each variant is exactly what the `read_pdf` tool
//! returns to the caller, so existing clients that match on the plain-string
//! result keep working.

use thiserror::Error;

/// Result type alias for PDF Reader MCP Server
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for PDF Reader MCP Server
#[derive(Error, Debug)]
pub enum Error {
    /// Requested file does not exist under the PDF directory
    #[error("Error: File '{filename}' not found.")]
    FileNotFound { filename: String },

    /// Requested filename points outside the PDF directory
    #[error("Error: Invalid filename '{filename}'.")]
    InvalidFilename { filename: String },

    /// File exists but could not be parsed as a PDF
    #[error("Error reading PDF: {reason}")]
    InvalidPdf { reason: String },

    /// IO error
    #[error("Error reading PDF: {0}")]
    Io(#[from] std::io::Error),

    /// Document parsed but yielded no text
    #[error("No text found in the PDF.")]
    NoTextFound,
}

impl Error {
    /// Stable identifier for the error category, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::FileNotFound { .. } => "not_found",
            Error::InvalidFilename { .. } => "invalid_filename",
            Error::InvalidPdf { .. } | Error::Io(_) => "read_failed",
            Error::NoTextFound => "no_text",
        }
    }
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        Error::InvalidPdf {
            reason: err.to_string(),
        }
    }
}
