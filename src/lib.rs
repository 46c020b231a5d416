//! PDF Reader MCP Server Library
//!
//! This crate provides a single MCP tool:
//! - `read_pdf`: Extract the text of a PDF stored under the configured directory

pub mod context;
pub mod error;
pub mod pdf;
pub mod server;
pub mod source;

pub use context::AppContext;
pub use error::{Error, Result};
pub use server::{run_server, run_server_with_context, PdfReaderServer, ReadPdfParams};
