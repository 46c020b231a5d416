//! PDF processing layer
//!
//! This module provides PDF text extraction using lopdf.

mod reader;

pub use reader::{join_page_texts, PdfReader};
