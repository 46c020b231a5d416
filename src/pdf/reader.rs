//! PDF reader wrapper for lopdf

use crate::error::{Error, Result};
use lopdf::Document;
use std::path::Path;

/// Text extracted from every page of a document, in page order.
pub struct PdfReader {
    page_texts: Vec<String>,
}

impl PdfReader {
    /// Open a PDF from a file path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = std::fs::read(path.as_ref())?;
        Self::open_bytes(&data)
    }

    /// Open a PDF from bytes
    pub fn open_bytes(data: &[u8]) -> Result<Self> {
        if data.len() < 4 || &data[0..4] != b"%PDF" {
            return Err(Error::InvalidPdf {
                reason: "Not a valid PDF file".to_string(),
            });
        }

        let document = Document::load_mem(data)?;
        let page_texts = Self::extract_all_page_texts(&document)?;

        Ok(Self { page_texts })
    }

    /// Extract the text of each page up front
    fn extract_all_page_texts(document: &Document) -> Result<Vec<String>> {
        let mut texts = Vec::new();
        // get_pages is keyed by page number, so iteration is in document order
        for page_num in document.get_pages().into_keys() {
            let text = document.extract_text(&[page_num])?;
            texts.push(text.trim_end_matches(['\r', '\n']).to_string());
        }
        Ok(texts)
    }

    /// Get the number of pages
    pub fn page_count(&self) -> u32 {
        self.page_texts.len() as u32
    }

    /// Extract text from all pages as `(page_number, text)` pairs (1-indexed)
    pub fn extract_all_text(&self) -> Vec<(u32, String)> {
        self.page_texts
            .iter()
            .enumerate()
            .map(|(i, text)| (i as u32 + 1, text.clone()))
            .collect()
    }

    /// All page texts joined with a single newline.
    ///
    /// Returns [`Error::NoTextFound`] when the document has no visible text.
    pub fn joined_text(&self) -> Result<String> {
        join_page_texts(&self.page_texts)
    }
}

/// Join page texts with `\n`, preserving order.
pub fn join_page_texts<S: AsRef<str>>(pages: &[S]) -> Result<String> {
    let text = pages
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("\n");

    if text.trim().is_empty() {
        return Err(Error::NoTextFound);
    }

    Ok(text)
}
