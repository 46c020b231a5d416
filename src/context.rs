//! Process-wide lifecycle context

use std::path::{Path, PathBuf};

/// Environment variable that overrides the PDF directory
pub const PDF_DIRECTORY_ENV: &str = "PDF_DIRECTORY";

/// Directory used when `PDF_DIRECTORY` is unset
pub const DEFAULT_PDF_DIRECTORY: &str = "./pdfs";

/// Configuration shared read-only by every tool invocation.
///
/// Built once at start-up and never mutated. The directory is not checked
/// for existence here; each request validates its own path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppContext {
    /// Root directory that filenames are resolved against
    pub pdf_directory: PathBuf,
}

impl AppContext {
    pub fn new(pdf_directory: impl Into<PathBuf>) -> Self {
        Self {
            pdf_directory: pdf_directory.into(),
        }
    }

    /// Build the context from the process environment.
    pub fn initialize() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the context from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let dir = lookup(PDF_DIRECTORY_ENV)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_PDF_DIRECTORY.to_string());

        tracing::info!(pdf_directory = %dir, "Lifecycle context initialized");

        Self::new(dir)
    }

    pub fn pdf_directory(&self) -> &Path {
        &self.pdf_directory
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new(DEFAULT_PDF_DIRECTORY)
    }
}
