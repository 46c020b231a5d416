//! MCP Server implementation using rmcp

use crate::context::AppContext;
use crate::error::Error;
use crate::pdf::PdfReader;
use crate::source::resolve_filename;
use anyhow::Result;
use rmcp::{
    handler::server::tool::ToolRouter, handler::server::wrapper::Parameters, model::*,
    schemars::JsonSchema, tool, tool_handler, tool_router, ServerHandler, ServiceExt,
};
use serde::Deserialize;
use std::sync::Arc;

/// PDF Reader MCP Server
#[derive(Clone)]
pub struct PdfReaderServer {
    /// Lifecycle context shared by every invocation
    context: Arc<AppContext>,
    tool_router: ToolRouter<Self>,
}

// ============================================================================
// Request types for read_pdf
// ============================================================================

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ReadPdfParams {
    /// Name of the PDF file to read, relative to the configured PDF directory
    pub filename: String,
}

// ============================================================================
// Tool implementations
// ============================================================================

#[tool_router]
impl PdfReaderServer {
    pub fn new(context: AppContext) -> Self {
        Self {
            context: Arc::new(context),
            tool_router: Self::tool_router(),
        }
    }

    pub fn context(&self) -> &AppContext {
        &self.context
    }

    /// Read a PDF file and return its text
    #[tool(
        description = "Reads and extracts text from a specified PDF file.

The filename is resolved relative to the server's PDF directory. Page texts are joined with newlines. Failures are reported as text starting with \"Error\"."
    )]
    async fn read_pdf(&self, Parameters(params): Parameters<ReadPdfParams>) -> String {
        self.read_pdf_text(&params.filename).await
    }
}

impl PdfReaderServer {
    /// Run `read_pdf` and render the outcome as the tool's plain-text result.
    pub async fn read_pdf_text(&self, filename: &str) -> String {
        match self.process_read_pdf(filename).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(kind = e.kind(), error = %e, filename, "read_pdf failed");
                e.to_string()
            }
        }
    }

    async fn process_read_pdf(&self, filename: &str) -> crate::error::Result<String> {
        let context = Arc::clone(&self.context);
        let filename = filename.to_string();

        // Path checks and parsing both touch the filesystem, keep them off the async workers
        tokio::task::spawn_blocking(move || {
            let path = resolve_filename(context.pdf_directory(), &filename)?;
            let reader = PdfReader::open(&path)?;

            tracing::debug!(
                path = %path.display(),
                pages = reader.page_count(),
                "Extracted PDF text"
            );

            reader.joined_text()
        })
        .await
        .map_err(|e| Error::InvalidPdf {
            reason: format!("Task join error: {}", e),
        })?
    }
}

#[tool_handler]
impl ServerHandler for PdfReaderServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "PDF Reader provides a single tool, read_pdf, which returns the text of a PDF \
                 stored in the server's configured PDF directory."
                    .into(),
            ),
        }
    }
}

/// Run the MCP server with the context read from the environment
pub async fn run_server() -> Result<()> {
    run_server_with_context(AppContext::initialize()).await
}

/// Run the MCP server with an explicit lifecycle context
pub async fn run_server_with_context(context: AppContext) -> Result<()> {
    let server = PdfReaderServer::new(context);

    tracing::info!("PDF Reader MCP Server ready, waiting for connections...");

    let service = server.serve(rmcp::transport::io::stdio()).await?;
    service.waiting().await?;

    Ok(())
}
