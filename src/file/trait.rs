use crate::error::ScanError;
use crate::models::DocumentFormat;
use anyhow::{Context, Result};
use async_trait::async_trait;

/// A résumé document we can pull plain text out of
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Extract text content from the file (format-specific implementation)
    async fn to_text_impl(&self) -> Result<String>;

    /// Extract text content from the file.
    ///
    /// A missing or zero-byte file is an error; neither is a valid PDF or
    /// DOCX.
    async fn to_text(&self) -> Result<String> {
        let metadata = tokio::fs::metadata(self.path())
            .await
            .with_context(|| format!("Failed to read résumé: {}", self.path().display()))?;

        if metadata.len() == 0 {
            return Err(ScanError::EmptyDocument(self.path().to_path_buf()).into());
        }

        self.to_text_impl().await
    }

    /// Get the file path
    fn path(&self) -> &std::path::Path;

    /// Get the document format
    fn format(&self) -> DocumentFormat;
}
