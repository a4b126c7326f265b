use crate::file::DocumentSource;
use crate::models::DocumentFormat;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// PDF résumé handler
pub struct PdfFile {
    path: PathBuf,
}

impl PdfFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Page-by-page text in page order, one newline after each page
    fn extract_pages(path: &Path) -> Result<String> {
        use lopdf::Document;

        let doc = Document::load(path)
            .with_context(|| format!("Failed to load PDF: {}", path.display()))?;

        let mut text_content = String::new();
        for page_num in doc.get_pages().keys() {
            match doc.extract_text(&[*page_num]) {
                Ok(page_text) => {
                    text_content.push_str(&page_text);
                    text_content.push('\n');
                }
                Err(e) => {
                    tracing::warn!("Skipping page {} of {}: {}", page_num, path.display(), e);
                }
            }
        }

        Ok(text_content)
    }
}

#[async_trait]
impl DocumentSource for PdfFile {
    async fn to_text_impl(&self) -> Result<String> {
        let path = self.path.clone();
        let text = tokio::task::spawn_blocking(move || -> Result<String> {
            let text_content = Self::extract_pages(&path)?;

            if !text_content.trim().is_empty() {
                return Ok(text_content);
            }

            // lopdf found no text layer it understands; pdf-extract handles
            // more font encodings.
            tracing::debug!("lopdf returned no text for {}, trying pdf-extract", path.display());
            match pdf_extract::extract_text(&path) {
                Ok(text) => Ok(text),
                Err(e) => {
                    tracing::warn!("No extractable text in {}: {}", path.display(), e);
                    Ok(String::new())
                }
            }
        })
        .await??;

        tracing::debug!(chars = text.chars().count(), "Extracted PDF text");
        Ok(text)
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn format(&self) -> DocumentFormat {
        DocumentFormat::Pdf
    }
}
