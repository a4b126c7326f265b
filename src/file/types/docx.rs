use crate::error::ScanError;
use crate::file::DocumentSource;
use crate::models::DocumentFormat;
use anyhow::{Context, Result};
use async_trait::async_trait;
use docx_rs::{read_docx, DocumentChild, ParagraphChild, RunChild};
use std::path::{Path, PathBuf};

/// Word (.docx) résumé handler
pub struct DocxFile {
    path: PathBuf,
}

impl DocxFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Parse the package and flatten its body paragraphs
    fn extract_paragraphs(path: &Path) -> Result<String> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to open DOCX file: {}", path.display()))?;

        let docx = read_docx(&bytes).map_err(|e| ScanError::InvalidDocument {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let mut text = String::new();
        // Only direct body paragraphs; tables and content controls are
        // separate document children.
        for child in &docx.document.children {
            if let DocumentChild::Paragraph(para) = child {
                push_paragraph_text(&mut text, &para.children);
                text.push('\n');
            }
        }

        Ok(text)
    }
}

#[async_trait]
impl DocumentSource for DocxFile {
    async fn to_text_impl(&self) -> Result<String> {
        let path = self.path.clone();
        let text = tokio::task::spawn_blocking(move || Self::extract_paragraphs(&path)).await??;

        tracing::debug!(chars = text.chars().count(), "Extracted DOCX text");
        Ok(text)
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn format(&self) -> DocumentFormat {
        DocumentFormat::Docx
    }
}

/// Append the text of a paragraph's runs and hyperlinks.
///
/// Tabs become `\t` and breaks become `\n`.
fn push_paragraph_text(out: &mut String, children: &[ParagraphChild]) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => {
                for rc in &run.children {
                    match rc {
                        RunChild::Text(t) => out.push_str(&t.text),
                        RunChild::Tab(_) => out.push('\t'),
                        RunChild::Break(_) => out.push('\n'),
                        _ => {}
                    }
                }
            }
            ParagraphChild::Hyperlink(link) => push_paragraph_text(out, &link.children),
            _ => {}
        }
    }
}
