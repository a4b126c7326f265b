use crate::config::Config;
use crate::error::ScanError;
use crate::file::FileFactory;
use crate::keywords::{count_keyword_occurrences, read_keywords_from_file};
use crate::models::ScanOutcome;
use crate::section::SectionLocator;
use anyhow::Result;
use tracing::{debug, info};

/// Runs one résumé scan: extract, locate, load keywords, count.
pub struct Scanner {
    config: Config,
    locator: SectionLocator,
}

impl Scanner {
    pub fn new(config: Config) -> Self {
        Self::with_locator(config, SectionLocator::new())
    }

    pub fn with_locator(config: Config, locator: SectionLocator) -> Self {
        Self { config, locator }
    }

    /// Run the pipeline once.
    ///
    /// Unsupported formats and missing sections are outcomes, not errors.
    /// The keyword file is only read once a section has been found.
    pub async fn run(&self) -> Result<ScanOutcome> {
        let resume = self.config.resume_path()?;

        let source = match FileFactory::create(resume) {
            Ok(source) => source,
            Err(ScanError::UnsupportedFormat(path)) => {
                info!("Unsupported résumé format: {}", path.display());
                return Ok(ScanOutcome::UnsupportedFormat(path));
            }
            Err(e) => return Err(e.into()),
        };

        info!("Extracting {} text from {}", source.format(), source.path().display());
        let text = source.to_text().await?;

        let Some(section) = self.locator.locate(&text) else {
            info!("No professional experience section in {}", source.path().display());
            return Ok(ScanOutcome::SectionNotFound);
        };
        drop(text);
        debug!(chars = section.chars().count(), "Section extracted");

        let keywords = read_keywords_from_file(&self.config.keywords_path()?).await?;
        let counts = count_keyword_occurrences(&section, &keywords);
        info!("Counted {} keywords", counts.len());

        Ok(ScanOutcome::Report(counts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docx_rs::{Docx, Paragraph, Run};
    use std::path::Path;
    use tempfile::TempDir;

    fn write_docx(path: &Path, paragraphs: &[&str]) {
        let docx = paragraphs.iter().fold(Docx::new(), |docx, text| {
            docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*text)))
        });
        let file = std::fs::File::create(path).unwrap();
        docx.build().pack(file).unwrap();
    }

    fn config_for(resume: &Path, keywords: &Path) -> Config {
        Config::default().with_overrides(
            Some(resume.display().to_string()),
            Some(keywords.display().to_string()),
            None,
        )
    }

    #[tokio::test]
    async fn test_scan_reports_counts() {
        let dir = TempDir::new().unwrap();
        let resume = dir.path().join("resume.docx");
        let keywords = dir.path().join("keywords.txt");
        write_docx(
            &resume,
            &[
                "Jane Doe",
                "Professional Experience",
                "Led a team of 5 engineers. Leadership skills included mentoring.",
                "Education",
                "Team captain, lead singer",
            ],
        );
        std::fs::write(&keywords, "lead\nteam\nLed\n").unwrap();

        let outcome = Scanner::new(config_for(&resume, &keywords)).run().await.unwrap();
        let counts = match outcome {
            ScanOutcome::Report(counts) => counts,
            other => panic!("expected a report, got {:?}", other),
        };

        // The section stops at "skills" inside the third paragraph.
        let rows: Vec<(&str, usize)> = counts.iter().collect();
        assert_eq!(rows, vec![("lead", 1), ("team", 1), ("Led", 1)]);
    }

    #[tokio::test]
    async fn test_scan_empty_section_counts_zero() {
        let dir = TempDir::new().unwrap();
        let resume = dir.path().join("resume.docx");
        let keywords = dir.path().join("keywords.txt");
        write_docx(&resume, &["Work Experience", "Skills", "Rust, Go"]);
        std::fs::write(&keywords, "rust\ngo\n").unwrap();

        let outcome = Scanner::new(config_for(&resume, &keywords)).run().await.unwrap();
        let counts = match outcome {
            ScanOutcome::Report(counts) => counts,
            other => panic!("expected a report, got {:?}", other),
        };
        assert_eq!(counts.get("rust"), Some(0));
        assert_eq!(counts.get("go"), Some(0));
    }

    #[tokio::test]
    async fn test_scan_unsupported_format_touches_nothing() {
        let dir = TempDir::new().unwrap();
        // Neither file exists; an unsupported extension must not read them.
        let resume = dir.path().join("resume.txt");
        let keywords = dir.path().join("missing-keywords.txt");

        let outcome = Scanner::new(config_for(&resume, &keywords)).run().await.unwrap();
        assert_eq!(outcome, ScanOutcome::UnsupportedFormat(resume));
    }

    #[tokio::test]
    async fn test_scan_extension_case_must_match() {
        let dir = TempDir::new().unwrap();
        let resume = dir.path().join("resume.PDF");
        let keywords = dir.path().join("keywords.txt");
        std::fs::write(&resume, b"junk that would fail to parse").unwrap();

        let outcome = Scanner::new(config_for(&resume, &keywords)).run().await.unwrap();
        assert_eq!(outcome, ScanOutcome::UnsupportedFormat(resume));
    }

    #[tokio::test]
    async fn test_scan_zero_byte_resume_is_fatal() {
        let dir = TempDir::new().unwrap();
        let resume = dir.path().join("resume.docx");
        let keywords = dir.path().join("keywords.txt");
        std::fs::write(&resume, b"").unwrap();
        std::fs::write(&keywords, "rust\n").unwrap();

        let err = Scanner::new(config_for(&resume, &keywords)).run().await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ScanError>(),
            Some(ScanError::EmptyDocument(_))
        ));
    }

    #[tokio::test]
    async fn test_scan_section_not_found_skips_keywords() {
        let dir = TempDir::new().unwrap();
        let resume = dir.path().join("resume.docx");
        let keywords = dir.path().join("missing-keywords.txt");
        write_docx(&resume, &["Jane Doe", "Education", "MIT"]);

        let outcome = Scanner::new(config_for(&resume, &keywords)).run().await.unwrap();
        assert_eq!(outcome, ScanOutcome::SectionNotFound);
    }

    #[tokio::test]
    async fn test_scan_missing_keywords_file_is_fatal() {
        let dir = TempDir::new().unwrap();
        let resume = dir.path().join("resume.docx");
        let keywords = dir.path().join("missing-keywords.txt");
        write_docx(&resume, &["Employment History", "Acme"]);

        let err = Scanner::new(config_for(&resume, &keywords)).run().await.unwrap_err();
        assert!(err.to_string().contains("Failed to read keywords file"));
    }

    #[tokio::test]
    async fn test_scan_missing_resume_is_fatal() {
        let dir = TempDir::new().unwrap();
        let resume = dir.path().join("resume.pdf");
        let keywords = dir.path().join("keywords.txt");
        std::fs::write(&keywords, "rust\n").unwrap();

        assert!(Scanner::new(config_for(&resume, &keywords)).run().await.is_err());
    }

    #[tokio::test]
    async fn test_scan_with_custom_locator() {
        let dir = TempDir::new().unwrap();
        let resume = dir.path().join("resume.docx");
        let keywords = dir.path().join("keywords.txt");
        write_docx(&resume, &["Projects", "rust rust", "References", "rust"]);
        std::fs::write(&keywords, "rust").unwrap();

        let locator = SectionLocator::with_headers(&["projects"], &["references"]).unwrap();
        let scanner = Scanner::with_locator(config_for(&resume, &keywords), locator);
        let outcome = scanner.run().await.unwrap();
        let counts = match outcome {
            ScanOutcome::Report(counts) => counts,
            other => panic!("expected a report, got {:?}", other),
        };
        assert_eq!(counts.get("rust"), Some(2));
    }
}
