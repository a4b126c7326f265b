//! Locating the professional experience section in extracted résumé text.
//!
//! The section starts right after the first header phrase found anywhere in
//! the text and runs until the first stop phrase after it, or the end of the
//! text. Both searches are case-insensitive and ignore line breaks. Stop
//! phrases are bare substrings with no word boundary.

use crate::constants::{SECTION_HEADERS, STOP_HEADERS};
use crate::error::ScanError;
use regex::Regex;

/// Finds the professional experience section of a document
#[derive(Debug, Clone)]
pub struct SectionLocator {
    header: Option<Regex>,
    stop: Option<Regex>,
}

impl SectionLocator {
    /// Locator using the built-in header and stop phrases
    pub fn new() -> Self {
        // The built-in phrases are short escaped literals.
        Self::with_headers(SECTION_HEADERS, STOP_HEADERS)
            .expect("built-in section phrases form a valid pattern")
    }

    /// Locator using custom phrase lists, matched literally.
    ///
    /// An empty header list never matches; an empty stop list lets every
    /// section run to the end of the text.
    pub fn with_headers<S: AsRef<str>>(headers: &[S], stops: &[S]) -> Result<Self, ScanError> {
        Ok(Self {
            header: Self::phrase_pattern(headers)?,
            stop: Self::phrase_pattern(stops)?,
        })
    }

    fn phrase_pattern<S: AsRef<str>>(phrases: &[S]) -> Result<Option<Regex>, ScanError> {
        if phrases.is_empty() {
            return Ok(None);
        }
        let alternation = phrases
            .iter()
            .map(|p| regex::escape(p.as_ref()))
            .collect::<Vec<_>>()
            .join("|");
        Ok(Some(Regex::new(&format!("(?i){}", alternation))?))
    }

    /// Return the trimmed section body, or `None` when no header is present
    pub fn locate(&self, text: &str) -> Option<String> {
        let header = self.header.as_ref()?.find(text)?;
        let rest = &text[header.end()..];
        let body = match self.stop.as_ref().and_then(|stop| stop.find(rest)) {
            Some(stop) => &rest[..stop.start()],
            None => rest,
        };

        tracing::debug!(
            header = header.as_str(),
            offset = header.start(),
            body_len = body.len(),
            "Located section header"
        );

        Some(body.trim().to_string())
    }
}

impl Default for SectionLocator {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract the professional experience section with the built-in phrases
pub fn extract_professional_experience(text: &str) -> Option<String> {
    SectionLocator::new().locate(text)
}
