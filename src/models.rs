use crate::utils;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Résumé formats we can extract text from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Detect the format from a file extension (without the dot).
    /// Only the lowercase spellings are recognised.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            _ => None,
        }
    }

    /// Detect the format from a path's extension
    pub fn from_path(path: &Path) -> Option<Self> {
        utils::get_extension(path).and_then(|ext| Self::from_extension(&ext))
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Keyword to occurrence count, in first-insertion order.
///
/// Keys keep their original casing, so "Lead" and "lead" are separate
/// entries. Inserting a key that is already present overwrites its count
/// but keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordCounts {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl KeywordCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the count for `keyword`
    pub fn insert(&mut self, keyword: impl Into<String>, count: usize) {
        let keyword = keyword.into();
        match self.index.get(&keyword) {
            Some(&pos) => self.entries[pos].1 = count,
            None => {
                self.index.insert(keyword.clone(), self.entries.len());
                self.entries.push((keyword, count));
            }
        }
    }

    pub fn get(&self, keyword: &str) -> Option<usize> {
        self.index.get(keyword).map(|&pos| self.entries[pos].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(k, c)| (k.as_str(), *c))
    }
}

/// How a scan ended. Only `Report` carries results; the other two are
/// reported to the user and are not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    Report(KeywordCounts),
    UnsupportedFormat(PathBuf),
    SectionNotFound,
}
