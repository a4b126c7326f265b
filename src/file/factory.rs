use crate::error::ScanError;
use crate::file::types::{DocxFile, PdfFile};
use crate::file::DocumentSource;
use crate::models::DocumentFormat;
use std::path::PathBuf;
use std::sync::Arc;

/// Factory for creating DocumentSource instances based on file extension
pub struct FileFactory;

impl FileFactory {
    /// Create a DocumentSource for the path, or fail for unknown extensions
    pub fn create(path: PathBuf) -> Result<Arc<dyn DocumentSource>, ScanError> {
        match DocumentFormat::from_path(&path) {
            Some(format) => Ok(Self::create_for(path, format)),
            None => Err(ScanError::UnsupportedFormat(path)),
        }
    }

    /// Create a DocumentSource for an already known format
    pub fn create_for(path: PathBuf, format: DocumentFormat) -> Arc<dyn DocumentSource> {
        match format {
            DocumentFormat::Pdf => Arc::new(PdfFile::new(path)),
            DocumentFormat::Docx => Arc::new(DocxFile::new(path)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_pdf_file() {
        let path = PathBuf::from("/test/resume.pdf");
        let source = FileFactory::create(path.clone()).unwrap();
        assert_eq!(source.path(), path.as_path());
        assert_eq!(source.format(), DocumentFormat::Pdf);
    }

    #[test]
    fn test_factory_docx_file() {
        let path = PathBuf::from("/test/resume.docx");
        let source = FileFactory::create(path.clone()).unwrap();
        assert_eq!(source.path(), path.as_path());
        assert_eq!(source.format(), DocumentFormat::Docx);
    }

    #[test]
    fn test_factory_uppercase_extension_is_unsupported() {
        let path = PathBuf::from("/test/RESUME.PDF");
        assert!(matches!(
            FileFactory::create(path),
            Err(ScanError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_factory_unsupported_file() {
        let path = PathBuf::from("/test/resume.txt");
        match FileFactory::create(path.clone()) {
            Err(ScanError::UnsupportedFormat(p)) => assert_eq!(p, path),
            other => panic!("expected UnsupportedFormat, got {:?}", other.map(|s| s.format())),
        }
    }

    #[test]
    fn test_factory_no_extension() {
        assert!(FileFactory::create(PathBuf::from("/test/resume")).is_err());
    }
}
