pub mod docx;
pub mod pdf;

pub use docx::DocxFile;
pub use pdf::PdfFile;
