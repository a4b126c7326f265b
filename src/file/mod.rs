pub mod factory;
pub mod r#trait;
pub mod types;

pub use factory::FileFactory;
pub use r#trait::DocumentSource;
pub use types::{DocxFile, PdfFile};
