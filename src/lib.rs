pub mod config;
pub mod constants;
pub mod error;
pub mod file;
pub mod keywords;
pub mod models;
pub mod report;
pub mod scan;
pub mod section;
pub mod utils;

pub use config::Config;
pub use error::ScanError;
pub use file::{DocumentSource, FileFactory};
pub use models::{DocumentFormat, KeywordCounts, ScanOutcome};
pub use report::ReportFormat;
pub use scan::Scanner;
pub use section::SectionLocator;
