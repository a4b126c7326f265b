/// Phrases that open the section we scan. The first one found in the
/// document wins, regardless of which phrase it is.
pub const SECTION_HEADERS: &[&str] = &[
    "professional experience",
    "work experience",
    "employment history",
];

/// Phrases that close the section. Matched as plain substrings, so
/// "skillset" closes the section at "skills".
pub const STOP_HEADERS: &[&str] = &["education", "skills", "certifications"];

/// Default résumé path when neither config nor CLI provide one
pub const DEFAULT_RESUME_PATH: &str = "resume.pdf";

/// Default keyword list path when neither config nor CLI provide one
pub const DEFAULT_KEYWORDS_PATH: &str = "keywords.txt";

/// Table column headers
pub const REPORT_HEADERS: [&str; 2] = ["Keyword", "Count"];
