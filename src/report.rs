use crate::constants::REPORT_HEADERS;
use crate::models::KeywordCounts;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Output format for the keyword report
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Bordered table for the console
    #[default]
    Table,
    /// Comma-separated values with a header row
    Csv,
    /// JSON array of keyword/count objects
    Json,
}

#[derive(Debug, Serialize)]
struct KeywordRow<'a> {
    keyword: &'a str,
    count: usize,
}

/// Render the report in the requested format
pub fn render(counts: &KeywordCounts, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Table => Ok(render_table(counts)),
        ReportFormat::Csv => render_csv(counts),
        ReportFormat::Json => render_json(counts),
    }
}

/// Render a bordered two-column table, rows in mapping order
pub fn render_table(counts: &KeywordCounts) -> String {
    let rows: Vec<[String; 2]> = counts
        .iter()
        .map(|(keyword, count)| [keyword.to_string(), count.to_string()])
        .collect();

    let mut widths = REPORT_HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let rule = widths
        .iter()
        .fold(String::from("+"), |mut line, w| {
            line.push_str(&"-".repeat(w + 2));
            line.push('+');
            line
        });

    let mut out = String::new();
    out.push_str(&rule);
    out.push('\n');
    push_row(&mut out, &REPORT_HEADERS, &widths);
    out.push_str(&rule);
    out.push('\n');
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out.push_str(&rule);
    out
}

fn push_row<S: AsRef<str>>(out: &mut String, cells: &[S; 2], widths: &[usize; 2]) {
    out.push('|');
    for (cell, width) in cells.iter().zip(widths) {
        let cell = cell.as_ref();
        let pad = width - cell.chars().count();
        let left = pad / 2;
        let _ = write!(out, " {}{}{} |", " ".repeat(left), cell, " ".repeat(pad - left));
    }
    out.push('\n');
}

/// Render the report as CSV with a `Keyword,Count` header
pub fn render_csv(counts: &KeywordCounts) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(REPORT_HEADERS)?;
    for (keyword, count) in counts.iter() {
        wtr.write_record([keyword, count.to_string().as_str()])?;
    }

    let bytes = wtr.into_inner().context("Failed to flush CSV report")?;
    String::from_utf8(bytes).context("CSV report is not valid UTF-8")
}

/// Render the report as a JSON array, preserving row order
pub fn render_json(counts: &KeywordCounts) -> Result<String> {
    let rows: Vec<KeywordRow> = counts
        .iter()
        .map(|(keyword, count)| KeywordRow { keyword, count })
        .collect();
    serde_json::to_string_pretty(&rows).context("Failed to serialize JSON report")
}
