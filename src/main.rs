use anyhow::Result;
use clap::Parser;
use cvscan::{
    config::Config,
    models::ScanOutcome,
    report::{self, ReportFormat},
    scan::Scanner,
};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "cvscan")]
#[command(about = "Count keyword hits in the professional experience section of a résumé")]
#[command(version)]
struct Cli {
    /// Résumé to scan, .pdf or .docx (overrides config)
    #[arg(long, value_name = "FILE")]
    resume: Option<String>,

    /// Keyword list, one keyword per line (overrides config)
    #[arg(long, value_name = "FILE")]
    keywords: Option<String>,

    /// Settings file (defaults to config/settings.toml when present)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Report format (overrides config)
    #[arg(long, value_enum)]
    format: Option<ReportFormat>,

    /// Log pipeline steps to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), level))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load()?,
    }
    .with_overrides(cli.resume, cli.keywords, cli.format);

    let format = config.report.format;
    let scanner = Scanner::new(config);

    match scanner.run().await? {
        ScanOutcome::UnsupportedFormat(_) => {
            println!("Unsupported file format");
        }
        ScanOutcome::SectionNotFound => {
            println!("No professional experience section found.");
        }
        ScanOutcome::Report(counts) => {
            let rendered = report::render(&counts, format)?;
            if format == ReportFormat::Table {
                println!("Professional Experience Section Extracted Successfully!\n");
                println!("{}", rendered);
            } else {
                print!("{}", rendered);
                if !rendered.ends_with('\n') {
                    println!();
                }
            }
        }
    }

    Ok(())
}
