//! Command-line interface for projectinfo.
//!
//! Run it from the root of the project: it writes `projectinfo.txt` next to
//! `build.gradle.kts` and prints a short report.

use clap::{Parser, ValueEnum};
use projectinfo::{ManifestBuilder, ManifestOptions, ManifestReport, output, generate};
use std::path::PathBuf;
use std::process::exit;

/// projectinfo — bundle a project's layout and sources into one manifest
#[derive(Parser)]
#[command(name = "projectinfo", version, about, long_about = None)]
struct Cli {
    /// Project root (default current dir)
    #[arg(long)]
    root: Option<PathBuf>,

    /// Manifest file name, created under the root
    #[arg(long, default_value = projectinfo::DEFAULT_OUTPUT)]
    output: String,

    /// Keep directory enumeration order instead of sorting by file name
    #[arg(long)]
    unsorted: bool,

    /// Report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// Pretty output (indented JSON)
    #[arg(short, long)]
    pretty: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum ReportFormat {
    Text,
    Json,
}

impl From<ReportFormat> for output::ReportFormat {
    fn from(format: ReportFormat) -> Self {
        match format {
            ReportFormat::Text => output::ReportFormat::Text,
            ReportFormat::Json => output::ReportFormat::Json,
        }
    }
}

impl Cli {
    fn into_options(self) -> (ManifestOptions, ReportFormat, bool) {
        let root = match self.root {
            Some(root) => root,
            None => std::env::current_dir().unwrap_or_else(|e| {
                eprintln!("Error: cannot determine working directory: {}", e);
                exit(1);
            }),
        };
        let options = ManifestBuilder::new(root)
            .output_name(self.output)
            .sort_entries(!self.unsorted)
            .build();
        (options, self.format, self.pretty)
    }
}

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let (options, format, pretty) = cli.into_options();

    eprintln!("Processing directory: {}", options.root.display());
    match generate(options) {
        Ok(report) => print_report(&report, format, pretty),
        Err(e) => {
            eprintln!("Error: failed to generate manifest: {}", e);
            exit(1);
        }
    }
}

fn print_report(report: &ManifestReport, format: ReportFormat, pretty: bool) {
    match output::format_report(report, format.into(), pretty) {
        Ok(out) => print!("{}", out),
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}
