/// Command-line arguments.
use clap::Parser;
use foldersort_core::config::DEFAULT_REPORT_FILE;
use foldersort_core::SortConfig;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "foldersort")]
#[command(about = "Classify the files in a folder by extension and write a summary report", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Folder to sort. A missing argument is treated as empty input.
    pub folder: Option<String>,

    /// Where to write the summary report (overwritten on every run)
    #[arg(short, long, default_value = DEFAULT_REPORT_FILE)]
    pub report: PathBuf,

    /// Print the results as JSON instead of text panels
    #[arg(long)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn sort_config(&self) -> SortConfig {
        SortConfig::new().with_report_path(&self.report)
    }
}
