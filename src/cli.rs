use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pdfsplit")]
#[command(about = "Split a PDF into separate files by page ranges")]
#[command(version)]
pub struct Cli {
    /// PDF file to split
    pub path: Option<PathBuf>,

    /// Page ranges (e.g., "1-2,4"); one file per page if omitted
    #[arg(allow_hyphen_values = true)]
    pub ranges: Option<String>,
}
