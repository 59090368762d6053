//! CLI argument definitions and parsing
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "logsift",
    version,
    author = "neur0map",
    about = "Clean up verbose Android TV logs for easier sharing",
    long_about = "logsift drops noisy log lines (HTTP headers, raw JSON fields, repetitive debug \
                  output), keeps important ones, collapses large JSON responses into one-line \
                  summaries and can prepend a statistics block."
)]
pub struct Cli {
    /// Input log file (reads stdin when omitted)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Prepend a summary section
    #[arg(short, long)]
    pub summary: bool,

    /// Report progress on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Config file path (defaults to ~/.config/logsift/config.toml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Reduction profile, overriding the config file
    #[arg(short, long, value_parser = ["standard", "extended"])]
    pub profile: Option<String>,

    /// Print the resolved configuration as JSON and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
