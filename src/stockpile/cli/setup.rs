use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "stockpile", bin_name = "stockpile", version)]
#[command(about = "Interactive inventory manager backed by a CSV file", long_about = None)]
pub struct Cli {
    /// Use the per-user products instead of ./db
    #[arg(short, long)]
    pub global: bool,

    /// Read and write products in this directory
    #[arg(long, value_name = "DIR", conflicts_with = "global")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long)]
    pub verbose: bool,
}
