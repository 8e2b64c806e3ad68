// src/cli.rs
use crate::core::scanner::policy::Policy;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Project directory; relative paths resolve against it (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub directory: PathBuf,

    /// Manuscript to scan [default: manuscript.md]
    #[arg(short, long)]
    pub manuscript: Option<PathBuf>,

    /// YAML file mapping table labels to documents [default: tables/tables.yml]
    #[arg(short, long)]
    pub table_map: Option<PathBuf>,

    /// Submission directory to copy into [default: build/submission]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// How figures and tables are split into main and supplementary [default: label-prefix]
    #[arg(short, long, value_enum)]
    pub policy: Option<Policy>,

    /// Show what would be copied without touching the output directory
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
