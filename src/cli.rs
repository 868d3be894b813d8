use clap::Parser;
use std::path::PathBuf;
use word_counter::application::dto::{OutputFormat, SortOrder};

/// Count word frequencies in a text file and save the tally
#[derive(Parser, Debug)]
#[command(name = "word-counter")]
#[command(version)]
#[command(about = "Count word frequencies in a text file and save the tally", long_about = None)]
pub struct Args {
    /// File to analyze, relative to the current directory (prompted for when omitted)
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<String>,

    /// File to store results in, relative to the current directory (prompted for when omitted)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<String>,

    /// Report format: text or json [default: text]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Entry order: none, alpha or count [default: none]
    #[arg(short, long)]
    pub sort: Option<SortOrder>,

    /// Config file to use instead of ./word-counter.config.yml
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print diagnostic log messages to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Skip the welcome banner
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
