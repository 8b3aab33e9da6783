use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "offerscore",
    version,
    about = "Real-estate offer strength scoring and strategy CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a commented starter scenario file
    Init(InitCommand),
    /// Score a scenario and print the full report
    Score(ScoreCommand),
    /// Print only the recommendation list for a scenario
    Suggest(SuggestCommand),
    /// Write the scenario, score, and timestamp as a JSON export
    Export(ExportCommand),
}

#[derive(Args)]
pub struct InitCommand {
    /// Scenario file to create, or a directory to create offer.toml in
    pub path: PathBuf,
    #[arg(long)]
    pub no_overwrite: bool,
}

#[derive(Args)]
pub struct ScoreCommand {
    /// Scenario file to evaluate
    pub path: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct SuggestCommand {
    /// Scenario file to evaluate
    pub path: PathBuf,
}

#[derive(Args)]
pub struct ExportCommand {
    /// Scenario file to export
    pub path: PathBuf,
    /// Destination file (default: timestamped name beside the scenario)
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
