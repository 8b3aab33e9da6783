mod cli;
mod engine;
mod error;
mod report;
mod scenario;
mod types;

use crate::error::OfferError;
use crate::types::report::Label;
use clap::Parser;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const NEEDS_WORK: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 2;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<i32, OfferError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Init(cmd) => {
            let path = scenario::write_template(&cmd.path, cmd.no_overwrite)?;
            println!("scenario file: {}", path.display());
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Score(cmd) => {
            let scenario = scenario::load_scenario(&cmd.path)?;
            let offer_report = engine::evaluate(&scenario);

            let output_format = match cmd.format {
                cli::ReportFormat::Json => report::OutputFormat::Json,
                cli::ReportFormat::Md => report::OutputFormat::Md,
            };
            let rendered = report::render(&offer_report, output_format)?;
            println!("{rendered}");

            if offer_report.label == Label::NeedsWork {
                Ok(exit_code::NEEDS_WORK)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Suggest(cmd) => {
            let scenario = scenario::load_scenario(&cmd.path)?;
            let offer_report = engine::evaluate(&scenario);

            println!("suggestions:");
            for recommendation in &offer_report.recommendations {
                println!("- {recommendation}");
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Export(cmd) => {
            let scenario = scenario::load_scenario(&cmd.path)?;
            let offer_report = engine::evaluate(&scenario);
            let path =
                report::export::write_export(&cmd.path, &scenario, &offer_report, cmd.out.as_deref())?;
            println!("export file: {}", path.display());
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
