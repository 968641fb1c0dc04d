use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use log::{error, info};

use dupsweep::folder_scanner::hasher::check_block_size;
use dupsweep::folder_scanner::DEFAULT_BLOCK_SIZE;
use dupsweep::{runner, Action, AssumeYes, Config, ConsoleInteraction, Outcome};

// Deletion ran to the end but some files could not be removed.
const EXIT_PARTIAL: u8 = 3;

/// Find files with identical content and delete the redundant copies.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Folder to scan recursively
    folder: PathBuf,

    #[arg(short, long, value_enum, default_value_t = Action::Delete)]
    action: Action,

    /// Delete without asking for confirmation
    #[arg(short, long)]
    yes: bool,

    /// Bytes read per step while hashing
    #[arg(long, env = "DUPSWEEP_BLOCK_SIZE", default_value_t = DEFAULT_BLOCK_SIZE, value_parser = parse_block_size)]
    block_size: usize,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

fn parse_block_size(value: &str) -> Result<usize, String> {
    let size = value.parse::<usize>().map_err(|error| error.to_string())?;
    check_block_size(size).map_err(|error| error.to_string())
}

// RUST_LOG, when set, wins over the flags.
fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "info",
        (false, 1) => "debug",
        (false, _) => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    info!("Input folder {}", args.folder.display());
    info!("Action for duplicates: {:?}", args.action);

    let config = match Config::new(args.block_size, args.action) {
        Ok(config) => config,
        Err(err) => {
            error!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    let result = if args.yes {
        runner::run(&args.folder, &config, &mut AssumeYes::stdout())
    } else {
        runner::run(&args.folder, &config, &mut ConsoleInteraction::stdio())
    };

    match result {
        Ok(Outcome::Completed(report)) if !report.all_succeeded() => {
            error!("{} deletions failed", report.failures.len());
            ExitCode::from(EXIT_PARTIAL)
        }
        Ok(_) => {
            info!("Exiting...");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
