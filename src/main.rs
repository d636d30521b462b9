use clap::Parser;
use std::process::ExitCode;

use cli::args::Args;
use error::SiteError;
use logging::Logger;
use site::{deploy_config, SitePaths};
use utils::file_utils::LocalFs;

mod cli;
mod error;
mod logging;
mod site;
mod utils;

pub struct DryRunConfig {
    pub is_dry_run: bool,
}

fn run(args: &Args, logger: &Logger) -> Result<(), SiteError> {
    logger.section(&format!("Building arcade site ({})", args.tier));
    let args_json = serde_json::to_string(args).unwrap_or_else(|_| format!("{:?}", args));
    logger.debug(&format!("args={}", args_json));

    let dry_run_config = DryRunConfig {
        is_dry_run: args.dry_run,
    };
    if dry_run_config.is_dry_run {
        logger.info("Running in dry-run mode. No changes will be made.");
    }

    let base_dir = match &args.base_dir {
        Some(dir) => dir.clone(),
        None => SitePaths::program_dir()?,
    };
    let paths = SitePaths::new(base_dir, args.tier);

    deploy_config(&paths, &LocalFs, &dry_run_config, logger)
}

fn main() -> ExitCode {
    let args = Args::parse();
    let logger = Logger::new(args.verbose);

    match run(&args, &logger) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            logger.error(&err.to_string());
            ExitCode::FAILURE
        }
    }
}
