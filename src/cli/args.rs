use clap::{ArgAction, Parser};
use serde::Serialize;
use std::path::PathBuf;

use crate::site::Tier;

/// Build the arcade.metalmancy.tech website to be served by a CDN/routing thing.
#[derive(Parser, Serialize, Debug)]
#[command(name = "build-arcade-site", author, version, about, long_about = None)]
pub struct Args {
    /// The application environment. dev or prod.
    #[arg(value_enum, value_name = "TIER")]
    pub tier: Tier,

    /// Verbosity of stdout logging
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Directory holding the netlify files [default: directory of this executable]
    #[arg(long, value_name = "DIR")]
    pub base_dir: Option<PathBuf>,

    /// Check the config file without copying it
    #[arg(long)]
    pub dry_run: bool,
}
