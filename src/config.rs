//! Command-line options.
//!
//! Every flag is optional; running with no arguments prints the five-day
//! schedule and waits for a keypress.

use clap::builder::FalseyValueParser;
use clap::{ArgAction, Parser, ValueEnum};

#[derive(Debug, Parser)]
#[command(
    name = "workout-planner",
    version,
    about = "Fitness workout planner that swaps interchangeable plan strategies"
)]
pub struct Cli {
    /// Exit without waiting for a keypress
    #[arg(
        long,
        env = "WORKOUT_PLANNER_NO_PAUSE",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    pub no_pause: bool,

    /// Usage report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// List available strategies and exit
    #[arg(long)]
    pub list: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
