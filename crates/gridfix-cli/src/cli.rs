use clap::Parser;
use gridfix::engine::config::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Tony Kan",
    version,
    about = "gridfix - Spreads molecules that were all generated at the origin of a LAMMPS data file onto a non-overlapping grid.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    /// Path to the LAMMPS data file to repair.
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT_PATH)]
    pub input: PathBuf,

    /// Path for the repaired data file.
    #[arg(value_name = "OUTPUT", default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
