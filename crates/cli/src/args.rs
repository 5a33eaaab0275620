// crates/cli/src/args.rs
use clap::{ArgAction, Parser, ValueHint};
use std::path::PathBuf;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "neko",
    version = crate::VERSION,
    about = "Concatenate files to standard output with line numbers, visible tabs and ends, centering and color"
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Number all lines
    #[arg(short = 'n', long = "number", help_heading = "Display")]
    pub number_all: bool,

    /// Number non-empty lines only
    #[arg(
        short = 'b',
        long = "number-nonblank",
        conflicts_with = "number_all",
        help_heading = "Display"
    )]
    pub number_nonblank: bool,

    /// Show $ at end of lines
    #[arg(short = 'E', long, help_heading = "Display")]
    pub show_ends: bool,

    /// Show TAB characters as ^I
    #[arg(short = 'T', long, help_heading = "Display")]
    pub show_tabs: bool,

    /// Center the entire line output
    #[arg(short = 'c', long, help_heading = "Display")]
    pub center: bool,

    /// Color output by character type
    #[arg(short = 'C', long = "color", help_heading = "Display")]
    pub use_color: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, help_heading = "Logging")]
    pub verbose: u8,

    /// Disable logging
    #[arg(short, long, conflicts_with = "verbose", help_heading = "Logging")]
    pub quiet: bool,

    /// Files to display; standard input when omitted or `-`
    #[arg(value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub files: Vec<PathBuf>,
}
