use clap::Parser;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "gedscan contributors",
    version,
    about = "gedscan - Parse a GEDCOM file and report individuals with incomplete parentage.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    /// Path to the GEDCOM file to parse.
    #[arg(value_name = "GEDFILE")]
    pub gedfile: PathBuf,

    /// Surname to search for (case-insensitive). Not needed with --debug.
    #[arg(value_name = "SURNAME", required_unless_present = "debug")]
    pub surname: Option<String>,

    /// Dump every individual with parent names and sibling counts instead of searching.
    #[arg(short = 'd', long = "debug", alias = "d")]
    pub debug: bool,

    /// Output CSV file name. Defaults to 'report.csv'.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S delimiter=;
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output and progress display
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
