use std::path::PathBuf;

use clap::Parser;

/// Holiday and PTO day calculator.
#[derive(Parser)]
#[command(
    name = "ptocalendar",
    version,
    about = "Observed holidays and chargeable PTO days"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to a JSON configuration file. The built-in calendar is used when omitted.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Year whose holidays are listed (1-9999). Defaults to the current year.
    #[arg(short, long, value_parser = clap::value_parser!(i32).range(1..=9999))]
    pub year: Option<i32>,

    /// First day of a PTO request (YYYY-MM-DD).
    #[arg(long, requires = "end")]
    pub start: Option<String>,

    /// Last day of a PTO request (YYYY-MM-DD).
    #[arg(long, requires = "start")]
    pub end: Option<String>,

    /// Print the calendar widget events as JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}
