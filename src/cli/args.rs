use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "zoomctl")]
#[command(about = "Schedule and review Zoom meetings", long_about = None)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Schedule a meeting and persist its join details
    Schedule(ScheduleCliArgs),
    /// List past meetings from the trailing week
    Recent(RecentCliArgs),
    /// Schedule a meeting for tomorrow, then list the trailing week
    Run(RunCliArgs),
    /// Print version information
    Version,
}

#[derive(ClapArgs, Debug)]
pub struct ScheduleCliArgs {
    /// Meeting topic
    #[arg(short, long)]
    pub topic: String,
    /// Start the meeting this many minutes from now
    #[arg(long, default_value = "10", conflicts_with = "start")]
    pub in_minutes: i64,
    /// Explicit start instant (RFC 3339, e.g. 2024-01-02T00:00:00Z)
    #[arg(long)]
    pub start: Option<String>,
    /// Meeting duration in minutes
    #[arg(short, long, default_value = "30")]
    pub duration: u32,
    /// Where to write the persisted meeting details
    #[arg(short, long, default_value = "meeting_info.json")]
    pub output: PathBuf,
}

#[derive(ClapArgs, Debug)]
pub struct RecentCliArgs {
    /// Schedule a placeholder meeting and query once more if the week is empty
    #[arg(long)]
    pub seed_if_empty: bool,
}

#[derive(ClapArgs, Debug)]
pub struct RunCliArgs {
    /// Where to write the persisted meeting details
    #[arg(short, long, default_value = "meeting_info.json")]
    pub output: PathBuf,
}
