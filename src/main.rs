use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use zoomctl::cli::{
    handle_recent_command, handle_run_command, handle_schedule_command, Cli, CliCommand,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_level = if cli.verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Credentials may be seeded from a local .env file
    dotenvy::dotenv().ok();

    match cli.command {
        CliCommand::Version => {
            println!("zoomctl {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        CliCommand::Schedule(args) => handle_schedule_command(args).await,
        CliCommand::Recent(args) => handle_recent_command(args).await,
        CliCommand::Run(args) => handle_run_command(args).await,
    }
}
