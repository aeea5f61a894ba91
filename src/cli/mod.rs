use anyhow::Result;

use crate::clock::SystemClock;
use crate::config::Credentials;
use crate::zoom::{self, ZoomClient};

pub mod args;
mod recent;
mod run;
mod schedule;

pub use args::{Cli, CliCommand, RecentCliArgs, RunCliArgs, ScheduleCliArgs};
pub use recent::handle_recent_command;
pub use run::handle_run_command;
pub use schedule::handle_schedule_command;

/// Load credentials, fetch a token, and build an authenticated client.
/// Endpoint overrides come from `ZOOM_OAUTH_TOKEN_URL` and
/// `ZOOM_API_BASE_URL`.
pub(crate) async fn connect() -> Result<ZoomClient> {
    let credentials = Credentials::from_env()?;

    let token_url = std::env::var("ZOOM_OAUTH_TOKEN_URL")
        .unwrap_or_else(|_| zoom::DEFAULT_TOKEN_URL.to_string());
    let base_url = std::env::var("ZOOM_API_BASE_URL")
        .unwrap_or_else(|_| zoom::DEFAULT_BASE_URL.to_string());

    let http = reqwest::Client::new();
    let token = zoom::fetch_token(&http, &token_url, &credentials).await?;

    Ok(ZoomClient::new(
        http,
        &base_url,
        token,
        Box::new(SystemClock),
    ))
}
