use anyhow::Result;

use crate::zoom::render_summary;

use super::args::RecentCliArgs;

pub async fn handle_recent_command(args: RecentCliArgs) -> Result<()> {
    let client = super::connect().await?;

    let meetings = if args.seed_if_empty {
        client.list_recent_or_seed().await?
    } else {
        client.list_past_meetings().await?
    };

    if meetings.is_empty() {
        println!("No past meetings found in the last 7 days.");
        return Ok(());
    }

    for meeting in &meetings {
        println!("{}", render_summary(meeting));
        println!("---");
    }
    Ok(())
}
