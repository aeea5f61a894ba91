use anyhow::Result;
use chrono::Duration;

use crate::clock::{Clock, SystemClock};
use crate::store::MeetingStore;
use crate::zoom::render_summary;

use super::args::RunCliArgs;

/// End-to-end flow: schedule a meeting for tomorrow, persist its join
/// details, then report the trailing week of past meetings (seeding a
/// placeholder once if the week is empty).
pub async fn handle_run_command(args: RunCliArgs) -> Result<()> {
    let client = super::connect().await?;

    let start = SystemClock.now() + Duration::days(1);
    let meeting = client.create_meeting("Important Meeting", start, 60).await?;

    let store = MeetingStore::new(&args.output);
    store.save_last_created(&meeting)?;
    println!("Meeting created and details saved to {:?}", store.path());

    let meetings = client.list_recent_or_seed().await?;
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
