use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};

use crate::clock::{Clock, SystemClock};
use crate::store::MeetingStore;

use super::args::ScheduleCliArgs;

pub async fn handle_schedule_command(args: ScheduleCliArgs) -> Result<()> {
    let client = super::connect().await?;

    let start = match &args.start {
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .context("Invalid --start value, expected RFC 3339")?
            .with_timezone(&Utc),
        None => SystemClock.now() + Duration::minutes(args.in_minutes),
    };

    let meeting = client
        .create_meeting(&args.topic, start, args.duration)
        .await?;

    let store = MeetingStore::new(&args.output);
    store.save_last_created(&meeting)?;

    println!("Meeting created and details saved to {:?}", store.path());
    println!("Join URL: {}", meeting.join_url);
    Ok(())
}
