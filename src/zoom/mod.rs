//! HTTP client for the Zoom meetings REST API.
//!
//! One token fetch at construction time, then authenticated calls to
//! create a meeting and list past meetings, plus a bounded fallback
//! that seeds a placeholder meeting when the listing comes back empty.

pub mod auth;
mod types;

pub use auth::{fetch_token, AccessToken, DEFAULT_TOKEN_URL};
pub use types::{CreateMeetingRequest, ListMeetingsResponse, Meeting, MeetingSummary};

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info};

use crate::clock::Clock;

pub const DEFAULT_BASE_URL: &str = "https://api.zoom.us";

const MEETING_TYPE_SCHEDULED: u8 = 2;

/// Wire format for instants: second precision, trailing Z.
const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Client for the meetings endpoints of the Zoom v2 API.
///
/// Holds the bearer token for its whole lifetime and a clock for the
/// time-window queries. Every failure propagates to the caller; there
/// is no retry or backoff anywhere.
pub struct ZoomClient {
    http: reqwest::Client,
    base_url: String,
    token: AccessToken,
    clock: Box<dyn Clock>,
}

impl ZoomClient {
    pub fn new(
        http: reqwest::Client,
        base_url: &str,
        token: AccessToken,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            clock,
        }
    }

    fn meetings_url(&self) -> String {
        format!("{}/v2/users/me/meetings", self.base_url)
    }

    /// Schedule a meeting for the current user, timezone fixed to UTC.
    ///
    /// Returns the parsed provider response; persisting it is the
    /// caller's decision.
    pub async fn create_meeting(
        &self,
        topic: &str,
        start_time: DateTime<Utc>,
        duration_minutes: u32,
    ) -> Result<Meeting> {
        let payload = CreateMeetingRequest {
            topic: topic.to_string(),
            r#type: MEETING_TYPE_SCHEDULED,
            start_time: start_time.format(TIME_FORMAT).to_string(),
            duration: duration_minutes,
            timezone: "UTC".to_string(),
        };

        debug!("Creating meeting {:?} at {}", topic, payload.start_time);

        let response = self
            .http
            .post(self.meetings_url())
            .bearer_auth(self.token.secret())
            .json(&payload)
            .send()
            .await
            .context("Failed to send create meeting request")?;

        let status = response.status();
        let body = response
            .text()
            .await
            .context("Failed to read create meeting response")?;

        if !status.is_success() {
            return Err(anyhow::anyhow!(
                "Create meeting failed ({}): {}",
                status,
                body
            ));
        }

        let meeting: Meeting =
            serde_json::from_str(&body).context("Failed to parse create meeting response")?;

        info!("Created meeting {} ({})", meeting.id, meeting.join_url);
        Ok(meeting)
    }

    /// List past meetings in the trailing 7-day window ending now.
    /// Order is whatever the provider returned.
    pub async fn list_past_meetings(&self) -> Result<Vec<MeetingSummary>> {
        let to = self.clock.now();
        let from = (to - Duration::days(7)).format(TIME_FORMAT).to_string();
        let to = to.format(TIME_FORMAT).to_string();

        debug!("Listing past meetings from {} to {}", from, to);

        let response = self
            .http
            .get(self.meetings_url())
            .bearer_auth(self.token.secret())
            .query(&[("type", "past"), ("from", from.as_str()), ("to", to.as_str())])
            .send()
            .await
            .context("Failed to send list meetings request")?;

        let status = response.status();
        let body = response
            .text()
            .await
            .context("Failed to read list meetings response")?;

        if !status.is_success() {
            return Err(anyhow::anyhow!(
                "List meetings failed ({}): {}",
                status,
                body
            ));
        }

        let listing: ListMeetingsResponse =
            serde_json::from_str(&body).context("Failed to parse list meetings response")?;

        Ok(listing.meetings)
    }

    /// List past meetings, seeding one placeholder meeting when the
    /// first query is empty.
    ///
    /// The re-query happens exactly once. A freshly scheduled future
    /// meeting never matches the "past" filter, so the second result
    /// may still be empty; looping until it shows up could never
    /// terminate.
    pub async fn list_recent_or_seed(&self) -> Result<Vec<MeetingSummary>> {
        let meetings = self.list_past_meetings().await?;
        if !meetings.is_empty() {
            return Ok(meetings);
        }

        info!("No past meetings found, scheduling a test meeting");
        let start = self.clock.now() + Duration::minutes(10);
        self.create_meeting("Test Meeting", start, 30).await?;

        self.list_past_meetings().await
    }
}

/// Human-readable block for one meeting summary.
pub fn render_summary(meeting: &MeetingSummary) -> String {
    let participants = meeting
        .participants_count
        .map(|count| count.to_string())
        .unwrap_or_else(|| "N/A".to_string());

    format!(
        "Meeting Topic: {}\nStart Time: {}\nParticipants: {}",
        meeting.topic, meeting.start_time, participants
    )
}
