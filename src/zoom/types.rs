use serde::{Deserialize, Serialize};

/// Body of the "create meeting for the current user" request.
#[derive(Debug, Serialize)]
pub struct CreateMeetingRequest {
    pub topic: String,
    /// Zoom meeting type; 2 is a scheduled meeting.
    pub r#type: u8,
    pub start_time: String,
    /// Duration in minutes.
    pub duration: u32,
    pub timezone: String,
}

/// Meeting object returned by the create endpoint.
///
/// Only the fields this client reads back; the provider sends many
/// more. `start_time` stays the provider's own ISO-8601 string so the
/// persisted value matches the API response byte for byte.
#[derive(Debug, Clone, Deserialize)]
pub struct Meeting {
    pub id: u64,
    pub join_url: String,
    pub start_time: String,
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub duration: Option<u32>,
}

/// One entry from the meeting listing.
#[derive(Debug, Clone, Deserialize)]
pub struct MeetingSummary {
    pub id: u64,
    pub topic: String,
    pub start_time: String,
    /// Absent for meetings the provider has not reconciled yet.
    #[serde(default)]
    pub participants_count: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct ListMeetingsResponse {
    #[serde(default)]
    pub meetings: Vec<MeetingSummary>,
}
