//! End-to-end flow test against a mocked Zoom API: authenticate,
//! schedule a meeting, persist it, then list the trailing week.

use chrono::{Duration, Utc};
use mockito::Matcher;
use serde_json::json;
use zoomctl::clock::SystemClock;
use zoomctl::config::Credentials;
use zoomctl::store::MeetingStore;
use zoomctl::zoom::{fetch_token, ZoomClient};

#[tokio::test]
async fn schedule_then_list_against_mock_server() {
    let mut server = mockito::Server::new_async().await;

    let token_mock = server
        .mock("POST", "/oauth/token")
        .match_body(Matcher::UrlEncoded(
            "grant_type".into(),
            "account_credentials".into(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"access_token":"T1"}"#)
        .create_async()
        .await;

    let create_mock = server
        .mock("POST", "/v2/users/me/meetings")
        .match_header("authorization", "Bearer T1")
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "id": 987,
                "join_url": "https://zoom.us/j/987",
                "start_time": "2024-06-01T10:00:00Z",
            })
            .to_string(),
        )
        .create_async()
        .await;

    let list_mock = server
        .mock("GET", "/v2/users/me/meetings")
        .match_header("authorization", "Bearer T1")
        .match_query(Matcher::UrlEncoded("type".into(), "past".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "meetings": [
                    {
                        "id": 987,
                        "topic": "Weekly sync",
                        "start_time": "2024-05-30T10:00:00Z",
                        "participants_count": 4,
                    }
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let credentials = Credentials {
        account_id: "acct".to_string(),
        client_id: "cid".to_string(),
        client_secret: "cs".to_string(),
    };

    let http = reqwest::Client::new();
    let token = fetch_token(
        &http,
        &format!("{}/oauth/token", server.url()),
        &credentials,
    )
    .await
    .unwrap();

    let client = ZoomClient::new(http, &server.url(), token, Box::new(SystemClock));

    let meeting = client
        .create_meeting("Demo", Utc::now() + Duration::days(1), 60)
        .await
        .unwrap();
    assert_eq!(meeting.id, 987);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("meeting_info.json");
    MeetingStore::new(&path).save_last_created(&meeting).unwrap();

    let stored: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(stored["meeting_id"], 987);
    assert_eq!(stored["join_url"], "https://zoom.us/j/987");
    assert_eq!(stored["start_time"], "2024-06-01T10:00:00Z");

    let meetings = client.list_past_meetings().await.unwrap();
    assert_eq!(meetings.len(), 1);
    assert_eq!(meetings[0].topic, "Weekly sync");
    assert_eq!(meetings[0].participants_count, Some(4));

    token_mock.assert_async().await;
    create_mock.assert_async().await;
    list_mock.assert_async().await;
}
