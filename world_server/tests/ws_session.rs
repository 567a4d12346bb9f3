mod support;

use futures_util::{SinkExt, StreamExt};
use serde_json::{Value, json};
use std::time::Duration;
use tokio_tungstenite::{connect_async, tungstenite::Message};

fn ws_url() -> String {
    let base_url = support::ensure_server();
    let host = base_url
        .strip_prefix("http://")
        .expect("base url should use http://");
    format!("ws://{host}/ws")
}

#[tokio::test]
async fn test_session_enters_a_level_and_streams_snapshots() {
    let (mut socket, _response) = connect_async(ws_url()).await.expect("ws connect");

    let start = json!({"type": "StartLevel", "data": {"level": 0}});
    socket
        .send(Message::text(start.to_string()))
        .await
        .expect("send start level");
    let controls = json!({"type": "Controls", "data": {"throttle": 1.0}});
    socket
        .send(Message::text(controls.to_string()))
        .await
        .expect("send controls");

    let snapshot = tokio::time::timeout(Duration::from_secs(5), async {
        loop {
            let msg = socket
                .next()
                .await
                .expect("socket stays open")
                .expect("ws read");
            if !msg.is_text() {
                continue;
            }
            let text = msg.into_text().expect("text frame");
            let value: Value = serde_json::from_str(&text).expect("valid server json");
            if value["type"] != "Snapshot" {
                continue;
            }
            let data = value["data"].clone();
            if data["mission"]["phase"] == "level_active" && data["tick"].as_u64() > Some(2) {
                break data;
            }
        }
    })
    .await
    .expect("an active snapshot should arrive");

    assert_eq!(snapshot["player"]["hull"].as_u64(), Some(3));
    assert_eq!(snapshot["enemies"].as_array().map(Vec::len), Some(6));
    assert_eq!(snapshot["gates"].as_array().map(Vec::len), Some(7));
    assert_eq!(snapshot["mission"]["enemies_remaining"].as_u64(), Some(6));
    assert_eq!(snapshot["lock"]["phase"], "none");
}

#[tokio::test]
async fn test_repeated_invalid_json_closes_the_connection() {
    let (mut socket, _response) = connect_async(ws_url()).await.expect("ws connect");

    for _ in 0..12 {
        socket
            .send(Message::text("definitely not json"))
            .await
            .expect("send garbage");
    }

    let closed = tokio::time::timeout(Duration::from_secs(5), async {
        loop {
            match socket.next().await {
                Some(Ok(Message::Close(_))) | None => break true,
                Some(Ok(_)) => continue,
                Some(Err(_)) => break true,
            }
        }
    })
    .await
    .expect("server should close the socket");

    assert!(closed);
}
