//! End-to-end: the visualiser session against a real transformation service on
//! a loopback port.

use std::time::Duration;

use rubiks_service::{ServiceConfig, TransformServer};
use rubiks_topology::{engine, FaceletState};
use rubiks_vis::{
    Error, HttpTransformClient, MemoryClipboard, PlaybackState, Session, TransformClient, VisConfig,
};
use tokio::net::TcpListener;

async fn start_service() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = TransformServer::new(ServiceConfig::default());
    tokio::spawn(server.serve_on(listener));
    format!("http://{addr}")
}

#[tokio::test]
async fn client_round_trips_through_service() {
    let base = start_service().await;
    let client = HttpTransformClient::new(&base);

    let turned = client.transform(&FaceletState::SOLVED, 'F').await.unwrap();
    assert_eq!(turned, engine::apply_sequence(&FaceletState::SOLVED, "F").state.to_vec());

    let state = FaceletState::try_from(turned).unwrap();
    let back = client.transform(&state, 'f').await.unwrap();
    assert_eq!(back, FaceletState::SOLVED.to_vec());
}

#[tokio::test]
async fn unknown_symbol_leaves_state_unchanged() {
    let base = start_service().await;
    let client = HttpTransformClient::new(&base);

    let codes = client.transform(&FaceletState::SOLVED, '?').await.unwrap();
    assert_eq!(codes, FaceletState::SOLVED.to_vec());
}

#[tokio::test]
async fn status_lists_moves() {
    let base = start_service().await;
    let status: serde_json::Value = reqwest::get(format!("{base}/api/status"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(status["status"], "ok");
    assert_eq!(status["moves"].as_array().unwrap().len(), 12);
}

#[tokio::test]
async fn malformed_layout_is_rejected() {
    let base = start_service().await;
    let response = reqwest::Client::new()
        .post(format!("{base}/cube"))
        .json(&serde_json::json!({"CubeLayout": [0, 1, 2], "Transformation": "F"}))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn plain_text_body_is_accepted() {
    let base = start_service().await;
    let body = serde_json::json!({
        "CubeLayout": FaceletState::SOLVED.to_vec(),
        "Transformation": "U",
    })
    .to_string();
    let response = reqwest::Client::new()
        .post(format!("{base}/cube"))
        .header(reqwest::header::CONTENT_TYPE, "text/plain;charset=UTF-8")
        .body(body)
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let codes: Vec<u8> = response.json().await.unwrap();
    assert_eq!(codes, engine::apply_sequence(&FaceletState::SOLVED, "U").state.to_vec());
}

#[tokio::test]
async fn unreachable_service_is_an_http_error() {
    // Bind then drop to get a port nothing listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = HttpTransformClient::new(&format!("http://{addr}"));
    let err = client.transform(&FaceletState::SOLVED, 'F').await.unwrap_err();
    assert!(matches!(err, Error::Http(_)));
}

#[tokio::test]
async fn session_plays_queue_through_service() {
    let base = start_service().await;
    let config = VisConfig {
        service_url: base.clone(),
        tick: Duration::from_millis(20),
        ..VisConfig::default()
    };
    let session = Session::new(config, HttpTransformClient::new(&base), MemoryClipboard::new());
    let handle = session.handle();
    let task = tokio::spawn(session.run());

    handle.set_queue_text("FRUB").unwrap();
    handle.toggle_playback().unwrap();

    let expected = engine::apply_sequence(&FaceletState::SOLVED, "FRUB").state;
    let mut updates = handle.subscribe();
    let snapshot = tokio::time::timeout(
        Duration::from_secs(10),
        updates.wait_for(|s| s.applied == 4),
    )
    .await
    .expect("playback did not finish")
    .unwrap()
    .clone();

    assert_eq!(snapshot.state, expected);
    assert_eq!(snapshot.playback.state, PlaybackState::Idle);

    handle.shutdown().unwrap();
    let session = task.await.unwrap();
    assert_eq!(session.state(), &expected);
}
