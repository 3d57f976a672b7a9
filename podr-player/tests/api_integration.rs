//! Integration tests for the Podr player API
//!
//! Exercises the HTTP surface end to end through the axum router:
//! - Health check
//! - Player state and transitions (play-list happy path, bad index)
//! - Sink reconciliation callbacks

use axum::http::StatusCode;
use serde_json::{json, Value};

use podr_common::events::EventBus;
use podr_player::api::{create_router, AppState};
use podr_player::player::SharedPlayer;
use podr_player::source::EpisodeSource;

/// Test helper to create a router with a fresh player
fn setup_test_router() -> axum::Router {
    let app_state = AppState {
        player: SharedPlayer::new(EventBus::new(64)),
        // No catalog test hits the backend; any URL will do
        source: EpisodeSource::new("http://127.0.0.1:3333"),
        port: 5750,
    };
    create_router(app_state)
}

/// Helper to make HTTP requests to the test router
async fn make_request(
    app: &axum::Router,
    method: &str,
    path: &str,
    body: Option<Value>,
) -> (StatusCode, Option<Value>) {
    use axum::body::Body;
    use http::{Method, Request};
    use tower::ServiceExt;

    let method = match method {
        "GET" => Method::GET,
        "POST" => Method::POST,
        _ => panic!("Unsupported method"),
    };

    let mut request = Request::builder().method(method).uri(path);
    if body.is_some() {
        request = request.header("content-type", "application/json");
    }

    let request = if let Some(json_body) = body {
        request.body(Body::from(json_body.to_string())).unwrap()
    } else {
        request.body(Body::empty()).unwrap()
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json_body = if !bytes.is_empty() {
        Some(serde_json::from_slice(&bytes).unwrap())
    } else {
        None
    };

    (status, json_body)
}

fn test_episode(id: u8) -> Value {
    json!({
        "id": format!("ep-{}", id),
        "title": format!("Episode {}", id),
        "members": "Hosts",
        "published_at": "2021-01-22T12:00:00Z",
        "thumbnail": format!("thumb-{}.jpg", id),
        "description": "",
        "duration": 3661,
        "url": format!("audio-{}.mp3", id)
    })
}

#[tokio::test]
async fn test_health_check() {
    let app = setup_test_router();
    let (status, body) = make_request(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    let body = body.unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "podr-player");
}

#[tokio::test]
async fn test_player_starts_empty() {
    let app = setup_test_router();
    let (status, body) = make_request(&app, "GET", "/api/v1/player", None).await;

    assert_eq!(status, StatusCode::OK);
    let body = body.unwrap();
    assert!(body["current_episode"].is_null());
    assert_eq!(body["queue_len"], 0);
    assert_eq!(body["is_playing"], false);
    assert_eq!(body["has_next"], false);
    assert_eq!(body["has_previous"], false);
}

#[tokio::test]
async fn test_play_list_happy_path() {
    let app = setup_test_router();
    let request = json!({
        "episodes": [test_episode(1), test_episode(2), test_episode(3)],
        "start_index": 1
    });

    let (status, body) =
        make_request(&app, "POST", "/api/v1/player/play-list", Some(request)).await;

    assert_eq!(status, StatusCode::OK);
    let body = body.unwrap();
    assert_eq!(body["current_episode"]["id"], "ep-2");
    assert_eq!(body["is_playing"], true);
    assert_eq!(body["queue_len"], 3);
    assert_eq!(body["has_next"], true);
    assert_eq!(body["has_previous"], true);
    assert_eq!(body["duration_as_string"], "01:01:01");
}

#[tokio::test]
async fn test_play_list_bad_index_is_rejected() {
    let app = setup_test_router();
    let request = json!({
        "episodes": [test_episode(1)],
        "start_index": 1
    });

    let (status, body) =
        make_request(&app, "POST", "/api/v1/player/play-list", Some(request)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.unwrap()["error"]
        .as_str()
        .unwrap()
        .contains("Invalid start index"));

    // State untouched by the rejected call
    let (_, body) = make_request(&app, "GET", "/api/v1/player", None).await;
    assert_eq!(body.unwrap()["queue_len"], 0);
}

#[tokio::test]
async fn test_play_single_stages_without_playing() {
    let app = setup_test_router();
    let (status, body) =
        make_request(&app, "POST", "/api/v1/player/play", Some(test_episode(7))).await;

    assert_eq!(status, StatusCode::OK);
    let body = body.unwrap();
    assert_eq!(body["current_episode"]["id"], "ep-7");
    assert_eq!(body["is_playing"], false);
    assert_eq!(body["queue_len"], 1);
}

#[tokio::test]
async fn test_navigation_and_noops() {
    let app = setup_test_router();
    let request = json!({
        "episodes": [test_episode(1), test_episode(2)],
        "start_index": 0
    });
    make_request(&app, "POST", "/api/v1/player/play-list", Some(request)).await;

    // Previous at the head is a defined no-op
    let (status, body) = make_request(&app, "POST", "/api/v1/player/previous", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.unwrap()["current_index"], 0);

    let (_, body) = make_request(&app, "POST", "/api/v1/player/next", None).await;
    let body = body.unwrap();
    assert_eq!(body["current_index"], 1);
    assert_eq!(body["has_next"], false);

    // Next at the tail is a defined no-op
    let (_, body) = make_request(&app, "POST", "/api/v1/player/next", None).await;
    assert_eq!(body.unwrap()["current_index"], 1);
}

#[tokio::test]
async fn test_sink_ended_exhausts_queue() {
    let app = setup_test_router();
    let request = json!({
        "episodes": [test_episode(1)],
        "start_index": 0
    });
    make_request(&app, "POST", "/api/v1/player/play-list", Some(request)).await;

    let (status, body) = make_request(&app, "POST", "/api/v1/player/sink/ended", None).await;
    assert_eq!(status, StatusCode::OK);
    let body = body.unwrap();
    assert!(body["current_episode"].is_null());
    assert_eq!(body["queue_len"], 0);
    assert_eq!(body["is_playing"], false);
}

#[tokio::test]
async fn test_sink_playing_mirrors_pause() {
    let app = setup_test_router();
    let request = json!({
        "episodes": [test_episode(1)],
        "start_index": 0
    });
    make_request(&app, "POST", "/api/v1/player/play-list", Some(request)).await;

    let (status, body) = make_request(
        &app,
        "POST",
        "/api/v1/player/sink/playing",
        Some(json!({ "playing": false })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.unwrap()["is_playing"], false);
}

#[tokio::test]
async fn test_toggles_flip_flags() {
    let app = setup_test_router();

    let (_, body) = make_request(&app, "POST", "/api/v1/player/toggle-loop", None).await;
    assert_eq!(body.unwrap()["is_looping"], true);

    let (_, body) = make_request(&app, "POST", "/api/v1/player/toggle-shuffle", None).await;
    assert_eq!(body.unwrap()["is_shuffling"], true);

    // Shuffle alone does not invent a next on an empty queue
    let (_, body) = make_request(&app, "GET", "/api/v1/player", None).await;
    assert_eq!(body.unwrap()["has_next"], false);
}

#[tokio::test]
async fn test_clear_preserves_mode_flags() {
    let app = setup_test_router();
    let request = json!({
        "episodes": [test_episode(1), test_episode(2)],
        "start_index": 0
    });
    make_request(&app, "POST", "/api/v1/player/play-list", Some(request)).await;
    make_request(&app, "POST", "/api/v1/player/toggle-loop", None).await;
    make_request(&app, "POST", "/api/v1/player/toggle-shuffle", None).await;

    let (status, body) = make_request(&app, "POST", "/api/v1/player/clear", None).await;
    assert_eq!(status, StatusCode::OK);
    let body = body.unwrap();
    assert_eq!(body["queue_len"], 0);
    assert_eq!(body["is_looping"], true);
    assert_eq!(body["is_shuffling"], true);
    assert_eq!(body["is_playing"], false);
}
