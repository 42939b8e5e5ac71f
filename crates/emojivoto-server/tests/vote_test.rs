//! Tests de votacion y leaderboard.

mod helpers;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use axum::http::StatusCode;
use emojivoto_server::AppState;
use emojivoto_store::emojivoto_core::{ItemCatalog, VoteCount};
use emojivoto_store::{ItemDirectory, SqliteTally, TallyBackend, TallyError, VoteTally};
use helpers::{TestClient, client, client_with_state};

/// Backend whose store is unreachable.
#[derive(Default)]
struct DownTally {
    increments: AtomicU64,
}

#[async_trait]
impl TallyBackend for DownTally {
    async fn increment(&self, _choice: &str) -> Result<u64, TallyError> {
        self.increments.fetch_add(1, Ordering::Relaxed);
        Err(TallyError::unavailable("down"))
    }

    async fn snapshot(&self) -> Result<Vec<VoteCount>, TallyError> {
        Err(TallyError::unavailable("down"))
    }

    fn name(&self) -> &str {
        "down"
    }
}

fn client_with_down_tally(backend: Arc<DownTally>) -> TestClient {
    client_with_state(AppState::new(
        VoteTally::new(backend),
        ItemDirectory::uncached(Arc::new(ItemCatalog::standard())),
    ))
}

async fn leaderboard(client: &TestClient) -> Vec<VoteCount> {
    let response = client.get("/leaderboard").await;
    response.assert_status(StatusCode::OK);
    response.json()
}

#[tokio::test]
async fn empty_leaderboard() {
    assert!(leaderboard(&client()).await.is_empty());
}

#[tokio::test]
async fn vote_returns_no_content() {
    let response = client().vote(":joy:").await;

    response.assert_status(StatusCode::NO_CONTENT);
    assert!(response.body.is_empty());
}

#[tokio::test]
async fn leaderboard_ranks_votes() {
    let client = client();

    for code in [":joy:", ":fire:", ":joy:", ":joy:"] {
        client.vote(code).await.assert_status(StatusCode::NO_CONTENT);
    }

    assert_eq!(
        leaderboard(&client).await,
        vec![VoteCount::new(":joy:", 3), VoteCount::new(":fire:", 1)]
    );
}

#[tokio::test]
async fn leaderboard_uses_wire_field_names() {
    let client = client();
    client.vote(":tada:").await;

    let body: serde_json::Value = client.get("/leaderboard").await.json();

    assert_eq!(body[0]["shortcode"], ":tada:");
    assert_eq!(body[0]["votes"], 1);
}

#[tokio::test]
async fn tied_codes_are_ordered_by_code() {
    let client = client();

    for code in [":pizza:", ":beer:", ":pizza:", ":beer:"] {
        client.vote(code).await;
    }

    let codes: Vec<String> = leaderboard(&client)
        .await
        .into_iter()
        .map(|c| c.code)
        .collect();
    assert_eq!(codes, vec![":beer:", ":pizza:"]);
}

#[tokio::test]
async fn empty_shortcode_is_rejected() {
    let client = client();

    let response = client.vote("").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(leaderboard(&client).await.is_empty());
}

#[tokio::test]
async fn unknown_shortcode_is_not_counted() {
    let client = client();

    client.vote(":nope:").await.assert_status(StatusCode::NOT_FOUND);
    assert!(leaderboard(&client).await.is_empty());
}

#[tokio::test]
async fn malformed_body_is_a_client_error() {
    let response = client()
        .post_json("/votes", serde_json::json!({ "emoji": ":joy:" }))
        .await;

    assert!(response.status.is_client_error());
}

#[tokio::test]
async fn votes_through_sqlite_backend() {
    let dir = tempfile::tempdir().unwrap();
    let backend = SqliteTally::bootstrap(dir.path().join("votes.db")).unwrap();
    let state = AppState::new(
        VoteTally::new(Arc::new(backend)),
        ItemDirectory::uncached(Arc::new(ItemCatalog::standard())),
    );
    let client = client_with_state(state);

    client.vote(":fire:").await.assert_status(StatusCode::NO_CONTENT);
    client.vote(":fire:").await.assert_status(StatusCode::NO_CONTENT);

    assert_eq!(leaderboard(&client).await, vec![VoteCount::new(":fire:", 2)]);
}

#[tokio::test]
async fn concurrent_votes_are_all_counted() {
    let client = Arc::new(client());

    let mut handles = Vec::new();
    for _ in 0..40 {
        let client = Arc::clone(&client);
        handles.push(tokio::spawn(async move {
            client.vote(":rocket:").await.status
        }));
    }

    for handle in handles {
        assert_eq!(handle.await.unwrap(), StatusCode::NO_CONTENT);
    }

    assert_eq!(
        leaderboard(&client).await,
        vec![VoteCount::new(":rocket:", 40)]
    );
}

#[tokio::test]
async fn vote_fails_with_500_when_storage_is_down() {
    let backend = Arc::new(DownTally::default());
    let client = client_with_down_tally(Arc::clone(&backend));

    let response = client.vote(":joy:").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Internal Server Error");
    assert_eq!(body["message"], "tally backend unavailable: down");
    assert_eq!(backend.increments.load(Ordering::Relaxed), 1);
}

#[tokio::test]
async fn leaderboard_fails_with_500_when_storage_is_down() {
    let client = client_with_down_tally(Arc::new(DownTally::default()));

    let response = client.get("/leaderboard").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Internal Server Error");
    assert_eq!(body["message"], "tally backend unavailable: down");
}

#[tokio::test]
async fn unknown_shortcode_never_reaches_storage() {
    let backend = Arc::new(DownTally::default());
    let client = client_with_down_tally(Arc::clone(&backend));

    client.vote(":nope:").await.assert_status(StatusCode::NOT_FOUND);
    client.vote("").await.assert_status(StatusCode::BAD_REQUEST);

    assert_eq!(backend.increments.load(Ordering::Relaxed), 0);
}
