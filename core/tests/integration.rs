//! Full lifecycle test against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives every operation
//! through `MessageApi` over real HTTP. The listener is bound before the
//! server task is spawned, so requests issued right away queue in the
//! accept backlog instead of racing the server startup. The
//! declared-but-unwired operations are pinned too: a request to their
//! undefined routes would surface as `NotFound` or `HttpError`, so getting
//! `Unsupported` back proves the server never saw a request.

use board_core::{ApiConfig, ApiError, MessageApi};

async fn spawn_server() -> MessageApi {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        mock_server::run(listener).await.unwrap();
    });
    MessageApi::new(ApiConfig::new(&format!("http://{addr}")))
}

#[tokio::test]
async fn message_lifecycle() {
    let api = spawn_server().await;

    // Step 1: list — empty board.
    let list = api.list_messages().await.unwrap();
    assert!(list.messages.is_empty(), "expected empty board");

    // Step 2: create two messages.
    let first = api.create_message("hello").await.unwrap();
    assert_eq!(first.content, "hello");
    assert_eq!(first.score, 0);
    let second = api.create_message("world").await.unwrap();
    assert_ne!(first.id, second.id);

    // Step 3: list — both, in creation order.
    let list = api.list_messages().await.unwrap();
    assert_eq!(list.messages.len(), 2);
    assert_eq!(list.messages[0], first);
    assert_eq!(list.messages[1], second);

    // Step 4: delete the first — resolves to the removed record.
    let removed = api.delete_message(first.id).await.unwrap();
    assert_eq!(removed, first);

    // Step 5: delete the same id again — NotFound.
    let err = api.delete_message(first.id).await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound));

    // Step 6: list — only the second remains.
    let list = api.list_messages().await.unwrap();
    assert_eq!(list.messages.len(), 1);
    assert_eq!(list.messages[0], second);
}

#[tokio::test]
async fn every_list_call_issues_a_fresh_request() {
    let api = spawn_server().await;

    let before = api.list_messages().await.unwrap();
    assert!(before.messages.is_empty());

    api.create_message("first").await.unwrap();

    // No caching: the second list reflects the server-side mutation.
    let after = api.list_messages().await.unwrap();
    assert_eq!(after.messages.len(), 1);
    assert_eq!(after.messages[0].content, "first");
}

#[tokio::test]
async fn concurrent_creates_are_independent() {
    let api = spawn_server().await;

    let (a, b) = tokio::join!(api.create_message("a"), api.create_message("b"));
    let (a, b) = (a.unwrap(), b.unwrap());
    assert_ne!(a.id, b.id);

    // Both landed, whichever finished first.
    let list = api.list_messages().await.unwrap();
    assert_eq!(list.messages.len(), 2);
}

#[tokio::test]
async fn unwired_operations_never_reach_the_server() {
    let api = spawn_server().await;

    let err = api.upvote_message(1).await.unwrap_err();
    assert!(matches!(
        err,
        ApiError::Unsupported {
            operation: "upvote_message"
        }
    ));

    let err = api.downvote_message(1).await.unwrap_err();
    assert!(matches!(
        err,
        ApiError::Unsupported {
            operation: "downvote_message"
        }
    ));

    let err = api.sign_in("user", "secret").await.unwrap_err();
    assert!(matches!(err, ApiError::Unsupported { operation: "sign_in" }));

    let err = api.me().await.unwrap_err();
    assert!(matches!(err, ApiError::Unsupported { operation: "me" }));

    // Server state is untouched.
    let list = api.list_messages().await.unwrap();
    assert!(list.messages.is_empty());
}
