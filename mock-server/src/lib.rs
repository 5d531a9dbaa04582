use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,
    pub content: String,
    #[serde(default)]
    pub score: i64,
}

#[derive(Deserialize)]
pub struct CreateMessage {
    pub content: String,
}

#[derive(Serialize, Deserialize)]
pub struct MessageList {
    pub messages: Vec<Message>,
}

/// In-memory board: messages in insertion order plus the next id to hand
/// out. Ids are never reused within a server's lifetime.
#[derive(Default)]
pub struct Board {
    next_id: i64,
    messages: Vec<Message>,
}

pub type Db = Arc<RwLock<Board>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Board::default()));
    Router::new()
        .route("/api/messages", get(list_messages).post(create_message))
        .route("/api/messages/{id}", delete(delete_message))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_messages(State(db): State<Db>) -> Json<MessageList> {
    let board = db.read().await;
    Json(MessageList {
        messages: board.messages.clone(),
    })
}

async fn create_message(
    State(db): State<Db>,
    Json(input): Json<CreateMessage>,
) -> (StatusCode, Json<Message>) {
    let mut board = db.write().await;
    board.next_id += 1;
    let message = Message {
        id: board.next_id,
        content: input.content,
        score: 0,
    };
    board.messages.push(message.clone());
    (StatusCode::CREATED, Json(message))
}

async fn delete_message(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<Message>, StatusCode> {
    let mut board = db.write().await;
    let index = board
        .messages
        .iter()
        .position(|m| m.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(board.messages.remove(index)))
}
