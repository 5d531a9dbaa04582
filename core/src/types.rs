//! Domain DTOs for the message-board API.
//!
//! # Design
//! These types mirror the server's wire schema but are defined independently
//! of the mock-server crate; integration tests catch any schema drift
//! between the two. A draft that has not been created yet is a
//! `CreateMessage` — only the server hands out ids, so every `Message` a
//! caller sees is a persisted one.

use serde::{Deserialize, Serialize};

/// A single persisted message returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    pub id: i64,
    pub content: String,
    /// Vote tally, maintained entirely server-side. Servers that predate
    /// the vote feature omit the field; it defaults to zero.
    #[serde(default)]
    pub score: i64,
}

/// Request payload for creating a new message. The content travels verbatim;
/// emptiness checks are the server's to make.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMessage {
    pub content: String,
}

/// Response wrapper for the list operation. `messages` holds exactly the
/// sequence the server returned, in the server's order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageList {
    pub messages: Vec<Message>,
}
