//! Asynchronous API client core for the message-board service.
//!
//! # Overview
//! A pass-through binding from typed method calls to HTTP verbs and JSON
//! bodies: create, delete, and list messages against one configured base
//! endpoint, plus the declared-but-unwired vote and auth surface. There is
//! no server logic here and no state beyond the endpoint — every call is an
//! independent one-shot request.
//!
//! # Design
//! - `MessageClient` is the deterministic contract layer: `build_*` produces
//!   a request, `parse_*` consumes a response, and the I/O boundary between
//!   them is explicit plain data.
//! - `MessageApi` is the async surface: a `reqwest` executor folded over the
//!   contract layer. Futures are lazy; dropping one cancels the in-flight
//!   request.
//! - Operations without a wire contract fail loudly with
//!   `ApiError::Unsupported` instead of succeeding as silent no-ops.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod types;

pub use api::MessageApi;
pub use client::MessageClient;
pub use config::ApiConfig;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{CreateMessage, Message, MessageList};
