//! Stateless HTTP request builder and response parser for the message-board
//! API.
//!
//! # Design
//! `MessageClient` holds only a `base_url` and carries no mutable state
//! between calls. Each wired operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. The HTTP round-trip happens outside this module, keeping
//! the request/response contract deterministic and free of I/O dependencies.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateMessage, Message, MessageList};

/// Stateless contract layer for the message-board API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. `MessageApi` executes the round-trip between
/// `build_*` and `parse_*`; callers bringing their own transport can do the
/// same.
#[derive(Debug, Clone)]
pub struct MessageClient {
    base_url: String,
}

impl MessageClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_create_message(&self, input: &CreateMessage) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/api/messages", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_delete_message(&self, message_id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/api/messages/{message_id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_list_messages(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/api/messages", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_create_message(&self, response: HttpResponse) -> Result<Message, ApiError> {
        check_success(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    /// The server confirms a delete by returning the removed record.
    pub fn parse_delete_message(&self, response: HttpResponse) -> Result<Message, ApiError> {
        check_success(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    pub fn parse_list_messages(&self, response: HttpResponse) -> Result<MessageList, ApiError> {
        check_success(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }
}

/// Map non-2xx status codes to the appropriate `ApiError` variant. Any 2xx
/// counts as success; which one the server picks (200 vs 201) is not part
/// of this client's contract.
fn check_success(response: &HttpResponse) -> Result<(), ApiError> {
    if (200..300).contains(&response.status) {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
