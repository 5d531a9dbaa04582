//! Asynchronous front door for the message-board API.
//!
//! # Design
//! `MessageApi` pairs the deterministic contract layer (`MessageClient`)
//! with a `reqwest` transport: each wired operation builds an `HttpRequest`,
//! executes it, and parses the resulting `HttpResponse`. Every method
//! returns a lazy future — nothing is sent until the caller awaits it, and
//! dropping the future before completion aborts the in-flight request at
//! the transport. Operations are independent one-shot calls with no retries
//! or caching; concurrent calls complete in whatever order the server
//! answers.
//!
//! The vote and auth methods are declared but have no wire contract yet.
//! They issue no request and resolve to `ApiError::Unsupported`, so callers
//! can detect the gap programmatically instead of watching nothing happen.

use crate::client::MessageClient;
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateMessage, Message, MessageList};

/// Asynchronous client for the message-board API.
///
/// Holds the base-endpoint configuration fixed at construction and a pooled
/// `reqwest::Client`; no other state. Clones are cheap and share the
/// connection pool.
#[derive(Debug, Clone)]
pub struct MessageApi {
    client: MessageClient,
    http: reqwest::Client,
}

impl MessageApi {
    /// Build a client against an explicitly injected endpoint.
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: MessageClient::new(&config.endpoint),
            http: reqwest::Client::new(),
        }
    }

    /// Build a client against the environment-resolved endpoint (see
    /// `ApiConfig::from_env`).
    pub fn from_env() -> Self {
        Self::new(ApiConfig::from_env())
    }

    /// POST the content as a new message and resolve to the server's record
    /// of it, id assigned. The content travels verbatim; validating it is
    /// the server's job.
    pub async fn create_message(&self, content: &str) -> Result<Message, ApiError> {
        let input = CreateMessage {
            content: content.to_string(),
        };
        let request = self.client.build_create_message(&input)?;
        let response = self.execute(request).await?;
        self.client.parse_create_message(response)
    }

    /// DELETE the message with the given id and resolve to the server's
    /// record of the removed message. An unknown id surfaces as
    /// `ApiError::NotFound`; existence is never pre-checked here.
    pub async fn delete_message(&self, message_id: i64) -> Result<Message, ApiError> {
        let request = self.client.build_delete_message(message_id);
        let response = self.execute(request).await?;
        self.client.parse_delete_message(response)
    }

    /// GET every message, in the server's order. Each call issues a fresh
    /// request; nothing is cached between calls.
    pub async fn list_messages(&self) -> Result<MessageList, ApiError> {
        let request = self.client.build_list_messages();
        let response = self.execute(request).await?;
        self.client.parse_list_messages(response)
    }

    /// Declared vote operation without a wire contract: resolves to
    /// `ApiError::Unsupported` and issues no request. The `Message` success
    /// type records the intended shape — the server bumps the score and
    /// returns the updated record — for when the endpoint gets defined.
    pub async fn upvote_message(&self, _message_id: i64) -> Result<Message, ApiError> {
        Err(unsupported("upvote_message"))
    }

    /// Counterpart of `upvote_message`; same status, same contract gap.
    pub async fn downvote_message(&self, _message_id: i64) -> Result<Message, ApiError> {
        Err(unsupported("downvote_message"))
    }

    /// Declared auth operation without a wire contract: resolves to
    /// `ApiError::Unsupported` and issues no request. Neither the request
    /// shape nor the session representation is defined, so the success type
    /// stays `()` until they are.
    pub async fn sign_in(&self, _username: &str, _password: &str) -> Result<(), ApiError> {
        Err(unsupported("sign_in"))
    }

    /// Same status as `sign_in`.
    pub async fn sign_up(&self, _username: &str, _password: &str) -> Result<(), ApiError> {
        Err(unsupported("sign_up"))
    }

    /// Same status as `sign_in`.
    pub async fn sign_out(&self) -> Result<(), ApiError> {
        Err(unsupported("sign_out"))
    }

    /// Same status as `sign_in`; the current-user payload is undefined.
    pub async fn me(&self) -> Result<(), ApiError> {
        Err(unsupported("me"))
    }

    /// Carry an `HttpRequest` over the wire and fold the outcome back into
    /// an `HttpResponse` for the contract layer. Transport failures surface
    /// as `ApiError::Transport`; status interpretation stays in `parse_*`.
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        log::debug!("{:?} {}", request.method, request.path);

        let mut builder = match request.method {
            HttpMethod::Get => self.http.get(&request.path),
            HttpMethod::Post => self.http.post(&request.path),
            HttpMethod::Delete => self.http.delete(&request.path),
        };
        for (key, value) in &request.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body,
        })
    }
}

/// The declared-but-unwired operations all fail the same way: before any
/// request exists, with the operation name attached.
fn unsupported(operation: &'static str) -> ApiError {
    log::debug!("{operation} has no wire contract yet, failing without a request");
    ApiError::Unsupported { operation }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Closed local port: an operation that actually touched the network
    /// would come back as `Transport`, not `Unsupported`.
    fn api() -> MessageApi {
        MessageApi::new(ApiConfig::new("http://127.0.0.1:9"))
    }

    #[tokio::test]
    async fn vote_operations_fail_loudly_without_a_request() {
        let err = api().upvote_message(1).await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::Unsupported {
                operation: "upvote_message"
            }
        ));

        let err = api().downvote_message(1).await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::Unsupported {
                operation: "downvote_message"
            }
        ));
    }

    #[tokio::test]
    async fn auth_operations_fail_loudly_without_a_request() {
        let api = api();
        assert!(matches!(
            api.sign_in("user", "secret").await.unwrap_err(),
            ApiError::Unsupported { operation: "sign_in" }
        ));
        assert!(matches!(
            api.sign_up("user", "secret").await.unwrap_err(),
            ApiError::Unsupported { operation: "sign_up" }
        ));
        assert!(matches!(
            api.sign_out().await.unwrap_err(),
            ApiError::Unsupported { operation: "sign_out" }
        ));
        assert!(matches!(
            api.me().await.unwrap_err(),
            ApiError::Unsupported { operation: "me" }
        ));
    }

    #[tokio::test]
    async fn wired_operations_surface_transport_failures() {
        let err = api().list_messages().await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }
}
