//! HTTP transport types for the build/execute/parse split.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The
//! contract layer builds `HttpRequest` values and parses `HttpResponse`
//! values without ever touching the network; the executor inside
//! `MessageApi` performs the actual I/O between the two. Keeping the
//! boundary as data keeps the contract layer deterministic and testable
//! without a socket, and lets callers with their own transport drive the
//! same build/parse pairs.
//!
//! All fields use owned types (`String`, `Vec`) so a request can move into
//! an executor without borrowing from the client.

/// HTTP method for a request. Only the verbs the wired surface uses are
/// declared; undefined endpoints get no verb until their contract exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by `MessageClient::build_*` methods. The executor carries this to
/// the network and returns the corresponding `HttpResponse`.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Constructed by the executor after performing an `HttpRequest`, then
/// passed to `MessageClient::parse_*` methods for deserialization.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
