//! HTTP client wrapper - downloads the collection and executes requests
//!
//! One shared client serves the whole session. Requests are issued one at
//! a time; the caller never overlaps calls.

use anyhow::{anyhow, Result};
use thiserror::Error;

use crate::models::{Collection, Request, Response};

/// Failures while downloading the collection document.
///
/// The startup path branches on these: an empty body and a parse failure
/// get their own messages, and all three abort the session.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure (DNS, connect, TLS, HTTP error status).
    #[error("{0}")]
    Network(String),
    /// The server answered but the body was empty.
    #[error("collection response is empty")]
    Empty,
    /// The body was not a valid collection document.
    #[error("invalid collection JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Create the shared HTTP client. No explicit timeout: the executor
/// contract is transport defaults only, with no retries.
pub fn create_client() -> reqwest::Client {
    reqwest::Client::builder()
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

/// Download and parse the collection document. One GET, no retries.
pub async fn fetch_collection(
    client: &reqwest::Client,
    url: &str,
) -> Result<Collection, FetchError> {
    tracing::info!(url, "Downloading collection");

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| FetchError::Network(transport_message(&e)))?
        .error_for_status()
        .map_err(|e| FetchError::Network(format!("Request failed: {e}")))?;

    let body = response
        .text()
        .await
        .map_err(|e| FetchError::Network(format!("Error reading body: {e}")))?;

    if body.is_empty() {
        return Err(FetchError::Empty);
    }

    let collection: Collection = serde_json::from_str(&body)?;
    tracing::info!(items = collection.item.len(), "Collection received");
    Ok(collection)
}

/// Execute a single request and capture status plus the full body.
///
/// Only the method and the raw URL go on the wire; the body is read
/// entirely into memory.
pub async fn execute_request(client: &reqwest::Client, request: &Request) -> Result<Response> {
    let method = reqwest::Method::from_bytes(request.method.as_bytes())
        .map_err(|_| anyhow!("invalid HTTP method: {:?}", request.method))?;

    tracing::info!(method = %method, url = %request.url.raw, "Executing request");

    let response = client
        .request(method, &request.url.raw)
        .send()
        .await
        .map_err(|e| anyhow!(transport_message(&e)))?;

    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .map_err(|e| anyhow!("Error reading body: {e}"))?;

    tracing::info!(status, "Request completed");
    Ok(Response { status, body })
}

fn transport_message(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        "Request timed out".to_string()
    } else if e.is_connect() {
        format!("Connection failed: {e}")
    } else {
        format!("Request failed: {e}")
    }
}
