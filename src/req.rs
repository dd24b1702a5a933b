use reqwest::{Client, Response};
use std::time::Duration;
use tracing::warn;

use crate::{prelude::*, Error};

/// HTTP status codes that indicate transient server errors (retryable)
const RETRYABLE_STATUS_CODES: &[u16] = &[502, 503, 504];

/// Maximum number of retry attempts for transient errors
const MAX_RETRIES: u32 = 3;

/// Initial backoff delay in milliseconds (doubles with each retry)
const INITIAL_BACKOFF_MS: u64 = 100;

/// Per-request timeout applied when no custom client is supplied
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug)]
pub struct HttpClient {
    pub client: Client,
    pub base_url: String,
}

async fn parse_response(url_path: &str, response: Response) -> Result<String> {
    let status_code = response.status().as_u16();
    let text = response
        .text()
        .await
        .map_err(|e| Error::Network(e.to_string()))?;

    if status_code < 400 {
        return Ok(text);
    }
    if status_code == 404 {
        return Err(Error::not_found(url_path));
    }
    if (400..500).contains(&status_code) {
        return Err(Error::ClientRequest {
            status_code,
            error_message: text,
        });
    }

    Err(Error::ServerRequest {
        status_code,
        error_message: text,
    })
}

impl HttpClient {
    /// Build a client for the given base URL.
    ///
    /// When no reqwest client is supplied, one is created with a request
    /// timeout so a stalled connection surfaces as `Error::Network` instead
    /// of hanging the caller.
    pub fn new(client: Option<Client>, base_url: String) -> Result<Self> {
        let client = match client {
            Some(client) => client,
            None => Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .map_err(|e| Error::GenericRequest(e.to_string()))?,
        };
        Ok(Self { client, base_url })
    }

    /// Send a GET request with automatic retry for transient server errors
    /// (502, 503, 504).
    ///
    /// Uses exponential backoff: 100ms, 200ms, 400ms between retries.
    /// This handles transient errors from load balancers and server restarts.
    pub async fn get(&self, url_path: &str, query: &[(&str, String)]) -> Result<String> {
        let full_url = format!("{}{url_path}", self.base_url);

        for attempt in 0..=MAX_RETRIES {
            let request = self
                .client
                .get(&full_url)
                .query(query)
                .build()
                .map_err(|e| Error::GenericRequest(e.to_string()))?;

            let result = self.client.execute(request).await.map_err(|e| {
                if e.is_timeout() || e.is_connect() || e.is_request() {
                    Error::Network(e.to_string())
                } else {
                    Error::GenericRequest(e.to_string())
                }
            })?;

            let status = result.status().as_u16();

            // Check if this is a retryable error
            if RETRYABLE_STATUS_CODES.contains(&status) && attempt < MAX_RETRIES {
                let backoff = Duration::from_millis(INITIAL_BACKOFF_MS * 2u64.pow(attempt));
                warn!(
                    status = status,
                    attempt = attempt + 1,
                    max_attempts = MAX_RETRIES + 1,
                    backoff_ms = backoff.as_millis() as u64,
                    url = %url_path,
                    "Retryable HTTP error, backing off"
                );
                tokio::time::sleep(backoff).await;
                continue;
            }

            return parse_response(url_path, result).await;
        }

        // This should never be reached due to the loop structure,
        // but return a clear error if it somehow is
        Err(Error::GenericRequest(format!(
            "Max retries ({MAX_RETRIES}) exceeded for {url_path}"
        )))
    }
}
