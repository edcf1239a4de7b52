//! HTTP adapters for the catalog document and the assistant proxy.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning a transport error, since these endpoints
//! are only reachable from the browser. Native callers use
//! `routine_builder::transport::HttpTransport` instead.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as the core crate's typed errors so the controller
//! renders them (empty grid, transcript error line) instead of panicking.
//! The assistant call is raced against a `gloo-timers` timeout.

#![allow(clippy::unused_async)]

use routine_builder::conversation::Message;
use routine_builder::{AppConfig, AssistantTransport, CatalogLoadError, CatalogSource, ChatError, Product};

#[cfg(not(feature = "csr"))]
use routine_builder::TransportError;

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(not(feature = "csr"))]
const BROWSER_ONLY: &str = "not available outside the browser";

// =============================================================================
// CATALOG
// =============================================================================

/// Fetches the catalog document on every load; nothing is cached.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    url: String,
}

impl HttpCatalog {
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        Self { url: config.catalog_url.clone() }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait::async_trait(?Send)]
impl CatalogSource for HttpCatalog {
    async fn load(&self) -> Result<Vec<Product>, CatalogLoadError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(&self.url)
                .send()
                .await
                .map_err(|e| CatalogLoadError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(CatalogLoadError::Transport(format!("catalog request failed: {}", resp.status())));
            }
            let text = resp
                .text()
                .await
                .map_err(|e| CatalogLoadError::Transport(e.to_string()))?;
            routine_builder::catalog::parse_catalog(&text)
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(CatalogLoadError::Transport(BROWSER_ONLY.to_owned()))
        }
    }
}

// =============================================================================
// ASSISTANT
// =============================================================================

/// POSTs the conversation to the assistant proxy with a request timeout.
#[derive(Debug, Clone)]
pub struct BrowserTransport {
    endpoint: String,
    timeout_secs: u64,
}

impl BrowserTransport {
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        Self { endpoint: config.assistant_url.clone(), timeout_secs: config.request_timeout_secs }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    #[must_use]
    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }
}

#[cfg(feature = "csr")]
async fn post_json(endpoint: &str, body: String) -> Result<(u16, String), gloo_net::Error> {
    let resp = gloo_net::http::Request::post(endpoint)
        .header("Content-Type", "application/json")
        .body(body)?
        .send()
        .await?;
    let status = resp.status();
    let text = resp.text().await?;
    Ok((status, text))
}

#[async_trait::async_trait(?Send)]
impl AssistantTransport for BrowserTransport {
    async fn send_conversation(&self, messages: &[Message]) -> Result<String, ChatError> {
        #[cfg(feature = "csr")]
        {
            use futures::future::{Either, select};
            use routine_builder::TransportError;

            let body = routine_builder::transport::request_body(messages)?;
            log::debug!("assistant: sending {} messages to {}", messages.len(), self.endpoint);

            let millis = u32::try_from(self.timeout_secs.saturating_mul(1000)).unwrap_or(u32::MAX);
            let request = Box::pin(post_json(&self.endpoint, body));
            let timeout = gloo_timers::future::TimeoutFuture::new(millis);

            let (status, text) = match select(request, timeout).await {
                Either::Left((result, _)) => result.map_err(|e| TransportError::Network(e.to_string()))?,
                Either::Right(((), _)) => {
                    log::warn!("assistant: request timed out after {}s", self.timeout_secs);
                    return Err(TransportError::Timeout { secs: self.timeout_secs }.into());
                }
            };
            if !(200..300).contains(&status) {
                return Err(TransportError::Status { status, body: text }.into());
            }
            routine_builder::transport::parse_reply(&text)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = messages;
            Err(TransportError::Network(BROWSER_ONLY.to_owned()).into())
        }
    }
}
