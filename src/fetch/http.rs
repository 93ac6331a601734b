// src/fetch/http.rs
// =============================================================================
// Downloads pages over HTTP.
//
// Key functionality:
// - One GET per address, body read as text (every page is treated as HTML)
// - Non-2xx responses are errors, not content
// - reqwest errors are sorted into timeout / connection / other
//
// The crawler never talks to reqwest directly. It only sees the Fetcher
// trait, so tests can swap in an in-memory site.
// =============================================================================

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

/// Why a page could not be downloaded
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered, but not with a 2xx status
    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    /// No answer within the configured timeout
    #[error("request to {url} timed out")]
    Timeout { url: String },

    /// DNS failure, refused connection, TLS handshake failure...
    #[error("could not connect to {url}: {source}")]
    Connect {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Anything else reqwest reports (bad body encoding, redirect loop...)
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    /// The address the failed request was made for
    pub fn url(&self) -> &str {
        match self {
            FetchError::Status { url, .. }
            | FetchError::Timeout { url }
            | FetchError::Connect { url, .. }
            | FetchError::Request { url, .. } => url,
        }
    }
}

/// Something that can turn an address into page text
///
/// The crawler is generic over this so it can run against the network
/// or against a fixed set of pages in tests.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, address: &str) -> Result<String, FetchError>;
}

/// The real network fetcher
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    // Builds one client and reuses it for every request (connection pooling)
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, address: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(address)
            .send()
            .await
            .map_err(|e| categorize_error(address, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: address.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| categorize_error(address, e))
    }
}

// Sorts a reqwest error into one of our variants
fn categorize_error(url: &str, error: reqwest::Error) -> FetchError {
    let url = url.to_string();

    if error.is_timeout() {
        FetchError::Timeout { url }
    } else if error.is_connect() {
        FetchError::Connect { url, source: error }
    } else {
        FetchError::Request { url, source: error }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does #[async_trait] do?
//    - Trait methods returning futures need a boxed return type to be usable
//      behind generics and trait objects
//    - The macro rewrites `async fn` into a method returning
//      Pin<Box<dyn Future + Send>> for us
//
// 2. Why #[source] on the reqwest error?
//    - thiserror wires it into std::error::Error::source()
//    - anyhow then prints the whole chain ("caused by: ...")
//
// 3. Why is a 404 an error here?
//    - An error page is not the page we asked for
//    - Returning Err keeps it out of the cache and out of link extraction
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn fetcher() -> HttpFetcher {
        HttpFetcher::new("domain-crawler-test", Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_returns_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/page")
            .with_status(200)
            .with_header("content-type", "text/html; charset=utf-8")
            .with_body("<a href=\"/next\">next</a>")
            .create_async()
            .await;

        let url = format!("{}/page", server.url());
        let body = fetcher().fetch(&url).await.unwrap();

        assert_eq!(body, "<a href=\"/next\">next</a>");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/missing")
            .with_status(404)
            .with_body("Not Found")
            .create_async()
            .await;

        let url = format!("{}/missing", server.url());
        let err = fetcher().fetch(&url).await.unwrap_err();

        match &err {
            FetchError::Status { status, .. } => assert_eq!(*status, 404),
            other => panic!("expected a status error, got {other:?}"),
        }
        assert_eq!(err.url(), url);
    }

    #[tokio::test]
    async fn test_server_error_is_an_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/")
            .with_status(500)
            .create_async()
            .await;

        let url = format!("{}/", server.url());
        let err = fetcher().fetch(&url).await.unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_sends_configured_user_agent() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/")
            .match_header("user-agent", "domain-crawler-test")
            .with_status(200)
            .with_body("ok")
            .create_async()
            .await;

        let url = format!("{}/", server.url());
        fetcher().fetch(&url).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_unreachable_host_is_an_error() {
        // Port 9 (discard) on localhost is almost never listening
        let err = fetcher().fetch("http://127.0.0.1:9/").await.unwrap_err();
        assert_eq!(err.url(), "http://127.0.0.1:9/");
    }
}
