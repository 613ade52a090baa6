//! Remote resource client.
//!
//! [`ResourceClient`] is the one seam between the console and the maestro
//! API. It reads a resource and sends merge-patches to it; nothing else.
//! There is no retry and no caching, and each call issues exactly one
//! request. Callers sequence repeated calls themselves.

use std::time::Duration;

use reqwest::header::{HeaderValue, ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use maestro_core::prelude::*;

use crate::fixture::FixtureResourceClient;
use crate::paths::ResourcePath;

/// Content type of PATCH bodies.
pub const MERGE_PATCH_CONTENT_TYPE: &str = "application/merge-patch+json";

/// Read and patch resources on the maestro API.
///
/// Failures are classified as [`Error::Transport`], [`Error::HttpStatus`] or
/// [`Error::Parse`] so the calling view can tell them apart.
#[trait_variant::make(ResourceClient: Send)]
pub trait LocalResourceClient {
    /// `GET` the resource and parse the body as `T`.
    async fn fetch<T>(&self, path: &ResourcePath) -> Result<T>
    where
        T: DeserializeOwned + Send + 'static;

    /// `PATCH` the resource with a partial document and parse the updated
    /// resource from the response body.
    async fn update<P, T>(&self, path: &ResourcePath, patch: &P) -> Result<T>
    where
        P: Serialize + Sync,
        T: DeserializeOwned + Send + 'static;
}

// ─────────────────────────────────────────────────────────────────────────────
// HTTP
// ─────────────────────────────────────────────────────────────────────────────

/// [`ResourceClient`] backed by reqwest.
#[derive(Debug, Clone)]
pub struct HttpResourceClient {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpResourceClient {
    /// Create a client for the API at `base_url` (e.g. `http://localhost:8080`).
    ///
    /// `timeout` of `None` waits indefinitely.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| Error::config(format!("Invalid API base URL '{base_url}': {e}")))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(Error::config(format!(
                "API base URL must be http or https, got '{}'",
                base_url.scheme()
            )));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Full request URL for a resource.
    ///
    /// The resource path is appended to the base URL as-is so a base with a
    /// path prefix (`http://host/api`) keeps its prefix.
    pub fn url_for(&self, path: &ResourcePath) -> Result<Url> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let full = format!("{base}{}", path.to_url_path());
        Url::parse(&full).map_err(|e| Error::config(format!("Invalid request URL '{full}': {e}")))
    }
}

impl ResourceClient for HttpResourceClient {
    async fn fetch<T>(&self, path: &ResourcePath) -> Result<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let url = self.url_for(path)?;
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .send()
            .await
            .map_err(transport_error)?;

        read_response(path, response).await
    }

    async fn update<P, T>(&self, path: &ResourcePath, patch: &P) -> Result<T>
    where
        P: Serialize + Sync,
        T: DeserializeOwned + Send + 'static,
    {
        let url = self.url_for(path)?;
        let body = serde_json::to_vec(patch)?;
        debug!("PATCH {} {}", url, String::from_utf8_lossy(&body));

        let response = self
            .client
            .patch(url)
            .header(CONTENT_TYPE, HeaderValue::from_static(MERGE_PATCH_CONTENT_TYPE))
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .body(body)
            .send()
            .await
            .map_err(transport_error)?;

        read_response(path, response).await
    }
}

fn transport_error(err: reqwest::Error) -> Error {
    if err.is_timeout() {
        Error::transport(format!("request timed out: {err}"))
    } else {
        Error::transport(err.to_string())
    }
}

/// Turn a response into a parsed record or a classified failure.
async fn read_response<T: DeserializeOwned>(
    path: &ResourcePath,
    response: reqwest::Response,
) -> Result<T> {
    let status = response.status();
    let body = response.text().await.map_err(transport_error)?;

    if !status.is_success() {
        warn!("{} answered HTTP {}: {}", path, status.as_u16(), body.trim());
        return Err(Error::http_status(status.as_u16(), body.trim()));
    }

    serde_json::from_str(&body).map_err(|e| {
        warn!("{} returned a malformed body: {}", path, e);
        Error::parse(e.to_string())
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// ApiClient
// ─────────────────────────────────────────────────────────────────────────────

/// The client the console runs with: live HTTP, or the in-memory fixture for
/// demo mode. Chosen once from configuration.
#[derive(Debug)]
pub enum ApiClient {
    Http(HttpResourceClient),
    Fixture(FixtureResourceClient),
}

impl ApiClient {
    pub fn is_fixture(&self) -> bool {
        matches!(self, ApiClient::Fixture(_))
    }

    /// Short description for the status bar.
    pub fn describe(&self) -> String {
        match self {
            ApiClient::Http(client) => client.base_url().to_string(),
            ApiClient::Fixture(_) => "demo fixture".to_string(),
        }
    }
}

impl ResourceClient for ApiClient {
    async fn fetch<T>(&self, path: &ResourcePath) -> Result<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        match self {
            ApiClient::Http(client) => ResourceClient::fetch(client, path).await,
            ApiClient::Fixture(client) => ResourceClient::fetch(client, path).await,
        }
    }

    async fn update<P, T>(&self, path: &ResourcePath, patch: &P) -> Result<T>
    where
        P: Serialize + Sync,
        T: DeserializeOwned + Send + 'static,
    {
        match self {
            ApiClient::Http(client) => ResourceClient::update(client, path, patch).await,
            ApiClient::Fixture(client) => ResourceClient::update(client, path, patch).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_unparseable_base_url() {
        let err = HttpResourceClient::new("not a url", None).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let err = HttpResourceClient::new("ftp://example.com", None).unwrap_err();
        assert!(err.to_string().contains("http or https"));
    }

    #[test]
    fn test_url_for_appends_resource_path() {
        let client = HttpResourceClient::new("http://localhost:8080", None).unwrap();
        assert_eq!(
            client.url_for(&ResourcePath::domains()).unwrap().as_str(),
            "http://localhost:8080/domains/"
        );
        assert_eq!(
            client
                .url_for(&ResourcePath::process("L21h/+"))
                .unwrap()
                .as_str(),
            "http://localhost:8080/processes/L21h%2F%2B"
        );
    }

    #[test]
    fn test_url_for_keeps_base_path_prefix() {
        let client = HttpResourceClient::new("http://host/api/", None).unwrap();
        assert_eq!(
            client.url_for(&ResourcePath::domain("k")).unwrap().as_str(),
            "http://host/api/domains/k"
        );
    }

    #[test]
    fn test_api_client_describe() {
        let http = ApiClient::Http(HttpResourceClient::new("http://h:8080", None).unwrap());
        assert_eq!(http.describe(), "http://h:8080/");
        assert!(!http.is_fixture());

        let fixture = ApiClient::Fixture(FixtureResourceClient::demo());
        assert!(fixture.is_fixture());
    }
}
