use crate::error::{Error, Result};
use async_trait::async_trait;
use indexmap::IndexMap;
use std::future::Future;

/// Trait for retrieving raw template resources.
///
/// Implementations receive the full resource identifier (a path or URL) and
/// return the whole response. The view engine never retries or caches; a
/// caller wanting timeouts or retries wraps its own fetch.
#[async_trait]
pub trait Fetch: Send + Sync {
    /// Fetches the resource at `input`.
    ///
    /// # Arguments
    /// * `input` - Path or URL of the resource
    /// * `init` - Optional request settings (method, headers)
    ///
    /// # Returns
    /// * `Result<FetchResponse>` - The response, or a `RetrievalError`
    async fn fetch(&self, input: &str, init: Option<&RequestInit>) -> Result<FetchResponse>;
}

/// Request settings passed alongside a fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestInit {
    /// HTTP method; `GET` when unset.
    pub method: Option<String>,
    pub headers: IndexMap<String, String>,
}

impl RequestInit {
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// A fetched resource with its body fully read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    url: String,
    status: u16,
    body: Vec<u8>,
}

impl FetchResponse {
    pub fn new(url: impl Into<String>, status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self { url: url.into(), status, body: body.into() }
    }

    /// A successful (`200`) response carrying `text`.
    pub fn from_text(url: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(url, 200, text.into().into_bytes())
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    /// Whether the status is in the `2xx` range.
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn bytes(&self) -> &[u8] {
        &self.body
    }

    /// Decodes the body as UTF-8 text.
    pub fn text(self) -> Result<String> {
        String::from_utf8(self.body).map_err(|e| Error::RetrievalError {
            url: self.url,
            reason: format!("response body is not valid UTF-8: {e}"),
        })
    }
}

/// Fetch backed by a closure, created with [`fetch_fn`].
pub struct FetchFn<F> {
    f: F,
}

/// Wraps a closure returning a future into a [`Fetch`].
///
/// # Examples
/// ```
/// use view_engine::fetch::{fetch_fn, FetchResponse};
///
/// let fetch = fetch_fn(|url: String, _init| async move {
///     Ok(FetchResponse::from_text(url, "Hello {{name}}"))
/// });
/// # let _ = fetch;
/// ```
pub fn fetch_fn<F, Fut>(f: F) -> FetchFn<F>
where
    F: Fn(String, Option<RequestInit>) -> Fut + Send + Sync,
    Fut: Future<Output = Result<FetchResponse>> + Send + 'static,
{
    FetchFn { f }
}

#[async_trait]
impl<F, Fut> Fetch for FetchFn<F>
where
    F: Fn(String, Option<RequestInit>) -> Fut + Send + Sync,
    Fut: Future<Output = Result<FetchResponse>> + Send + 'static,
{
    async fn fetch(&self, input: &str, init: Option<&RequestInit>) -> Result<FetchResponse> {
        (self.f)(input.to_string(), init.cloned()).await
    }
}
