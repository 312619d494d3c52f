use crate::error::{Error, Result};
use crate::fetch::interface::{Fetch, FetchResponse, RequestInit};
use async_trait::async_trait;
use log::debug;

/// Fetches templates over HTTP(S).
///
/// Like a browser fetch, a non-success status is not an error: the body is
/// returned as-is and [`FetchResponse::ok`] reports the status class.
#[derive(Debug, Default, Clone)]
pub struct HttpFetch {
    client: reqwest::Client,
}

impl HttpFetch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a preconfigured client (timeouts, proxies, default headers).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

fn retrieval_error(url: &str, err: impl std::fmt::Display) -> Error {
    Error::RetrievalError { url: url.to_string(), reason: err.to_string() }
}

#[async_trait]
impl Fetch for HttpFetch {
    async fn fetch(&self, input: &str, init: Option<&RequestInit>) -> Result<FetchResponse> {
        let method = init
            .and_then(|i| i.method.as_deref())
            .unwrap_or("GET")
            .parse::<reqwest::Method>()
            .map_err(|e| retrieval_error(input, e))?;

        debug!("Fetching template {method} '{input}'.");
        let mut request = self.client.request(method, input);
        if let Some(init) = init {
            for (name, value) in &init.headers {
                request = request.header(name.as_str(), value.as_str());
            }
        }

        let response = request.send().await.map_err(|e| retrieval_error(input, e))?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|e| retrieval_error(input, e))?;
        Ok(FetchResponse::new(input, status, body.to_vec()))
    }
}
