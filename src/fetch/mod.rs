//! Pluggable retrieval of raw template text.
//!
//! [`Fetch`] is the contract; [`DefaultFetch`] is what `install` binds when
//! the host supplies nothing. It reads plain paths and `file://` URLs from
//! disk and, with the `http` feature, `http(s)://` URLs over the network.

use crate::constants::schemes;
use crate::error::{Error, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use url::Url;

#[cfg(feature = "http")]
pub mod http;
pub mod interface;
pub mod local;

#[cfg(feature = "http")]
pub use http::HttpFetch;
pub use interface::{fetch_fn, Fetch, FetchFn, FetchResponse, RequestInit};
pub use local::LocalFetch;

#[derive(Debug, PartialEq, Eq)]
pub enum FetchSource {
    /// Local filesystem path
    FileSystem(PathBuf),
    /// HTTP or HTTPS URL
    Http(String),
}

impl FetchSource {
    /// Classifies a fetch input.
    ///
    /// Anything that is not a URL (including Windows drive paths, which
    /// parse with a one-letter scheme) is a filesystem path.
    pub fn parse(input: &str) -> Result<Self> {
        let url = match Url::parse(input) {
            Ok(url) if url.scheme().len() > 1 => url,
            _ => return Ok(FetchSource::FileSystem(PathBuf::from(input))),
        };

        match url.scheme() {
            schemes::HTTP | schemes::HTTPS => Ok(FetchSource::Http(input.to_string())),
            schemes::FILE => url.to_file_path().map(FetchSource::FileSystem).map_err(|_| {
                Error::RetrievalError {
                    url: input.to_string(),
                    reason: "file URL does not name a local path".to_string(),
                }
            }),
            other => Err(Error::RetrievalError {
                url: input.to_string(),
                reason: format!("unsupported URL scheme '{other}'"),
            }),
        }
    }
}

impl std::fmt::Display for FetchSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchSource::FileSystem(path) => write!(f, "local path: '{}'", path.display()),
            FetchSource::Http(url) => write!(f, "url: '{url}'"),
        }
    }
}

/// The fetch bound by `install` when the setup provides none.
#[derive(Debug, Default, Clone)]
pub struct DefaultFetch {
    local: LocalFetch,
    #[cfg(feature = "http")]
    http: HttpFetch,
}

impl DefaultFetch {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Fetch for DefaultFetch {
    async fn fetch(&self, input: &str, init: Option<&RequestInit>) -> Result<FetchResponse> {
        match FetchSource::parse(input)? {
            FetchSource::FileSystem(path) => self.local.read(input, &path).await,
            #[cfg(feature = "http")]
            FetchSource::Http(_) => self.http.fetch(input, init).await,
            #[cfg(not(feature = "http"))]
            FetchSource::Http(_) => {
                let _ = init;
                Err(Error::RetrievalError {
                    url: input.to_string(),
                    reason: "fetching over HTTP requires the `http` feature".to_string(),
                })
            }
        }
    }
}
