use crate::error::{Error, Result};
use crate::fetch::interface::{Fetch, FetchResponse, RequestInit};
use async_trait::async_trait;
use log::debug;
use std::path::Path;

/// Fetches templates from the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFetch;

impl LocalFetch {
    /// Creates a new LocalFetch instance.
    pub fn new() -> Self {
        Self
    }

    /// Reads `path`, reporting failures against the original `input`.
    pub(crate) async fn read(&self, input: &str, path: &Path) -> Result<FetchResponse> {
        debug!("Reading template file '{}'.", path.display());
        let body = tokio::fs::read(path).await.map_err(|e| Error::RetrievalError {
            url: input.to_string(),
            reason: e.to_string(),
        })?;
        Ok(FetchResponse::new(input, 200, body))
    }
}

#[async_trait]
impl Fetch for LocalFetch {
    /// Reads the file at `input`. The request init is ignored.
    async fn fetch(&self, input: &str, _init: Option<&RequestInit>) -> Result<FetchResponse> {
        self.read(input, Path::new(input)).await
    }
}
