/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use async_trait::async_trait;
use log::debug;
use reqwest::StatusCode;

use super::config::Config;
use super::error::{Error, Result};
use super::snapshot::Snapshot;

pub(crate) const STORAGE_API_ENDPOINT: &str = "api/v1/storage";

/// Retrieval of a storage snapshot. Implemented by the real HTTP client
/// and by deterministic doubles in tests.
#[async_trait]
pub trait StorageApi: Send + Sync {
    async fn fetch(&self) -> Result<Snapshot>;
}

#[derive(Clone, Debug)]
pub struct FluentBitClient {
    inner: reqwest::Client,
    config: Config,
}

impl FluentBitClient {
    pub fn new(config: Config) -> Self {
        Self {
            inner: reqwest::Client::new(),
            config,
        }
    }

    fn storage_url(&self) -> String {
        format!("{}/{}", self.config.base_url(), STORAGE_API_ENDPOINT)
    }
}

#[async_trait]
impl StorageApi for FluentBitClient {
    /// One GET against the storage endpoint; requires a 200 and a body
    /// that decodes as [`Snapshot`].
    async fn fetch(&self) -> Result<Snapshot> {
        let url = self.storage_url();
        debug!("requesting storage snapshot: {url}");

        let response = self
            .inner
            .get(&url)
            .send()
            .await
            .map_err(Error::SendRequest)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(Error::UnexpectedStatus(
                status.as_u16(),
                STORAGE_API_ENDPOINT.to_string(),
            ));
        }

        response
            .json::<Snapshot>()
            .await
            .map_err(Error::DeserializeResponse)
    }
}
