//! HTTP Photo Source
//!
//! Single GET against a JSON endpoint. No timeout and no retry.

use async_trait::async_trait;

use super::traits::PhotoSource;
use crate::config::SourceConfig;
use crate::domain::{Photo, SourceResult, DataSourceError};

pub struct HttpPhotoSource {
    client: reqwest::Client,
    config: SourceConfig,
}

impl HttpPhotoSource {
    pub fn new(config: SourceConfig) -> SourceResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("photo-swipe/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl PhotoSource for HttpPhotoSource {
    async fn fetch_all(&self) -> SourceResult<Vec<Photo>> {
        let response = self.client.get(&self.config.endpoint).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DataSourceError::Status(status.as_u16()));
        }
        let body = response.bytes().await?;
        parse_photos(&body)
    }

    fn describe(&self) -> String {
        self.config.endpoint.clone()
    }
}

/// Decode a JSON array of photo records
pub fn parse_photos(body: &[u8]) -> SourceResult<Vec<Photo>> {
    Ok(serde_json::from_slice(body)?)
}
