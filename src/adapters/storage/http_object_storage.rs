//! HTTP object storage adapter.
//!
//! Talks to a Supabase-style storage API:
//!
//! - upload:  `POST {base_url}/object/{bucket}/{path}` with a service key
//! - public:  `GET  {base_url}/object/public/{bucket}/{path}` (no auth)
//!
//! Uploaded screenshots are publicly readable by URL; the random upload
//! path is what keeps them unguessable.

use std::time::Duration;

use async_trait::async_trait;

use crate::config::StorageConfig;
use crate::ports::{ImageStorage, StorageError};

/// Object storage client over HTTP.
pub struct HttpObjectStorage {
    client: reqwest::Client,
    base_url: String,
    bucket: String,
    service_key: String,
}

impl HttpObjectStorage {
    pub fn new(
        base_url: impl Into<String>,
        bucket: impl Into<String>,
        service_key: impl Into<String>,
    ) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_default();
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            bucket: bucket.into(),
            service_key: service_key.into(),
        }
    }

    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(&config.base_url, &config.bucket, &config.service_key)
    }

    fn upload_url(&self, path: &str) -> String {
        format!("{}/object/{}/{}", self.base_url, self.bucket, path)
    }

    fn public_url(&self, path: &str) -> String {
        format!("{}/object/public/{}/{}", self.base_url, self.bucket, path)
    }
}

#[async_trait]
impl ImageStorage for HttpObjectStorage {
    async fn upload(
        &self,
        path: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, StorageError> {
        let response = self
            .client
            .post(self.upload_url(path))
            .bearer_auth(&self.service_key)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, path, "object store rejected upload");
            return Err(StorageError::Rejected(format!("{}: {}", status, body)));
        }

        Ok(self.public_url(path))
    }
}
