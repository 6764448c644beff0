//! Object storage configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Object storage configuration for uploaded screenshots.
///
/// Targets an HTTP object store exposing Supabase-style endpoints:
/// uploads go to `{base_url}/object/{bucket}/{path}` and the public
/// URL is `{base_url}/object/public/{bucket}/{path}`.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Base URL of the object store
    pub base_url: String,

    /// Bucket holding QA screenshots
    #[serde(default = "default_bucket")]
    pub bucket: String,

    /// Service key sent as a Bearer token on uploads
    #[serde(default)]
    pub service_key: String,
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.base_url.is_empty() {
            return Err(ValidationError::MissingRequired("STORAGE_BASE_URL"));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidStorageUrl);
        }
        if self.bucket.is_empty() {
            return Err(ValidationError::EmptyBucket);
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            bucket: default_bucket(),
            service_key: String::new(),
        }
    }
}

fn default_bucket() -> String {
    "qa-images".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bucket_is_qa_images() {
        assert_eq!(StorageConfig::default().bucket, "qa-images");
    }

    #[test]
    fn validation_missing_base_url() {
        assert!(StorageConfig::default().validate().is_err());
    }

    #[test]
    fn validation_rejects_non_http_url() {
        let config = StorageConfig {
            base_url: "ftp://storage.example.com".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validation_valid_config() {
        let config = StorageConfig {
            base_url: "https://storage.example.com".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
