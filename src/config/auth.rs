//! Authentication configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Authentication configuration (OIDC token validation)
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Expected token issuer URL
    pub issuer: String,

    /// Expected audience for tokens
    pub audience: String,

    /// Key used to verify token signatures.
    ///
    /// HS256 shared secret, or a PEM-encoded RSA public key when
    /// `algorithm` is RS256.
    pub decoding_key: String,

    /// Signature algorithm (HS256 or RS256)
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
}

impl AuthConfig {
    /// Validate authentication configuration.
    ///
    /// In production, requires HTTPS for the issuer URL.
    pub fn validate(&self, is_production: bool) -> Result<(), ValidationError> {
        if self.issuer.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH_ISSUER"));
        }
        if self.audience.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH_AUDIENCE"));
        }
        if self.decoding_key.is_empty() {
            return Err(ValidationError::EmptyDecodingKey);
        }
        if is_production && !self.issuer.starts_with("https://") {
            return Err(ValidationError::IssuerMustBeHttps);
        }
        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            issuer: String::new(),
            audience: String::new(),
            decoding_key: String::new(),
            algorithm: default_algorithm(),
        }
    }
}

fn default_algorithm() -> String {
    "HS256".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> AuthConfig {
        AuthConfig {
            issuer: "https://auth.example.com".to_string(),
            audience: "launchcheck".to_string(),
            decoding_key: "secret".to_string(),
            algorithm: "HS256".to_string(),
        }
    }

    #[test]
    fn validation_missing_issuer() {
        let config = AuthConfig::default();
        assert!(config.validate(false).is_err());
    }

    #[test]
    fn validation_empty_key() {
        let config = AuthConfig {
            decoding_key: String::new(),
            ..valid_config()
        };
        assert!(config.validate(false).is_err());
    }

    #[test]
    fn validation_production_requires_https() {
        let config = AuthConfig {
            issuer: "http://auth.example.com".to_string(),
            ..valid_config()
        };
        assert!(config.validate(false).is_ok());
        assert!(config.validate(true).is_err());
    }

    #[test]
    fn validation_valid_config() {
        assert!(valid_config().validate(true).is_ok());
    }
}
