//! OIDC adapter for JWT validation.
//!
//! Validates Bearer tokens issued by the identity provider:
//!
//! 1. Verifies the signature against the configured decoding key
//! 2. Validates issuer, audience, and expiry claims
//! 3. Maps claims to the domain `AuthenticatedUser` type
//!
//! The decoding key is static configuration (a shared secret for HS256,
//! a PEM public key for RS256), so validation needs no network calls.

use std::str::FromStr;

use async_trait::async_trait;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;

use crate::config::AuthConfig;
use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::TokenValidator;

/// JWT claims we care about.
#[derive(Debug, Deserialize)]
struct Claims {
    sub: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    picture: Option<String>,
}

/// OIDC token validator backed by a static decoding key.
pub struct OidcTokenValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl OidcTokenValidator {
    /// Builds a validator from auth configuration.
    ///
    /// Fails if the algorithm name is unknown or the key material does
    /// not match the algorithm family.
    pub fn from_config(config: &AuthConfig) -> Result<Self, AuthError> {
        let algorithm = Algorithm::from_str(&config.algorithm)
            .map_err(|_| AuthError::service_unavailable(format!(
                "Unsupported JWT algorithm: {}",
                config.algorithm
            )))?;

        let decoding_key = match algorithm {
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => {
                DecodingKey::from_secret(config.decoding_key.as_bytes())
            }
            Algorithm::RS256 | Algorithm::RS384 | Algorithm::RS512 => {
                DecodingKey::from_rsa_pem(config.decoding_key.as_bytes()).map_err(|e| {
                    AuthError::service_unavailable(format!("Invalid RSA public key: {}", e))
                })?
            }
            other => {
                return Err(AuthError::service_unavailable(format!(
                    "Unsupported JWT algorithm: {:?}",
                    other
                )))
            }
        };

        let mut validation = Validation::new(algorithm);
        validation.set_issuer(&[&config.issuer]);
        validation.set_audience(&[&config.audience]);

        Ok(Self {
            decoding_key,
            validation,
        })
    }
}

#[async_trait]
impl TokenValidator for OidcTokenValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken,
            }
        })?;

        let claims = data.claims;
        let user_id = UserId::new(claims.sub).map_err(|_| AuthError::InvalidToken)?;

        Ok(AuthenticatedUser::new(
            user_id,
            claims.email.unwrap_or_default(),
            claims.name,
            claims.picture,
        ))
    }
}
