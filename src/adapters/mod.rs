//! Adapters - Implementations of port interfaces.
//!
//! - `auth` - OIDC token validation plus a mock validator
//! - `http` - axum REST API
//! - `memory` - in-memory repositories for tests and local development
//! - `postgres` - sqlx repositories
//! - `storage` - HTTP object storage for screenshots

pub mod auth;
pub mod http;
pub mod memory;
pub mod postgres;
pub mod storage;
