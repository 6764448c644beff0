//! Authentication adapters implementing the `TokenValidator` port.

mod mock;
mod oidc;

pub use mock::MockTokenValidator;
pub use oidc::OidcTokenValidator;
