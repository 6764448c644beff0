//! HTTP adapter for the public share endpoint.
//!
//! The one unauthenticated surface: a share token resolves to a
//! read-only report view. The router must NOT be layered with the auth
//! middleware.

pub mod handlers;
pub mod routes;

pub use handlers::ShareHandlers;
pub use routes::share_routes;
