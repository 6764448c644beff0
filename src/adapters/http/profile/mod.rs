//! HTTP adapter for profile endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::ProfileHandlers;
pub use routes::profile_routes;
