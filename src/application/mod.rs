//! Application layer - Command and query handlers.
//!
//! Handlers orchestrate domain aggregates through port interfaces. They
//! hold no domain logic of their own: ownership checks, state transitions
//! and derived-field recomputation all live in the domain layer.

pub mod handlers;
