//! Domain layer - pure QA-report model and logic.
//!
//! No I/O happens here. The rating engine, next-steps generator, and
//! export renderer are plain functions over the checklist and priority
//! summary so they can be tested without any infrastructure.

pub mod checklist;
pub mod foundation;
pub mod profile;
pub mod report;
