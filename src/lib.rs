//! Launchcheck - QA checklist service for website launch reviews.
//!
//! This crate implements per-website QA reports: a fixed checklist wizard,
//! issue capture with screenshots, a computed overall rating with generated
//! next steps, and sharing/export of the finished report.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
