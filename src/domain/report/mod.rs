//! Report module - the QA report aggregate and its derived logic.

mod aggregate;
mod comment;
mod errors;
mod export;
mod next_steps;
mod priority_summary;
mod revision;
mod scoring;

pub use aggregate::{QaReport, WebsiteDetails};
pub use comment::{Comment, EmptyComment};
pub use errors::ReportError;
pub use export::render_report_text;
pub use next_steps::generate_next_steps;
pub use priority_summary::PrioritySummary;
pub use revision::{Revision, RevisionChanges};
pub use scoring::{calculate_overall_rating, rating_explanation};
