//! Checklist module - fixed-template checklist walked by the wizard.
//!
//! A checklist is an ordered list of categories, each holding ordered
//! sections of checkable items plus free-text/screenshot issue notes.
//! Category and section order drives wizard navigation and is preserved
//! everywhere, including exports.

mod model;
mod progress;
mod template;

pub use model::{Checklist, ChecklistCategory, ChecklistItem, ChecklistSection, IssuesFound};
pub use progress::UncheckedSection;
pub use template::checklist_template;
