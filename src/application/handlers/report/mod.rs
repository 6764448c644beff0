//! Report handlers - the wizard write path plus read/export/share.

mod autosave;
mod complete_report;
mod create_report;
mod export_report;
mod get_report;
mod list_reports;
mod revise_report;
mod save_checklist;
mod share_report;
mod upload_image;

pub use autosave::ChecklistAutosave;
pub use complete_report::{CompleteReportCommand, CompleteReportHandler};
pub use create_report::{CreateReportCommand, CreateReportHandler};
pub use export_report::{ExportReportHandler, ExportReportQuery, ExportedReport};
pub use get_report::{GetReportHandler, GetReportQuery};
pub use list_reports::{ListReportsHandler, ListReportsQuery};
pub use revise_report::{
    ListRevisionsHandler, ReviseReportCommand, ReviseReportHandler, ReviseReportResult,
};
pub use save_checklist::{SaveChecklistCommand, SaveChecklistHandler, SaveMode};
pub use share_report::{
    CreateShareLinkCommand, CreateShareLinkHandler, ResolveSharedReportHandler, ShareLink,
};
pub use upload_image::{UploadImageCommand, UploadImageHandler, UploadedImage, UploadError};
