//! HTTP DTOs for report endpoints.
//!
//! These types decouple the HTTP API from domain types. The checklist
//! and priority summary serialize in their stored JSON shape, so they
//! pass through as-is.

use serde::{Deserialize, Serialize};

use crate::domain::checklist::{Checklist, IssuesFound, UncheckedSection};
use crate::domain::foundation::{OverallRating, PriorityLevel, ReportStatus};
use crate::domain::report::{
    rating_explanation, PrioritySummary, QaReport, Revision, RevisionChanges,
};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to create a new report.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReportRequest {
    pub website_name: String,
    pub url: String,
    /// ISO date, e.g. "2026-03-04".
    pub date_reviewed: chrono::NaiveDate,
    pub reviewer_name: String,
    #[serde(default)]
    pub priority_level: PriorityLevel,
}

/// Request to save the edited checklist.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveChecklistRequest {
    pub checklist_data: Checklist,
    /// True for "save and continue"; false lets the save debounce.
    #[serde(default)]
    pub immediate: bool,
}

/// Request to complete the report with its priority summary.
#[derive(Debug, Clone, Deserialize)]
pub struct CompleteReportRequest {
    pub priority_summary: PrioritySummary,
}

/// Request to revise a report after completion.
#[derive(Debug, Clone, Deserialize)]
pub struct ReviseReportRequest {
    pub priority_summary: PrioritySummary,
    #[serde(default)]
    pub revision_note: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Full report view.
#[derive(Debug, Clone, Serialize)]
pub struct ReportResponse {
    pub id: String,
    pub created_by: String,
    pub website_name: String,
    pub url: String,
    pub date_reviewed: String,
    pub reviewer_name: String,
    pub priority_level: PriorityLevel,
    pub checklist_data: Checklist,
    pub priority_summary: PrioritySummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall_rating: Option<OverallRating>,
    /// Rationale shown next to the rating badge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating_explanation: Option<String>,
    pub next_steps: Vec<String>,
    /// Open work grouped by section, for the summary view.
    pub unchecked_items: Vec<UncheckedSectionResponse>,
    pub status: ReportStatus,
    pub progress_percent: u8,
    pub created_at: String,
    pub updated_at: String,
}

impl From<QaReport> for ReportResponse {
    fn from(report: QaReport) -> Self {
        let rating_explanation = report.overall_rating().map(|rating| {
            rating_explanation(
                rating,
                report.checklist().unchecked_count(),
                report.priority_summary().critical_count(),
            )
        });
        let unchecked_items = report
            .checklist()
            .unchecked_items()
            .into_iter()
            .map(Into::into)
            .collect();
        Self {
            id: report.id().to_string(),
            created_by: report.created_by().to_string(),
            website_name: report.details().website_name.clone(),
            url: report.details().url.clone(),
            date_reviewed: report.details().date_reviewed.format("%Y-%m-%d").to_string(),
            reviewer_name: report.details().reviewer_name.clone(),
            priority_level: report.priority_level(),
            progress_percent: report.checklist().progress_percent(),
            checklist_data: report.checklist().clone(),
            priority_summary: report.priority_summary().clone(),
            overall_rating: report.overall_rating(),
            rating_explanation,
            next_steps: report.next_steps().to_vec(),
            unchecked_items,
            status: report.status(),
            created_at: report.created_at().to_rfc3339(),
            updated_at: report.updated_at().to_rfc3339(),
        }
    }
}

/// A section with open items, grouped for display.
#[derive(Debug, Clone, Serialize)]
pub struct UncheckedSectionResponse {
    pub category: String,
    pub section: String,
    pub items: Vec<String>,
    pub issues_found: IssuesFound,
}

impl From<UncheckedSection> for UncheckedSectionResponse {
    fn from(group: UncheckedSection) -> Self {
        Self {
            category: group.category,
            section: group.section,
            items: group.items,
            issues_found: group.issues_found,
        }
    }
}

/// Compact report view for the dashboard list.
#[derive(Debug, Clone, Serialize)]
pub struct ReportSummaryResponse {
    pub id: String,
    pub website_name: String,
    pub url: String,
    pub status: ReportStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall_rating: Option<OverallRating>,
    pub progress_percent: u8,
    pub date_reviewed: String,
    pub updated_at: String,
}

impl From<QaReport> for ReportSummaryResponse {
    fn from(report: QaReport) -> Self {
        Self {
            id: report.id().to_string(),
            website_name: report.details().website_name.clone(),
            url: report.details().url.clone(),
            status: report.status(),
            overall_rating: report.overall_rating(),
            progress_percent: report.checklist().progress_percent(),
            date_reviewed: report.details().date_reviewed.format("%Y-%m-%d").to_string(),
            updated_at: report.updated_at().to_rfc3339(),
        }
    }
}

/// List of a user's reports.
#[derive(Debug, Clone, Serialize)]
pub struct ReportListResponse {
    pub items: Vec<ReportSummaryResponse>,
    pub total: usize,
}

/// An issued share link.
#[derive(Debug, Clone, Serialize)]
pub struct ShareLinkResponse {
    pub token: String,
    pub report_id: String,
}

/// One revision in the audit history.
#[derive(Debug, Clone, Serialize)]
pub struct RevisionResponse {
    pub id: String,
    pub report_id: String,
    pub revised_by: String,
    pub revised_at: String,
    pub changes: RevisionChanges,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision_note: Option<String>,
}

impl From<Revision> for RevisionResponse {
    fn from(revision: Revision) -> Self {
        Self {
            id: revision.id.to_string(),
            report_id: revision.report_id.to_string(),
            revised_by: revision.revised_by.to_string(),
            revised_at: revision.revised_at.to_rfc3339(),
            changes: revision.changes,
            revision_note: revision.revision_note,
        }
    }
}

/// Result of a revision: updated report plus, when a note was given,
/// its audit record.
#[derive(Debug, Clone, Serialize)]
pub struct ReviseReportResponse {
    pub report: ReportResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision: Option<RevisionResponse>,
}

/// A stored image's public URL.
#[derive(Debug, Clone, Serialize)]
pub struct UploadImageResponse {
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;
    use crate::domain::report::WebsiteDetails;
    use chrono::NaiveDate;

    #[test]
    fn report_response_includes_progress() {
        let report = QaReport::new(
            UserId::new("user-1").unwrap(),
            WebsiteDetails {
                website_name: "Acme Storefront".to_string(),
                url: "https://acme.example".to_string(),
                date_reviewed: NaiveDate::from_ymd_opt(2026, 3, 4).unwrap(),
                reviewer_name: "Jordan Reyes".to_string(),
            },
            PriorityLevel::Medium,
        )
        .unwrap();

        let response = ReportResponse::from(report);
        assert_eq!(response.progress_percent, 0);
        assert_eq!(response.date_reviewed, "2026-03-04");
        assert!(response.overall_rating.is_none());
        assert!(response.rating_explanation.is_none());
    }

    #[test]
    fn completed_report_carries_explanation_and_open_items() {
        let mut report = QaReport::new(
            UserId::new("user-1").unwrap(),
            WebsiteDetails {
                website_name: "Acme Storefront".to_string(),
                url: "https://acme.example".to_string(),
                date_reviewed: NaiveDate::from_ymd_opt(2026, 3, 4).unwrap(),
                reviewer_name: "Jordan Reyes".to_string(),
            },
            PriorityLevel::Medium,
        )
        .unwrap();
        report
            .complete(PrioritySummary {
                critical: vec!["Site down on mobile".to_string()],
                ..Default::default()
            })
            .unwrap();

        let response = ReportResponse::from(report);
        let explanation = response.rating_explanation.expect("rated report explains itself");
        assert!(!explanation.is_empty());
        // Fresh template: every section still has open items.
        assert!(!response.unchecked_items.is_empty());
        let grouped: usize = response.unchecked_items.iter().map(|g| g.items.len()).sum();
        assert_eq!(grouped, response.checklist_data.unchecked_count());
    }

    #[test]
    fn checklist_serializes_in_stored_shape() {
        let report = QaReport::new(
            UserId::new("user-1").unwrap(),
            WebsiteDetails {
                website_name: "Acme Storefront".to_string(),
                url: "https://acme.example".to_string(),
                date_reviewed: NaiveDate::from_ymd_opt(2026, 3, 4).unwrap(),
                reviewer_name: "Jordan Reyes".to_string(),
            },
            PriorityLevel::Medium,
        )
        .unwrap();

        let json = serde_json::to_value(ReportResponse::from(report)).unwrap();
        let first_section = &json["checklist_data"][0]["sections"][0];
        assert!(first_section.get("sectionId").is_some());
        assert!(first_section.get("issuesFound").is_some());
    }
}
