//! QaReport aggregate - the root entity for a QA review.
//!
//! A report owns its checklist clone and priority summary, carries the
//! derived rating/next-steps, and enforces the one-way draft -> completed
//! transition.

use chrono::NaiveDate;

use crate::domain::checklist::{checklist_template, Checklist};
use crate::domain::foundation::{
    OverallRating, PriorityLevel, ReportId, ReportStatus, Timestamp, UserId,
};

use super::errors::ReportError;
use super::next_steps::generate_next_steps;
use super::priority_summary::PrioritySummary;
use super::scoring::calculate_overall_rating;

/// Website metadata captured when the report is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebsiteDetails {
    pub website_name: String,
    pub url: String,
    pub date_reviewed: NaiveDate,
    pub reviewer_name: String,
}

impl WebsiteDetails {
    /// Validates required fields. Enforced before any write.
    fn validate(&self) -> Result<(), ReportError> {
        if self.website_name.trim().is_empty() {
            return Err(ReportError::validation(
                "website_name",
                "Website name is required",
            ));
        }
        if self.reviewer_name.trim().is_empty() {
            return Err(ReportError::validation(
                "reviewer_name",
                "Reviewer name is required",
            ));
        }
        if !self.url.starts_with("http://") && !self.url.starts_with("https://") {
            return Err(ReportError::validation("url", "Valid URL is required"));
        }
        Ok(())
    }
}

/// The QA report aggregate root.
#[derive(Debug, Clone)]
pub struct QaReport {
    id: ReportId,
    created_by: UserId,
    details: WebsiteDetails,
    priority_level: PriorityLevel,
    checklist: Checklist,
    priority_summary: PrioritySummary,
    overall_rating: Option<OverallRating>,
    next_steps: Vec<String>,
    status: ReportStatus,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl QaReport {
    /// Creates a new draft report with a fresh clone of the checklist
    /// template and an empty priority summary.
    pub fn new(
        created_by: UserId,
        details: WebsiteDetails,
        priority_level: PriorityLevel,
    ) -> Result<Self, ReportError> {
        details.validate()?;
        let now = Timestamp::now();
        Ok(Self {
            id: ReportId::new(),
            created_by,
            details,
            priority_level,
            checklist: checklist_template(),
            priority_summary: PrioritySummary::default(),
            overall_rating: None,
            next_steps: Vec::new(),
            status: ReportStatus::Draft,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitutes a report from persisted data.
    ///
    /// Used by repository implementations; bypasses validation since the
    /// data was validated when first written.
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: ReportId,
        created_by: UserId,
        details: WebsiteDetails,
        priority_level: PriorityLevel,
        checklist: Checklist,
        priority_summary: PrioritySummary,
        overall_rating: Option<OverallRating>,
        next_steps: Vec<String>,
        status: ReportStatus,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            created_by,
            details,
            priority_level,
            checklist,
            priority_summary,
            overall_rating,
            next_steps,
            status,
            created_at,
            updated_at,
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Accessors
    // ───────────────────────────────────────────────────────────────

    pub fn id(&self) -> ReportId {
        self.id
    }

    pub fn created_by(&self) -> &UserId {
        &self.created_by
    }

    pub fn details(&self) -> &WebsiteDetails {
        &self.details
    }

    pub fn priority_level(&self) -> PriorityLevel {
        self.priority_level
    }

    pub fn checklist(&self) -> &Checklist {
        &self.checklist
    }

    pub fn priority_summary(&self) -> &PrioritySummary {
        &self.priority_summary
    }

    pub fn overall_rating(&self) -> Option<OverallRating> {
        self.overall_rating
    }

    pub fn next_steps(&self) -> &[String] {
        &self.next_steps
    }

    pub fn status(&self) -> ReportStatus {
        self.status
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// Returns true if the given user owns this report.
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        self.created_by == *user_id
    }

    // ───────────────────────────────────────────────────────────────
    // Mutations
    // ───────────────────────────────────────────────────────────────

    /// Replaces the checklist with the client's edited copy.
    ///
    /// Section completion flags are recomputed rather than trusted, since
    /// they are a cached derivation of item state.
    pub fn update_checklist(&mut self, mut checklist: Checklist) {
        checklist.recompute_completion();
        self.checklist = checklist;
        self.touch();
    }

    /// Stores the priority summary and recomputes the derived fields.
    ///
    /// Does not change status; used while drafting and by post-completion
    /// edits alike.
    pub fn update_summary(&mut self, priority_summary: PrioritySummary) {
        let rating = calculate_overall_rating(&self.checklist, &priority_summary);
        self.next_steps = generate_next_steps(rating, &priority_summary);
        self.overall_rating = Some(rating);
        self.priority_summary = priority_summary;
        self.touch();
    }

    /// Completes the report: stores the final summary, recomputes rating
    /// and next steps, and flips status to completed.
    ///
    /// The transition is one-way; completing twice is an error.
    pub fn complete(&mut self, priority_summary: PrioritySummary) -> Result<(), ReportError> {
        if self.status == ReportStatus::Completed {
            return Err(ReportError::AlreadyCompleted);
        }
        self.update_summary(priority_summary);
        self.status = ReportStatus::Completed;
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}
