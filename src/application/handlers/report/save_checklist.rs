//! SaveChecklistHandler - Command handler for the checklist wizard step.

use std::sync::Arc;

use crate::domain::checklist::Checklist;
use crate::domain::foundation::{ReportId, UserId};
use crate::domain::report::{QaReport, ReportError};
use crate::ports::ReportRepository;

use super::autosave::ChecklistAutosave;

/// How urgently the save must reach storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveMode {
    /// Queue behind the quiet period; newer saves supersede.
    Debounced,
    /// Write before returning. Used by "save and continue".
    Immediate,
}

/// Command to persist an edited checklist.
#[derive(Debug, Clone)]
pub struct SaveChecklistCommand {
    pub report_id: ReportId,
    pub user_id: UserId,
    pub checklist: Checklist,
    pub mode: SaveMode,
}

/// Handler for checklist saves.
pub struct SaveChecklistHandler {
    repository: Arc<dyn ReportRepository>,
    autosave: Arc<ChecklistAutosave>,
}

impl SaveChecklistHandler {
    pub fn new(repository: Arc<dyn ReportRepository>, autosave: Arc<ChecklistAutosave>) -> Self {
        Self { repository, autosave }
    }

    pub async fn handle(&self, cmd: SaveChecklistCommand) -> Result<QaReport, ReportError> {
        let mut report = self
            .repository
            .find_by_id(&cmd.report_id)
            .await?
            .ok_or(ReportError::NotFound(cmd.report_id))?;

        if !report.is_owned_by(&cmd.user_id) {
            return Err(ReportError::Forbidden);
        }

        report.update_checklist(cmd.checklist);

        match cmd.mode {
            SaveMode::Immediate => self.autosave.flush(&report).await?,
            SaveMode::Debounced => self.autosave.queue(report.clone()),
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryReportRepository;
    use crate::domain::foundation::PriorityLevel;
    use crate::domain::report::WebsiteDetails;
    use chrono::NaiveDate;
    use std::time::Duration;

    async fn setup() -> (
        Arc<InMemoryReportRepository>,
        Arc<ChecklistAutosave>,
        SaveChecklistHandler,
        QaReport,
    ) {
        let repo = Arc::new(InMemoryReportRepository::new());
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
        repo.save(&report).await.unwrap();
        let autosave = Arc::new(ChecklistAutosave::new(
            repo.clone() as Arc<dyn ReportRepository>
        ));
        let handler = SaveChecklistHandler::new(repo.clone(), autosave.clone());
        (repo, autosave, handler, report)
    }

    fn checked_copy(report: &QaReport) -> Checklist {
        let mut checklist = report.checklist().clone();
        let first = checklist.sections().next().unwrap();
        let section_id = first.section_id.clone();
        let item_id = first.items[0].id.clone();
        assert!(checklist.set_item_checked(&section_id, &item_id, true));
        checklist
    }

    #[tokio::test]
    async fn immediate_save_persists_before_returning() {
        let (repo, _autosave, handler, report) = setup().await;

        handler
            .handle(SaveChecklistCommand {
                report_id: report.id(),
                user_id: UserId::new("user-1").unwrap(),
                checklist: checked_copy(&report),
                mode: SaveMode::Immediate,
            })
            .await
            .unwrap();

        let stored = repo.find_by_id(&report.id()).await.unwrap().unwrap();
        assert_eq!(
            stored.checklist().unchecked_count(),
            report.checklist().unchecked_count() - 1
        );
    }

    #[tokio::test(start_paused = true)]
    async fn debounced_save_waits_for_quiet_period() {
        let (repo, _autosave, handler, report) = setup().await;

        handler
            .handle(SaveChecklistCommand {
                report_id: report.id(),
                user_id: UserId::new("user-1").unwrap(),
                checklist: checked_copy(&report),
                mode: SaveMode::Debounced,
            })
            .await
            .unwrap();

        // Not yet written.
        let stored = repo.find_by_id(&report.id()).await.unwrap().unwrap();
        assert_eq!(
            stored.checklist().unchecked_count(),
            report.checklist().unchecked_count()
        );

        tokio::time::sleep(Duration::from_millis(1100)).await;

        let stored = repo.find_by_id(&report.id()).await.unwrap().unwrap();
        assert_eq!(
            stored.checklist().unchecked_count(),
            report.checklist().unchecked_count() - 1
        );
    }

    #[tokio::test]
    async fn rejects_non_owner() {
        let (_repo, _autosave, handler, report) = setup().await;

        let result = handler
            .handle(SaveChecklistCommand {
                report_id: report.id(),
                user_id: UserId::new("intruder").unwrap(),
                checklist: checked_copy(&report),
                mode: SaveMode::Immediate,
            })
            .await;

        assert!(matches!(result, Err(ReportError::Forbidden)));
    }
}
