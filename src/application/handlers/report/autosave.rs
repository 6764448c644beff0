//! ChecklistAutosave - Debounced persistence for checklist edits.
//!
//! Every queued save bumps a per-report generation counter and spawns a
//! task that waits out a quiet period before writing. A newer save, an
//! explicit flush, or completion bumps the counter again and the stale
//! task drops its write. At most one write survives a burst of edits.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::domain::foundation::{DomainError, ReportId};
use crate::domain::report::QaReport;
use crate::ports::ReportRepository;

const DEFAULT_QUIET_PERIOD: Duration = Duration::from_secs(1);

/// Debounced writer for checklist autosave.
pub struct ChecklistAutosave {
    repository: Arc<dyn ReportRepository>,
    quiet_period: Duration,
    /// Generations come from one shared counter, never per report: an
    /// entry can then be removed after a write without a still-sleeping
    /// stale task ever seeing its own generation recycled.
    next_generation: AtomicU64,
    generations: Mutex<HashMap<ReportId, u64>>,
}

impl ChecklistAutosave {
    pub fn new(repository: Arc<dyn ReportRepository>) -> Self {
        Self::with_quiet_period(repository, DEFAULT_QUIET_PERIOD)
    }

    pub fn with_quiet_period(repository: Arc<dyn ReportRepository>, quiet_period: Duration) -> Self {
        Self {
            repository,
            quiet_period,
            next_generation: AtomicU64::new(0),
            generations: Mutex::new(HashMap::new()),
        }
    }

    /// Queues a report snapshot for a debounced write.
    ///
    /// Returns immediately; the write happens after the quiet period
    /// unless superseded by a later queue or flush for the same report.
    pub fn queue(self: &Arc<Self>, report: QaReport) {
        let generation = self.bump(report.id());
        let autosave = Arc::clone(self);

        tokio::spawn(async move {
            tokio::time::sleep(autosave.quiet_period).await;

            if !autosave.is_current(report.id(), generation) {
                return;
            }
            if let Err(err) = autosave.repository.update(&report).await {
                tracing::error!(report_id = %report.id(), error = %err, "autosave failed");
            } else {
                tracing::debug!(report_id = %report.id(), "autosaved checklist");
            }
            autosave.clear(report.id(), generation);
        });
    }

    /// Writes immediately, cancelling any pending debounced write.
    pub async fn flush(&self, report: &QaReport) -> Result<(), DomainError> {
        let generation = self.bump(report.id());
        let result = self.repository.update(report).await;
        self.clear(report.id(), generation);
        result
    }

    /// Returns true if a debounced write is still pending for the report.
    pub fn has_pending(&self, report_id: ReportId) -> bool {
        self.generations.lock().unwrap().contains_key(&report_id)
    }

    fn bump(&self, report_id: ReportId) -> u64 {
        let generation = self.next_generation.fetch_add(1, Ordering::Relaxed) + 1;
        self.generations.lock().unwrap().insert(report_id, generation);
        generation
    }

    fn is_current(&self, report_id: ReportId, generation: u64) -> bool {
        self.generations.lock().unwrap().get(&report_id) == Some(&generation)
    }

    fn clear(&self, report_id: ReportId, generation: u64) {
        let mut generations = self.generations.lock().unwrap();
        if generations.get(&report_id) == Some(&generation) {
            generations.remove(&report_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryReportRepository;
    use crate::domain::foundation::{PriorityLevel, UserId};
    use crate::domain::report::WebsiteDetails;
    use chrono::NaiveDate;

    fn sample_report() -> QaReport {
        QaReport::new(
            UserId::new("user-1").unwrap(),
            WebsiteDetails {
                website_name: "Acme Storefront".to_string(),
                url: "https://acme.example".to_string(),
                date_reviewed: NaiveDate::from_ymd_opt(2026, 3, 4).unwrap(),
                reviewer_name: "Jordan Reyes".to_string(),
            },
            PriorityLevel::Medium,
        )
        .unwrap()
    }

    fn check_next_item(report: &mut QaReport) {
        let mut checklist = report.checklist().clone();
        let (section_id, item_id) = checklist
            .sections()
            .flat_map(|s| {
                s.items
                    .iter()
                    .map(|i| (s.section_id.clone(), i.id.clone(), i.checked))
            })
            .find(|(_, _, checked)| !checked)
            .map(|(s, i, _)| (s, i))
            .unwrap();
        assert!(checklist.set_item_checked(&section_id, &item_id, true));
        report.update_checklist(checklist);
    }

    #[tokio::test(start_paused = true)]
    async fn writes_after_quiet_period() {
        let repo = Arc::new(InMemoryReportRepository::new());
        let mut report = sample_report();
        repo.save(&report).await.unwrap();

        let autosave = Arc::new(ChecklistAutosave::new(repo.clone()));
        check_next_item(&mut report);
        autosave.queue(report.clone());
        assert!(autosave.has_pending(report.id()));

        tokio::time::sleep(Duration::from_millis(1100)).await;

        let stored = repo.find_by_id(&report.id()).await.unwrap().unwrap();
        assert_eq!(stored.checklist().unchecked_count(), report.checklist().unchecked_count());
        assert!(!autosave.has_pending(report.id()));
    }

    #[tokio::test(start_paused = true)]
    async fn later_queue_supersedes_earlier() {
        let repo = Arc::new(InMemoryReportRepository::new());
        let mut report = sample_report();
        repo.save(&report).await.unwrap();

        let autosave = Arc::new(ChecklistAutosave::new(repo.clone()));

        check_next_item(&mut report);
        let first_snapshot = report.clone();
        autosave.queue(first_snapshot);

        tokio::time::sleep(Duration::from_millis(500)).await;

        check_next_item(&mut report);
        autosave.queue(report.clone());

        tokio::time::sleep(Duration::from_millis(1100)).await;

        let stored = repo.find_by_id(&report.id()).await.unwrap().unwrap();
        assert_eq!(
            stored.checklist().unchecked_count(),
            report.checklist().unchecked_count()
        );
    }

    #[tokio::test(start_paused = true)]
    async fn flush_leaves_no_pending_entry() {
        let repo = Arc::new(InMemoryReportRepository::new());
        let mut report = sample_report();
        repo.save(&report).await.unwrap();

        let autosave = Arc::new(ChecklistAutosave::new(repo.clone()));

        check_next_item(&mut report);
        autosave.queue(report.clone());
        assert!(autosave.has_pending(report.id()));

        autosave.flush(&report).await.unwrap();
        assert!(!autosave.has_pending(report.id()));

        // The superseded task waking up changes nothing.
        tokio::time::sleep(Duration::from_millis(1100)).await;
        assert!(!autosave.has_pending(report.id()));
    }

    #[tokio::test(start_paused = true)]
    async fn flush_cancels_pending_write() {
        let repo = Arc::new(InMemoryReportRepository::new());
        let mut report = sample_report();
        repo.save(&report).await.unwrap();

        let autosave = Arc::new(ChecklistAutosave::new(repo.clone()));

        let mut stale = report.clone();
        check_next_item(&mut stale);
        autosave.queue(stale);

        check_next_item(&mut report);
        check_next_item(&mut report);
        autosave.flush(&report).await.unwrap();

        tokio::time::sleep(Duration::from_millis(1100)).await;

        let stored = repo.find_by_id(&report.id()).await.unwrap().unwrap();
        assert_eq!(
            stored.checklist().unchecked_count(),
            report.checklist().unchecked_count()
        );
    }
}
