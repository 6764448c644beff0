//! PostgreSQL implementation of RevisionRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{
    DomainError, ErrorCode, ReportId, RevisionId, Timestamp, UserId,
};
use crate::domain::report::{Revision, RevisionChanges};
use crate::ports::RevisionRepository;

/// PostgreSQL implementation of RevisionRepository.
#[derive(Clone)]
pub struct PostgresRevisionRepository {
    pool: PgPool,
}

impl PostgresRevisionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RevisionRepository for PostgresRevisionRepository {
    async fn append(&self, revision: &Revision) -> Result<(), DomainError> {
        let changes = serde_json::to_value(&revision.changes).map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to serialize revision changes: {}", e),
            )
        })?;

        sqlx::query(
            r#"
            INSERT INTO qa_report_revisions (
                id, report_id, revised_by, revised_at, changes, revision_note
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(revision.id.as_uuid())
        .bind(revision.report_id.as_uuid())
        .bind(revision.revised_by.as_str())
        .bind(revision.revised_at.as_datetime())
        .bind(changes)
        .bind(&revision.revision_note)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to insert revision: {}", e),
            )
        })?;

        Ok(())
    }

    async fn list_for_report(&self, report_id: &ReportId) -> Result<Vec<Revision>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, report_id, revised_by, revised_at, changes, revision_note
            FROM qa_report_revisions
            WHERE report_id = $1
            ORDER BY revised_at DESC
            "#,
        )
        .bind(report_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch revisions: {}", e),
            )
        })?;

        rows.into_iter().map(row_to_revision).collect()
    }
}

fn column_error(column: &str, e: impl std::fmt::Display) -> DomainError {
    DomainError::new(
        ErrorCode::DatabaseError,
        format!("Failed to read {}: {}", column, e),
    )
}

fn row_to_revision(row: sqlx::postgres::PgRow) -> Result<Revision, DomainError> {
    let id: uuid::Uuid = row.try_get("id").map_err(|e| column_error("id", e))?;
    let report_id: uuid::Uuid = row
        .try_get("report_id")
        .map_err(|e| column_error("report_id", e))?;
    let revised_by: String = row
        .try_get("revised_by")
        .map_err(|e| column_error("revised_by", e))?;
    let revised_at: chrono::DateTime<chrono::Utc> = row
        .try_get("revised_at")
        .map_err(|e| column_error("revised_at", e))?;
    let changes: serde_json::Value = row
        .try_get("changes")
        .map_err(|e| column_error("changes", e))?;
    let changes: RevisionChanges =
        serde_json::from_value(changes).map_err(|e| column_error("changes", e))?;
    let revision_note: Option<String> = row
        .try_get("revision_note")
        .map_err(|e| column_error("revision_note", e))?;

    Ok(Revision {
        id: RevisionId::from_uuid(id),
        report_id: ReportId::from_uuid(report_id),
        revised_by: UserId::new(revised_by).map_err(|e| column_error("revised_by", e))?,
        revised_at: Timestamp::from_datetime(revised_at),
        changes,
        revision_note,
    })
}
