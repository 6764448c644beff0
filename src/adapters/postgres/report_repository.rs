//! PostgreSQL implementation of ReportRepository.
//!
//! The checklist and priority summary are stored as JSONB; derived
//! fields (rating, next steps) are stored alongside so reads never
//! recompute.

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use std::str::FromStr;

use crate::domain::checklist::Checklist;
use crate::domain::foundation::{
    DomainError, ErrorCode, OverallRating, PriorityLevel, ReportId, ReportStatus, Timestamp,
    UserId,
};
use crate::domain::report::{PrioritySummary, QaReport, WebsiteDetails};
use crate::ports::ReportRepository;

/// PostgreSQL implementation of ReportRepository.
#[derive(Clone)]
pub struct PostgresReportRepository {
    pool: PgPool,
}

impl PostgresReportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReportRepository for PostgresReportRepository {
    async fn save(&self, report: &QaReport) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO qa_reports (
                id, created_by, website_name, url, date_reviewed, reviewer_name,
                priority_level, checklist_data, priority_summary, overall_rating,
                next_steps, status, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            "#,
        )
        .bind(report.id().as_uuid())
        .bind(report.created_by().as_str())
        .bind(&report.details().website_name)
        .bind(&report.details().url)
        .bind(report.details().date_reviewed)
        .bind(&report.details().reviewer_name)
        .bind(report.priority_level().as_str())
        .bind(to_json(report.checklist())?)
        .bind(to_json(report.priority_summary())?)
        .bind(report.overall_rating().map(|r| r.as_str()))
        .bind(to_json(&report.next_steps().to_vec())?)
        .bind(report.status().as_str())
        .bind(report.created_at().as_datetime())
        .bind(report.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to insert report: {}", e),
            )
        })?;

        Ok(())
    }

    async fn update(&self, report: &QaReport) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE qa_reports SET
                website_name = $2,
                url = $3,
                date_reviewed = $4,
                reviewer_name = $5,
                priority_level = $6,
                checklist_data = $7,
                priority_summary = $8,
                overall_rating = $9,
                next_steps = $10,
                status = $11,
                updated_at = $12
            WHERE id = $1
            "#,
        )
        .bind(report.id().as_uuid())
        .bind(&report.details().website_name)
        .bind(&report.details().url)
        .bind(report.details().date_reviewed)
        .bind(&report.details().reviewer_name)
        .bind(report.priority_level().as_str())
        .bind(to_json(report.checklist())?)
        .bind(to_json(report.priority_summary())?)
        .bind(report.overall_rating().map(|r| r.as_str()))
        .bind(to_json(&report.next_steps().to_vec())?)
        .bind(report.status().as_str())
        .bind(report.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to update report: {}", e),
            )
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::ReportNotFound,
                format!("Report not found: {}", report.id()),
            ));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &ReportId) -> Result<Option<QaReport>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, created_by, website_name, url, date_reviewed, reviewer_name,
                   priority_level, checklist_data, priority_summary, overall_rating,
                   next_steps, status, created_at, updated_at
            FROM qa_reports
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch report: {}", e),
            )
        })?;

        row.map(row_to_report).transpose()
    }

    async fn find_by_owner(&self, owner: &UserId) -> Result<Vec<QaReport>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, created_by, website_name, url, date_reviewed, reviewer_name,
                   priority_level, checklist_data, priority_summary, overall_rating,
                   next_steps, status, created_at, updated_at
            FROM qa_reports
            WHERE created_by = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(owner.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch reports by owner: {}", e),
            )
        })?;

        rows.into_iter().map(row_to_report).collect()
    }

    async fn delete(&self, id: &ReportId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM qa_reports WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to delete report: {}", e),
                )
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::ReportNotFound,
                format!("Report not found: {}", id),
            ));
        }

        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn to_json<T: serde::Serialize>(value: &T) -> Result<serde_json::Value, DomainError> {
    serde_json::to_value(value).map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to serialize column: {}", e),
        )
    })
}

fn column_error(column: &str, e: impl std::fmt::Display) -> DomainError {
    DomainError::new(
        ErrorCode::DatabaseError,
        format!("Failed to read {}: {}", column, e),
    )
}

fn row_to_report(row: sqlx::postgres::PgRow) -> Result<QaReport, DomainError> {
    let id: uuid::Uuid = row.try_get("id").map_err(|e| column_error("id", e))?;
    let created_by: String = row
        .try_get("created_by")
        .map_err(|e| column_error("created_by", e))?;
    let website_name: String = row
        .try_get("website_name")
        .map_err(|e| column_error("website_name", e))?;
    let url: String = row.try_get("url").map_err(|e| column_error("url", e))?;
    let date_reviewed: chrono::NaiveDate = row
        .try_get("date_reviewed")
        .map_err(|e| column_error("date_reviewed", e))?;
    let reviewer_name: String = row
        .try_get("reviewer_name")
        .map_err(|e| column_error("reviewer_name", e))?;

    let priority_level: String = row
        .try_get("priority_level")
        .map_err(|e| column_error("priority_level", e))?;
    let priority_level = PriorityLevel::from_str(&priority_level)
        .map_err(|e| column_error("priority_level", e))?;

    let checklist_data: serde_json::Value = row
        .try_get("checklist_data")
        .map_err(|e| column_error("checklist_data", e))?;
    let checklist: Checklist = serde_json::from_value(checklist_data)
        .map_err(|e| column_error("checklist_data", e))?;

    let priority_summary: serde_json::Value = row
        .try_get("priority_summary")
        .map_err(|e| column_error("priority_summary", e))?;
    let priority_summary: PrioritySummary = serde_json::from_value(priority_summary)
        .map_err(|e| column_error("priority_summary", e))?;

    let overall_rating: Option<String> = row
        .try_get("overall_rating")
        .map_err(|e| column_error("overall_rating", e))?;
    let overall_rating = overall_rating
        .map(|s| OverallRating::from_str(&s).map_err(|e| column_error("overall_rating", e)))
        .transpose()?;

    let next_steps: serde_json::Value = row
        .try_get("next_steps")
        .map_err(|e| column_error("next_steps", e))?;
    let next_steps: Vec<String> =
        serde_json::from_value(next_steps).map_err(|e| column_error("next_steps", e))?;

    let status: String = row.try_get("status").map_err(|e| column_error("status", e))?;
    let status = ReportStatus::from_str(&status).map_err(|e| column_error("status", e))?;

    let created_at: chrono::DateTime<chrono::Utc> = row
        .try_get("created_at")
        .map_err(|e| column_error("created_at", e))?;
    let updated_at: chrono::DateTime<chrono::Utc> = row
        .try_get("updated_at")
        .map_err(|e| column_error("updated_at", e))?;

    Ok(QaReport::reconstitute(
        ReportId::from_uuid(id),
        UserId::new(created_by).map_err(|e| column_error("created_by", e))?,
        WebsiteDetails {
            website_name,
            url,
            date_reviewed,
            reviewer_name,
        },
        priority_level,
        checklist,
        priority_summary,
        overall_rating,
        next_steps,
        status,
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}
