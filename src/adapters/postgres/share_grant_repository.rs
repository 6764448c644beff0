//! PostgreSQL implementation of ShareGrantRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ErrorCode, ReportId, Timestamp, UserId};
use crate::ports::{ShareGrant, ShareGrantRepository};

/// PostgreSQL implementation of ShareGrantRepository.
#[derive(Clone)]
pub struct PostgresShareGrantRepository {
    pool: PgPool,
}

impl PostgresShareGrantRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShareGrantRepository for PostgresShareGrantRepository {
    async fn insert(&self, grant: &ShareGrant) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO share_grants (token, report_id, created_by, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(&grant.token)
        .bind(grant.report_id.as_uuid())
        .bind(grant.created_by.as_str())
        .bind(grant.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to insert share grant: {}", e),
            )
        })?;

        Ok(())
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<ShareGrant>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT token, report_id, created_by, created_at
            FROM share_grants
            WHERE token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch share grant: {}", e),
            )
        })?;

        row.map(row_to_grant).transpose()
    }
}

fn column_error(column: &str, e: impl std::fmt::Display) -> DomainError {
    DomainError::new(
        ErrorCode::DatabaseError,
        format!("Failed to read {}: {}", column, e),
    )
}

fn row_to_grant(row: sqlx::postgres::PgRow) -> Result<ShareGrant, DomainError> {
    let token: String = row.try_get("token").map_err(|e| column_error("token", e))?;
    let report_id: uuid::Uuid = row
        .try_get("report_id")
        .map_err(|e| column_error("report_id", e))?;
    let created_by: String = row
        .try_get("created_by")
        .map_err(|e| column_error("created_by", e))?;
    let created_at: chrono::DateTime<chrono::Utc> = row
        .try_get("created_at")
        .map_err(|e| column_error("created_at", e))?;

    Ok(ShareGrant {
        token,
        report_id: ReportId::from_uuid(report_id),
        created_by: UserId::new(created_by).map_err(|e| column_error("created_by", e))?,
        created_at: Timestamp::from_datetime(created_at),
    })
}
