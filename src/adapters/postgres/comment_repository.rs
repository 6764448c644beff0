//! PostgreSQL implementation of CommentRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{CommentId, DomainError, ErrorCode, ReportId, Timestamp, UserId};
use crate::domain::report::Comment;
use crate::ports::CommentRepository;

/// PostgreSQL implementation of CommentRepository.
#[derive(Clone)]
pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn append(&self, comment: &Comment) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO qa_report_comments (
                id, report_id, user_id, section_key, comment_text, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(comment.id.as_uuid())
        .bind(comment.report_id.as_uuid())
        .bind(comment.user_id.as_str())
        .bind(&comment.section_key)
        .bind(&comment.comment_text)
        .bind(comment.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to insert comment: {}", e),
            )
        })?;

        Ok(())
    }

    async fn list_for_report(
        &self,
        report_id: &ReportId,
        section_key: Option<&str>,
    ) -> Result<Vec<Comment>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, report_id, user_id, section_key, comment_text, created_at
            FROM qa_report_comments
            WHERE report_id = $1
              AND ($2::text IS NULL OR section_key = $2)
            ORDER BY created_at ASC
            "#,
        )
        .bind(report_id.as_uuid())
        .bind(section_key)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch comments: {}", e),
            )
        })?;

        rows.into_iter().map(row_to_comment).collect()
    }
}

fn column_error(column: &str, e: impl std::fmt::Display) -> DomainError {
    DomainError::new(
        ErrorCode::DatabaseError,
        format!("Failed to read {}: {}", column, e),
    )
}

fn row_to_comment(row: sqlx::postgres::PgRow) -> Result<Comment, DomainError> {
    let id: uuid::Uuid = row.try_get("id").map_err(|e| column_error("id", e))?;
    let report_id: uuid::Uuid = row
        .try_get("report_id")
        .map_err(|e| column_error("report_id", e))?;
    let user_id: String = row
        .try_get("user_id")
        .map_err(|e| column_error("user_id", e))?;
    let section_key: String = row
        .try_get("section_key")
        .map_err(|e| column_error("section_key", e))?;
    let comment_text: String = row
        .try_get("comment_text")
        .map_err(|e| column_error("comment_text", e))?;
    let created_at: chrono::DateTime<chrono::Utc> = row
        .try_get("created_at")
        .map_err(|e| column_error("created_at", e))?;

    Ok(Comment {
        id: CommentId::from_uuid(id),
        report_id: ReportId::from_uuid(report_id),
        user_id: UserId::new(user_id).map_err(|e| column_error("user_id", e))?,
        section_key,
        comment_text,
        created_at: Timestamp::from_datetime(created_at),
    })
}
