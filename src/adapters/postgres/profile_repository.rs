//! PostgreSQL implementation of ProfileRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, UserId};
use crate::domain::profile::Profile;
use crate::ports::ProfileRepository;

/// PostgreSQL implementation of ProfileRepository.
#[derive(Clone)]
pub struct PostgresProfileRepository {
    pool: PgPool,
}

impl PostgresProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for PostgresProfileRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<Profile>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, email, full_name, avatar_url, created_at
            FROM profiles
            WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch profile: {}", e),
            )
        })?;

        row.map(row_to_profile).transpose()
    }

    async fn insert(&self, profile: &Profile) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO profiles (id, email, full_name, avatar_url, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(profile.id.as_str())
        .bind(&profile.email)
        .bind(&profile.full_name)
        .bind(&profile.avatar_url)
        .bind(profile.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to insert profile: {}", e),
            )
        })?;

        Ok(())
    }
}

fn column_error(column: &str, e: impl std::fmt::Display) -> DomainError {
    DomainError::new(
        ErrorCode::DatabaseError,
        format!("Failed to read {}: {}", column, e),
    )
}

fn row_to_profile(row: sqlx::postgres::PgRow) -> Result<Profile, DomainError> {
    let id: String = row.try_get("id").map_err(|e| column_error("id", e))?;
    let email: String = row.try_get("email").map_err(|e| column_error("email", e))?;
    let full_name: Option<String> = row
        .try_get("full_name")
        .map_err(|e| column_error("full_name", e))?;
    let avatar_url: Option<String> = row
        .try_get("avatar_url")
        .map_err(|e| column_error("avatar_url", e))?;
    let created_at: chrono::DateTime<chrono::Utc> = row
        .try_get("created_at")
        .map_err(|e| column_error("created_at", e))?;

    Ok(Profile {
        id: UserId::new(id).map_err(|e| column_error("id", e))?,
        email,
        full_name,
        avatar_url,
        created_at: Timestamp::from_datetime(created_at),
    })
}
