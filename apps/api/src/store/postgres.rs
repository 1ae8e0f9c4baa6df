use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;

use super::{prepare_new, CandidateStore, StoreError};
use crate::models::candidate::{Candidate, CandidateFields};

/// Durable store backed by the `candidates` table. Ids come from the table's
/// BIGSERIAL sequence, and each mutation is a single auto-committed statement.
#[derive(Clone)]
pub struct PgCandidateStore {
    pool: PgPool,
}

impl PgCandidateStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CandidateStore for PgCandidateStore {
    async fn create(&self, fields: CandidateFields) -> Result<Candidate, StoreError> {
        let clean = prepare_new(&fields)?;
        let candidate = sqlx::query_as::<_, Candidate>(
            r#"
            INSERT INTO candidates (name, email, technology, resume_text)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, technology, resume_text
            "#,
        )
        .bind(&clean.name)
        .bind(&clean.email)
        .bind(&clean.technology)
        .bind(&clean.resume_text)
        .fetch_one(&self.pool)
        .await?;

        info!("Inserted candidate {}", candidate.id);
        Ok(candidate)
    }

    async fn get(&self, id: i64) -> Result<Candidate, StoreError> {
        sqlx::query_as::<_, Candidate>(
            "SELECT id, name, email, technology, resume_text FROM candidates WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound(id))
    }

    async fn list(&self) -> Result<Vec<Candidate>, StoreError> {
        let rows = sqlx::query_as::<_, Candidate>(
            "SELECT id, name, email, technology, resume_text FROM candidates ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn list_by_technology(&self, term: &str) -> Result<Vec<Candidate>, StoreError> {
        // strpos rather than ILIKE so `%` and `_` in the term match literally.
        let rows = sqlx::query_as::<_, Candidate>(
            r#"
            SELECT id, name, email, technology, resume_text
            FROM candidates
            WHERE strpos(lower(technology), lower($1)) > 0
            ORDER BY id
            "#,
        )
        .bind(term)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn update(&self, id: i64, fields: CandidateFields) -> Result<Candidate, StoreError> {
        let clean = fields.sanitized();
        let candidate = sqlx::query_as::<_, Candidate>(
            r#"
            UPDATE candidates
            SET name = $2, email = $3, technology = $4, resume_text = $5
            WHERE id = $1
            RETURNING id, name, email, technology, resume_text
            "#,
        )
        .bind(id)
        .bind(&clean.name)
        .bind(&clean.email)
        .bind(&clean.technology)
        .bind(&clean.resume_text)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound(id))?;

        info!("Updated candidate {id}");
        Ok(candidate)
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM candidates WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        info!("Deleted candidate {id}");
        Ok(())
    }
}
