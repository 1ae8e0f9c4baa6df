//! Candidate Store: CRUD persistence for candidate records.
//!
//! `AppState` holds an `Arc<dyn CandidateStore>`: `PgCandidateStore` when a
//! database is configured, `MemoryCandidateStore` otherwise (and in tests).
//! Every implementation sanitizes fields itself, so nothing unsanitized can be
//! persisted regardless of the caller.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::candidate::{Candidate, CandidateFields};

pub mod memory;
pub mod postgres;

pub use memory::MemoryCandidateStore;
pub use postgres::PgCandidateStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Candidate {0} not found")]
    NotFound(i64),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[async_trait]
pub trait CandidateStore: Send + Sync {
    /// Sanitizes and stores a new candidate, assigning a fresh id.
    /// Fails with `InvalidInput` when the résumé text is blank.
    async fn create(&self, fields: CandidateFields) -> Result<Candidate, StoreError>;

    async fn get(&self, id: i64) -> Result<Candidate, StoreError>;

    async fn list(&self) -> Result<Vec<Candidate>, StoreError>;

    /// Case-insensitive substring match on `technology`; empty term returns all.
    async fn list_by_technology(&self, term: &str) -> Result<Vec<Candidate>, StoreError>;

    /// Replaces all four text fields with sanitized values. `id` is never changed.
    async fn update(&self, id: i64, fields: CandidateFields) -> Result<Candidate, StoreError>;

    async fn delete(&self, id: i64) -> Result<(), StoreError>;
}

/// Shared create-path preparation: sanitize, then require résumé text.
pub(crate) fn prepare_new(fields: &CandidateFields) -> Result<CandidateFields, StoreError> {
    if !fields.has_resume_text() {
        return Err(StoreError::InvalidInput(
            "resumeText cannot be empty".to_string(),
        ));
    }
    let clean = fields.sanitized();
    if !clean.has_resume_text() {
        return Err(StoreError::InvalidInput(
            "resumeText has no usable content after sanitization".to_string(),
        ));
    }
    Ok(clean)
}
