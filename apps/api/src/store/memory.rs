use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{prepare_new, CandidateStore, StoreError};
use crate::models::candidate::{Candidate, CandidateFields};

/// Process-local store. The id counter lives under the same lock as the map,
/// so concurrent creates never share an id and deleted ids are never reissued.
#[derive(Default)]
pub struct MemoryCandidateStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    last_id: i64,
    rows: BTreeMap<i64, Candidate>,
}

impl MemoryCandidateStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CandidateStore for MemoryCandidateStore {
    async fn create(&self, fields: CandidateFields) -> Result<Candidate, StoreError> {
        let clean = prepare_new(&fields)?;
        let mut inner = self.inner.lock().await;
        inner.last_id += 1;
        let candidate = Candidate::from_fields(inner.last_id, clean);
        inner.rows.insert(candidate.id, candidate.clone());
        Ok(candidate)
    }

    async fn get(&self, id: i64) -> Result<Candidate, StoreError> {
        self.inner
            .lock()
            .await
            .rows
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    async fn list(&self) -> Result<Vec<Candidate>, StoreError> {
        Ok(self.inner.lock().await.rows.values().cloned().collect())
    }

    async fn list_by_technology(&self, term: &str) -> Result<Vec<Candidate>, StoreError> {
        Ok(self
            .inner
            .lock()
            .await
            .rows
            .values()
            .filter(|c| c.matches_technology(term))
            .cloned()
            .collect())
    }

    async fn update(&self, id: i64, fields: CandidateFields) -> Result<Candidate, StoreError> {
        let clean = fields.sanitized();
        let mut inner = self.inner.lock().await;
        let row = inner.rows.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        *row = Candidate::from_fields(id, clean);
        Ok(row.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        self.inner
            .lock()
            .await
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }
}
