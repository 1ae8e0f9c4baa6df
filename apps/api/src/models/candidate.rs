use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

use crate::sanitize::sanitize;

/// A stored résumé submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub technology: String,
    pub resume_text: String,
}

/// The four caller-supplied text fields, used for both create and update.
/// Absent and `null` fields both read as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CandidateFields {
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub technology: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub resume_text: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl CandidateFields {
    /// Returns a copy with every field passed through [`sanitize`].
    pub fn sanitized(&self) -> Self {
        Self {
            name: sanitize(&self.name),
            email: sanitize(&self.email),
            technology: sanitize(&self.technology),
            resume_text: sanitize(&self.resume_text),
        }
    }

    pub fn has_resume_text(&self) -> bool {
        !self.resume_text.trim().is_empty()
    }
}

impl Candidate {
    pub fn from_fields(id: i64, fields: CandidateFields) -> Self {
        let CandidateFields {
            name,
            email,
            technology,
            resume_text,
        } = fields;
        Self {
            id,
            name,
            email,
            technology,
            resume_text,
        }
    }

    /// Case-insensitive substring match on `technology`. An empty term matches everything.
    pub fn matches_technology(&self, term: &str) -> bool {
        term.is_empty()
            || self
                .technology
                .to_lowercase()
                .contains(&term.to_lowercase())
    }
}
