use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named grouping of notes and shortcuts inside one software package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    pub id: String,
    pub name: String,
    pub software_id: String,
    pub created_at: DateTime<Utc>,
}

impl Folder {
    pub fn new(name: String, software_id: String, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            software_id,
            created_at: now,
        }
    }

    /// Creation date in the short card format, e.g. `Jan 15, 2023`
    pub fn created_label(&self) -> String {
        self.created_at.format("%b %-d, %Y").to_string()
    }
}
