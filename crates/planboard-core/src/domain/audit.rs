//! Audit metadata shared by every entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Label recorded as creator when no acting user is known
pub const SYSTEM_ACTOR: &str = "system";

/// Creation and last-update stamps of an entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditInfo {
    /// When the entity was created
    pub created_at: DateTime<Utc>,
    /// Who created the entity
    pub created_by: String,
    /// When the entity was last updated, `None` if never
    pub updated_at: Option<DateTime<Utc>>,
    /// Who last updated the entity
    pub updated_by: Option<String>,
}

impl AuditInfo {
    /// Stamp a new entity as created now
    pub fn created_by(actor: impl Into<String>) -> Self {
        Self {
            created_at: Utc::now(),
            created_by: actor.into(),
            updated_at: None,
            updated_by: None,
        }
    }

    /// Record an update made now
    pub fn touch(&mut self, actor: impl Into<String>) {
        self.updated_at = Some(Utc::now());
        self.updated_by = Some(actor.into());
    }

    pub fn was_updated(&self) -> bool {
        self.updated_at.is_some()
    }
}
