use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::friendly_column::FriendlyColumn;
use crate::domain::slug::OwnerId;
use chrono::{DateTime, Utc};

/// An author addressed by a unique handle instead of a slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: OwnerId,
    pub handle: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl FriendlyColumn for Author {
    const RECORD_TYPE: &'static str = "Author";
    const COLUMN: &'static str = "handle";

    fn id(&self) -> OwnerId {
        self.id
    }

    fn friendly_id(&self) -> Option<&str> {
        Some(&self.handle)
    }
}

#[derive(Debug, Clone)]
pub struct NewAuthor {
    pub handle: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl NewAuthor {
    /// Handles are stored as given but may not be blank or contain a `/`.
    pub fn new(
        handle: impl Into<String>,
        name: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let handle = handle.into();
        if handle.trim().is_empty() {
            return Err(DomainError::Validation("handle can not be blank".into()));
        }
        if handle.contains('/') {
            return Err(DomainError::Validation(format!(
                "handle can not contain '/': {handle:?}"
            )));
        }
        Ok(Self {
            handle,
            name: name.into(),
            created_at,
        })
    }
}
