use crate::application::queries::friendly_columns::ColumnResolution;
use crate::domain::author::Author;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthorDto {
    pub id: i64,
    pub handle: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<Author> for AuthorDto {
    fn from(author: Author) -> Self {
        Self {
            id: author.id.into(),
            handle: author.handle,
            name: author.name,
            created_at: author.created_at,
        }
    }
}

/// An author together with how it was found.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResolvedAuthorDto {
    #[serde(flatten)]
    pub author: AuthorDto,
    pub found_using_friendly_id: bool,
    pub has_better_id: bool,
}

impl From<ColumnResolution<Author>> for ResolvedAuthorDto {
    fn from(resolution: ColumnResolution<Author>) -> Self {
        let found_using_friendly_id = resolution.found_using_friendly_id();
        let has_better_id = resolution.has_better_id();
        Self {
            author: AuthorDto::from(resolution.into_record()),
            found_using_friendly_id,
            has_better_id,
        }
    }
}
