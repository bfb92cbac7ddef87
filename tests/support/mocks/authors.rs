use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Mutex;

use friendly_ids::domain::author::{Author, AuthorWriteRepository, NewAuthor};
use friendly_ids::domain::errors::{DomainError, DomainResult};
use friendly_ids::domain::friendly_column::{ColumnFilter, ColumnRecordRepository};
use friendly_ids::domain::slug::OwnerId;
use friendly_ids::domain::sluggable::Pagination;

/// Authors table with a unique handle.
#[derive(Default)]
pub struct InMemoryAuthors {
    rows: Mutex<BTreeMap<i64, Author>>,
}

impl InMemoryAuthors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores an author under an explicit id.
    pub fn put(&self, id: i64, handle: &str, name: &str) -> Author {
        let author = Author {
            id: OwnerId(id),
            handle: handle.to_string(),
            name: name.to_string(),
            created_at: super::fixed_now(),
        };
        self.rows.lock().unwrap().insert(id, author.clone());
        author
    }

    pub fn all(&self) -> Vec<Author> {
        self.rows.lock().unwrap().values().cloned().collect()
    }
}

#[async_trait]
impl AuthorWriteRepository for InMemoryAuthors {
    async fn insert(&self, author: NewAuthor) -> DomainResult<Author> {
        let mut rows = self.rows.lock().unwrap();
        if rows.values().any(|row| row.handle == author.handle) {
            return Err(DomainError::Conflict("author handle already taken".into()));
        }
        let id = rows.keys().next_back().copied().unwrap_or(0) + 1;
        let author = Author {
            id: OwnerId(id),
            handle: author.handle,
            name: author.name,
            created_at: author.created_at,
        };
        rows.insert(id, author.clone());
        Ok(author)
    }
}

#[async_trait]
impl ColumnRecordRepository<Author> for InMemoryAuthors {
    async fn find_by_primary_key(&self, id: OwnerId) -> DomainResult<Option<Author>> {
        Ok(self.rows.lock().unwrap().get(&i64::from(id)).cloned())
    }

    async fn find_by_friendly_column(&self, value: &str) -> DomainResult<Option<Author>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .find(|row| row.handle == value)
            .cloned())
    }

    async fn find_where(
        &self,
        filter: &ColumnFilter,
        pagination: Pagination,
    ) -> DomainResult<Vec<Author>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .values()
            .filter(|row| filter.ids.contains(&row.id) || filter.values.contains(&row.handle))
            .skip(pagination.offset.unwrap_or(0))
            .take(pagination.limit.unwrap_or(usize::MAX))
            .cloned()
            .collect())
    }
}
