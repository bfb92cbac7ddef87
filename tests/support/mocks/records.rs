// tests/support/mocks/records.rs
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Mutex;

use friendly_ids::domain::errors::{DomainError, DomainResult};
use friendly_ids::domain::post::{NewPost, Post, PostUpdate, PostWriteRepository};
use friendly_ids::domain::slug::OwnerId;
use friendly_ids::domain::sluggable::{Pagination, RecordFilter, RecordRepository, Sluggable};

/// Record table for any sluggable type, optionally seen through a filter
/// (the equivalent of a named scope).
pub struct InMemoryRecords<R> {
    rows: Mutex<BTreeMap<i64, R>>,
    next_id: Mutex<i64>,
    visible: Option<fn(&R) -> bool>,
}

impl<R: Sluggable> InMemoryRecords<R> {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(BTreeMap::new()),
            next_id: Mutex::new(0),
            visible: None,
        }
    }

    /// A view over the same kind of table that hides rows failing `visible`.
    pub fn filtered(rows: Vec<R>, visible: fn(&R) -> bool) -> Self {
        let this = Self {
            visible: Some(visible),
            ..Self::new()
        };
        for row in rows {
            this.put(row);
        }
        this
    }

    pub fn put(&self, record: R) {
        let id = i64::from(record.id());
        let mut next = self.next_id.lock().unwrap();
        *next = (*next).max(id);
        self.rows.lock().unwrap().insert(id, record);
    }

    pub fn next_id(&self) -> OwnerId {
        let mut next = self.next_id.lock().unwrap();
        *next += 1;
        OwnerId(*next)
    }

    pub fn all(&self) -> Vec<R> {
        self.rows.lock().unwrap().values().cloned().collect()
    }

    fn is_visible(&self, record: &R) -> bool {
        self.visible.map(|f| f(record)).unwrap_or(true)
    }
}

#[async_trait]
impl<R: Sluggable> RecordRepository<R> for InMemoryRecords<R> {
    async fn find_by_primary_key(&self, id: OwnerId) -> DomainResult<Option<R>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .get(&i64::from(id))
            .filter(|r| self.is_visible(r))
            .cloned())
    }

    async fn find_where(
        &self,
        filter: &RecordFilter,
        pagination: Pagination,
    ) -> DomainResult<Vec<R>> {
        let rows = self.rows.lock().unwrap();
        let matched = filter
            .owner_ids()
            .into_iter()
            .filter_map(|id| rows.get(&i64::from(id)))
            .filter(|r| self.is_visible(r))
            .cloned()
            .skip(pagination.offset.unwrap_or(0))
            .take(pagination.limit.unwrap_or(usize::MAX))
            .collect();
        Ok(matched)
    }
}

#[async_trait]
impl PostWriteRepository for InMemoryRecords<Post> {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let post = Post {
            id: self.next_id(),
            name: post.name,
            published: post.published,
            created_at: post.created_at,
            updated_at: post.updated_at,
        };
        self.put(post.clone());
        Ok(post)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let mut rows = self.rows.lock().unwrap();
        let post = rows
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::Persistence("post not found".into()))?;
        if let Some(name) = update.name {
            post.name = name;
        }
        if let Some(published) = update.published {
            post.published = published;
        }
        post.updated_at = update.updated_at;
        Ok(post.clone())
    }

    async fn delete(&self, id: OwnerId) -> DomainResult<()> {
        self.rows.lock().unwrap().remove(&i64::from(id));
        Ok(())
    }
}
