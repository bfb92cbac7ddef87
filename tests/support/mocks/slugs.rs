// tests/support/mocks/slugs.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use friendly_ids::domain::errors::{DomainError, DomainResult};
use friendly_ids::domain::slug::{
    NewSlug, OwnerId, Sequence, Slug, SlugId, SlugRepository, SlugScope, SluggableType,
};
use friendly_ids::infrastructure::repositories::InMemorySlugRepository;

/// Wraps a real store and lets a rival writer claim the next sequence right
/// before each of the first `races` inserts.
pub struct RacingSlugRepo {
    pub inner: Arc<InMemorySlugRepository>,
    races: AtomicU32,
    rival: OwnerId,
}

impl RacingSlugRepo {
    pub fn new(inner: Arc<InMemorySlugRepository>, races: u32, rival: OwnerId) -> Self {
        Self {
            inner,
            races: AtomicU32::new(races),
            rival,
        }
    }
}

#[async_trait]
impl SlugRepository for RacingSlugRepo {
    async fn find_exact(
        &self,
        name: &str,
        scope: Option<&SlugScope>,
        sluggable_type: &SluggableType,
        sequence: Sequence,
    ) -> DomainResult<Option<Slug>> {
        self.inner.find_exact(name, scope, sluggable_type, sequence).await
    }

    async fn find_by_name_scope(
        &self,
        name: &str,
        scope: Option<&SlugScope>,
        sluggable_type: &SluggableType,
    ) -> DomainResult<Vec<Slug>> {
        self.inner.find_by_name_scope(name, scope, sluggable_type).await
    }

    async fn latest_for_owner(
        &self,
        owner: OwnerId,
        sluggable_type: &SluggableType,
    ) -> DomainResult<Option<Slug>> {
        self.inner.latest_for_owner(owner, sluggable_type).await
    }

    async fn history_for_owner(
        &self,
        owner: OwnerId,
        sluggable_type: &SluggableType,
    ) -> DomainResult<Vec<Slug>> {
        self.inner.history_for_owner(owner, sluggable_type).await
    }

    async fn max_sequence(
        &self,
        name: &str,
        scope: Option<&SlugScope>,
        sluggable_type: &SluggableType,
    ) -> DomainResult<u32> {
        self.inner.max_sequence(name, scope, sluggable_type).await
    }

    async fn insert(&self, slug: NewSlug) -> DomainResult<Slug> {
        let race = self
            .races
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if race {
            let rival = NewSlug {
                sluggable_id: self.rival,
                ..slug.clone()
            };
            self.inner.insert(rival).await?;
        }
        self.inner.insert(slug).await
    }

    async fn touch(&self, id: SlugId, at: DateTime<Utc>) -> DomainResult<Slug> {
        self.inner.touch(id, at).await
    }

    async fn delete_for_owner(
        &self,
        owner: OwnerId,
        sluggable_type: &SluggableType,
    ) -> DomainResult<u64> {
        self.inner.delete_for_owner(owner, sluggable_type).await
    }
}

/// Store whose inserts always fail with a persistence error.
pub struct FailingSlugRepo;

#[async_trait]
impl SlugRepository for FailingSlugRepo {
    async fn find_exact(
        &self,
        _name: &str,
        _scope: Option<&SlugScope>,
        _sluggable_type: &SluggableType,
        _sequence: Sequence,
    ) -> DomainResult<Option<Slug>> {
        Ok(None)
    }

    async fn find_by_name_scope(
        &self,
        _name: &str,
        _scope: Option<&SlugScope>,
        _sluggable_type: &SluggableType,
    ) -> DomainResult<Vec<Slug>> {
        Ok(vec![])
    }

    async fn latest_for_owner(
        &self,
        _owner: OwnerId,
        _sluggable_type: &SluggableType,
    ) -> DomainResult<Option<Slug>> {
        Ok(None)
    }

    async fn history_for_owner(
        &self,
        _owner: OwnerId,
        _sluggable_type: &SluggableType,
    ) -> DomainResult<Vec<Slug>> {
        Ok(vec![])
    }

    async fn max_sequence(
        &self,
        _name: &str,
        _scope: Option<&SlugScope>,
        _sluggable_type: &SluggableType,
    ) -> DomainResult<u32> {
        Ok(0)
    }

    async fn insert(&self, _slug: NewSlug) -> DomainResult<Slug> {
        Err(DomainError::Persistence("disk full".into()))
    }

    async fn touch(&self, _id: SlugId, _at: DateTime<Utc>) -> DomainResult<Slug> {
        Err(DomainError::Persistence("disk full".into()))
    }

    async fn delete_for_owner(
        &self,
        _owner: OwnerId,
        _sluggable_type: &SluggableType,
    ) -> DomainResult<u64> {
        Ok(0)
    }
}
