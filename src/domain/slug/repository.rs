use crate::domain::errors::DomainResult;
use crate::domain::slug::entity::{NewSlug, Slug};
use crate::domain::slug::value_objects::{OwnerId, Sequence, SlugId, SlugScope, SluggableType};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Append-only store of slugs keyed by `(name, scope, sluggable_type, sequence)`.
#[async_trait]
pub trait SlugRepository: Send + Sync {
    async fn find_exact(
        &self,
        name: &str,
        scope: Option<&SlugScope>,
        sluggable_type: &SluggableType,
        sequence: Sequence,
    ) -> DomainResult<Option<Slug>>;

    /// Every sequence recorded under one name.
    async fn find_by_name_scope(
        &self,
        name: &str,
        scope: Option<&SlugScope>,
        sluggable_type: &SluggableType,
    ) -> DomainResult<Vec<Slug>>;

    /// The owner's current slug: most recently created, highest id on ties.
    async fn latest_for_owner(
        &self,
        owner: OwnerId,
        sluggable_type: &SluggableType,
    ) -> DomainResult<Option<Slug>>;

    /// All slugs of an owner, newest first.
    async fn history_for_owner(
        &self,
        owner: OwnerId,
        sluggable_type: &SluggableType,
    ) -> DomainResult<Vec<Slug>>;

    /// Highest sequence taken under one name, `0` when there is none.
    async fn max_sequence(
        &self,
        name: &str,
        scope: Option<&SlugScope>,
        sluggable_type: &SluggableType,
    ) -> DomainResult<u32>;

    /// Fails with `DomainError::Conflict` when the key is already taken.
    async fn insert(&self, slug: NewSlug) -> DomainResult<Slug>;

    /// Moves an existing slug to the front of its owner's history. Only the
    /// ordering timestamp changes.
    async fn touch(&self, id: SlugId, at: DateTime<Utc>) -> DomainResult<Slug>;

    async fn delete_for_owner(
        &self,
        owner: OwnerId,
        sluggable_type: &SluggableType,
    ) -> DomainResult<u64>;
}
