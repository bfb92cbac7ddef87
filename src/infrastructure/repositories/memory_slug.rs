use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::{
    NewSlug, OwnerId, Sequence, Slug, SlugId, SlugRepository, SlugScope, SluggableType,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Mutex;

#[derive(Default)]
struct State {
    next_id: i64,
    /// Bumped on insert and touch; breaks `created_at` ties.
    next_order: u64,
    rows: Vec<(Slug, u64)>,
}

/// Slug store held in process memory, enforcing the same unique key as the
/// SQL schema.
#[derive(Default)]
pub struct InMemorySlugRepository {
    state: Mutex<State>,
}

impl InMemorySlugRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every stored slug, in insertion order.
    pub fn all(&self) -> DomainResult<Vec<Slug>> {
        let state = self.lock()?;
        let mut slugs: Vec<Slug> = state.rows.iter().map(|(slug, _)| slug.clone()).collect();
        slugs.sort_by_key(|slug| slug.id);
        Ok(slugs)
    }

    fn lock(&self) -> DomainResult<std::sync::MutexGuard<'_, State>> {
        self.state
            .lock()
            .map_err(|_| DomainError::Persistence("slug store lock poisoned".into()))
    }

    fn same_key(slug: &Slug, name: &str, scope: Option<&SlugScope>, ty: &SluggableType) -> bool {
        slug.name.as_str() == name && slug.scope.as_ref() == scope && slug.sluggable_type == *ty
    }

    fn owned_newest_first(
        state: &State,
        owner: OwnerId,
        sluggable_type: &SluggableType,
    ) -> Vec<Slug> {
        let mut owned: Vec<&(Slug, u64)> = state
            .rows
            .iter()
            .filter(|(slug, _)| slug.sluggable_id == owner && slug.sluggable_type == *sluggable_type)
            .collect();
        owned.sort_by(|(a, a_order), (b, b_order)| {
            (b.created_at, *b_order).cmp(&(a.created_at, *a_order))
        });
        owned.into_iter().map(|(slug, _)| slug.clone()).collect()
    }
}

#[async_trait]
impl SlugRepository for InMemorySlugRepository {
    async fn find_exact(
        &self,
        name: &str,
        scope: Option<&SlugScope>,
        sluggable_type: &SluggableType,
        sequence: Sequence,
    ) -> DomainResult<Option<Slug>> {
        let state = self.lock()?;
        Ok(state
            .rows
            .iter()
            .map(|(slug, _)| slug)
            .find(|slug| Self::same_key(slug, name, scope, sluggable_type) && slug.sequence == sequence)
            .cloned())
    }

    async fn find_by_name_scope(
        &self,
        name: &str,
        scope: Option<&SlugScope>,
        sluggable_type: &SluggableType,
    ) -> DomainResult<Vec<Slug>> {
        let state = self.lock()?;
        let mut slugs: Vec<Slug> = state
            .rows
            .iter()
            .map(|(slug, _)| slug)
            .filter(|slug| Self::same_key(slug, name, scope, sluggable_type))
            .cloned()
            .collect();
        slugs.sort_by_key(|slug| slug.sequence);
        Ok(slugs)
    }

    async fn latest_for_owner(
        &self,
        owner: OwnerId,
        sluggable_type: &SluggableType,
    ) -> DomainResult<Option<Slug>> {
        let state = self.lock()?;
        Ok(Self::owned_newest_first(&state, owner, sluggable_type)
            .into_iter()
            .next())
    }

    async fn history_for_owner(
        &self,
        owner: OwnerId,
        sluggable_type: &SluggableType,
    ) -> DomainResult<Vec<Slug>> {
        let state = self.lock()?;
        Ok(Self::owned_newest_first(&state, owner, sluggable_type))
    }

    async fn max_sequence(
        &self,
        name: &str,
        scope: Option<&SlugScope>,
        sluggable_type: &SluggableType,
    ) -> DomainResult<u32> {
        let state = self.lock()?;
        Ok(state
            .rows
            .iter()
            .map(|(slug, _)| slug)
            .filter(|slug| Self::same_key(slug, name, scope, sluggable_type))
            .map(|slug| slug.sequence.get())
            .max()
            .unwrap_or(0))
    }

    async fn insert(&self, slug: NewSlug) -> DomainResult<Slug> {
        let mut state = self.lock()?;
        let taken = state.rows.iter().any(|(existing, _)| {
            Self::same_key(
                existing,
                slug.name.as_str(),
                slug.scope.as_ref(),
                &slug.sluggable_type,
            ) && existing.sequence == slug.sequence
        });
        if taken {
            return Err(DomainError::Conflict("slug sequence already taken".into()));
        }

        state.next_id += 1;
        state.next_order += 1;
        let slug = slug.into_slug(SlugId(state.next_id));
        let order = state.next_order;
        state.rows.push((slug.clone(), order));
        Ok(slug)
    }

    async fn touch(&self, id: SlugId, at: DateTime<Utc>) -> DomainResult<Slug> {
        let mut state = self.lock()?;
        state.next_order += 1;
        let order = state.next_order;
        let (slug, slug_order) = state
            .rows
            .iter_mut()
            .find(|(slug, _)| slug.id == id)
            .ok_or_else(|| DomainError::Persistence(format!("slug {} vanished", id.0)))?;
        slug.created_at = at;
        *slug_order = order;
        Ok(slug.clone())
    }

    async fn delete_for_owner(
        &self,
        owner: OwnerId,
        sluggable_type: &SluggableType,
    ) -> DomainResult<u64> {
        let mut state = self.lock()?;
        let before = state.rows.len();
        state
            .rows
            .retain(|(slug, _)| !(slug.sluggable_id == owner && slug.sluggable_type == *sluggable_type));
        Ok((before - state.rows.len()) as u64)
    }
}
