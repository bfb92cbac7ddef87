// src/domain/slug/services/mod.rs
use std::sync::Arc;

use crate::application::ports::time::Clock;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::entity::{NewSlug, Slug};
use crate::domain::slug::repository::SlugRepository;
use crate::domain::slug::value_objects::{OwnerId, Sequence, SlugName, SlugScope, SluggableType};

pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// Outcome of assigning a slug to an owning record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlugAssignment {
    /// The current slug already carries the candidate name.
    Unchanged(Slug),
    /// An older slug of the same owner was brought back as the current one.
    Reused(Slug),
    Created(Slug),
}

impl SlugAssignment {
    pub fn slug(&self) -> &Slug {
        match self {
            Self::Unchanged(slug) | Self::Reused(slug) | Self::Created(slug) => slug,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }
}

/// Domain service deciding whether an owner needs a new slug and which
/// sequence it gets. Concurrent writers are resolved by retrying the insert
/// against the store's uniqueness constraint.
pub struct SequenceAssigner {
    repo: Arc<dyn SlugRepository>,
    clock: Arc<dyn Clock>,
    max_attempts: u32,
}

impl SequenceAssigner {
    pub fn new(repo: Arc<dyn SlugRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            repo,
            clock,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub async fn assign(
        &self,
        owner: OwnerId,
        sluggable_type: &SluggableType,
        candidate: &str,
        scope: Option<SlugScope>,
    ) -> DomainResult<SlugAssignment> {
        if candidate.trim().is_empty() {
            return Err(DomainError::BlankSlug {
                attribute: "Slug".into(),
                text: candidate.to_string(),
            });
        }
        let name = SlugName::new(candidate)?;

        let history = self.repo.history_for_owner(owner, sluggable_type).await?;
        if let Some(current) = history.first() {
            if current.has_name_in_scope(&name, scope.as_ref()) {
                return Ok(SlugAssignment::Unchanged(current.clone()));
            }
        }

        if let Some(previous) = history
            .iter()
            .find(|slug| slug.has_name_in_scope(&name, scope.as_ref()))
        {
            let slug = self.repo.touch(previous.id, self.clock.now()).await?;
            tracing::info!(
                owner = %owner,
                sluggable_type = %sluggable_type,
                friendly_id = %slug.friendly_id(),
                "reused historical slug"
            );
            return Ok(SlugAssignment::Reused(slug));
        }

        self.insert_next(owner, sluggable_type, name, scope).await
    }

    async fn insert_next(
        &self,
        owner: OwnerId,
        sluggable_type: &SluggableType,
        name: SlugName,
        scope: Option<SlugScope>,
    ) -> DomainResult<SlugAssignment> {
        for attempt in 1..=self.max_attempts {
            let max = self
                .repo
                .max_sequence(name.as_str(), scope.as_ref(), sluggable_type)
                .await?;
            let new_slug = NewSlug {
                name: name.clone(),
                sequence: Sequence::after(max)?,
                scope: scope.clone(),
                sluggable_type: sluggable_type.clone(),
                sluggable_id: owner,
                created_at: self.clock.now(),
            };

            match self.repo.insert(new_slug).await {
                Ok(slug) => {
                    tracing::info!(
                        owner = %owner,
                        sluggable_type = %sluggable_type,
                        friendly_id = %slug.friendly_id(),
                        "created slug"
                    );
                    return Ok(SlugAssignment::Created(slug));
                }
                Err(DomainError::Conflict(reason)) => {
                    tracing::debug!(
                        attempt,
                        name = %name,
                        sequence = max + 1,
                        %reason,
                        "slug sequence taken by a concurrent writer, retrying"
                    );
                }
                Err(other) => return Err(other),
            }
        }

        tracing::warn!(
            name = %name,
            attempts = self.max_attempts,
            "giving up on slug sequence assignment"
        );
        Err(DomainError::SequenceAssignment {
            name: name.into_inner(),
            attempts: self.max_attempts,
        })
    }
}
