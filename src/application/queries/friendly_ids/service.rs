use std::marker::PhantomData;
use std::sync::Arc;

use super::ScopeDiagnostics;
use super::resolution::{FoundBy, Resolution};
use crate::domain::errors::DomainResult;
use crate::domain::slug::{Slug, SlugRepository};
use crate::domain::sluggable::{Identifier, RecordRepository, Sluggable};

/// Looks records of type `R` up by friendly id or primary key.
pub struct FriendlyIdQueryService<R: Sluggable> {
    pub(super) records: Arc<dyn RecordRepository<R>>,
    pub(super) slugs: Arc<dyn SlugRepository>,
    pub(super) diagnostics: ScopeDiagnostics,
    _record: PhantomData<fn() -> R>,
}

impl<R: Sluggable> FriendlyIdQueryService<R> {
    pub fn new(
        records: Arc<dyn RecordRepository<R>>,
        slugs: Arc<dyn SlugRepository>,
        scoped: bool,
    ) -> Self {
        Self {
            records,
            slugs,
            diagnostics: ScopeDiagnostics::new(scoped),
            _record: PhantomData,
        }
    }

    pub(super) async fn resolution(
        &self,
        record: R,
        identifier: Identifier,
        finder_slug: Option<Slug>,
    ) -> DomainResult<Resolution<R>> {
        let current_slug = self
            .slugs
            .latest_for_owner(record.id(), &R::sluggable_type())
            .await?;
        let found_by = if finder_slug.is_some() {
            FoundBy::FriendlyId
        } else {
            FoundBy::NumericId
        };
        Ok(Resolution {
            record,
            identifier,
            found_by,
            finder_slug,
            current_slug,
        })
    }
}
