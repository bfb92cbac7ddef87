use super::SlugCommandService;
use crate::{
    application::error::ApplicationResult,
    domain::{
        slug::{OwnerId, Slug, SlugAssignment},
        sluggable::Sluggable,
    },
};

impl SlugCommandService {
    /// Run after a successful save of `record`: mints, reuses or keeps its slug.
    pub async fn sync_slug<R: Sluggable>(&self, record: &R) -> ApplicationResult<SlugAssignment> {
        let name = self.validate_source::<R>(record.friendly_id_source())?;
        let assignment = self
            .assigner
            .assign(record.id(), &R::sluggable_type(), &name, record.slug_scope())
            .await?;
        Ok(assignment)
    }

    pub async fn current_slug<R: Sluggable>(&self, owner: OwnerId) -> ApplicationResult<Option<Slug>> {
        Ok(self
            .slug_repo
            .latest_for_owner(owner, &R::sluggable_type())
            .await?)
    }

    pub async fn slug_history<R: Sluggable>(&self, owner: OwnerId) -> ApplicationResult<Vec<Slug>> {
        Ok(self
            .slug_repo
            .history_for_owner(owner, &R::sluggable_type())
            .await?)
    }

    /// Deletes every slug of a record that is itself being deleted.
    pub async fn remove_slugs<R: Sluggable>(&self, owner: OwnerId) -> ApplicationResult<u64> {
        let removed = self
            .slug_repo
            .delete_for_owner(owner, &R::sluggable_type())
            .await?;
        tracing::debug!(owner = %owner, removed, "removed slugs of deleted record");
        Ok(removed)
    }
}
