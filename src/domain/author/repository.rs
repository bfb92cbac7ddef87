use crate::domain::author::entity::{Author, NewAuthor};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Write side for authors. Reads go through `ColumnRecordRepository<Author>`.
#[async_trait]
pub trait AuthorWriteRepository: Send + Sync {
    /// Fails with `Conflict` when the handle is taken.
    async fn insert(&self, author: NewAuthor) -> DomainResult<Author>;
}
