use crate::domain::errors::DomainResult;
use crate::domain::post::entity::{NewPost, Post, PostUpdate};
use crate::domain::slug::OwnerId;
use async_trait::async_trait;

/// Write side for posts. Reads go through `RecordRepository<Post>`.
#[async_trait]
pub trait PostWriteRepository: Send + Sync {
    async fn insert(&self, post: NewPost) -> DomainResult<Post>;
    async fn update(&self, update: PostUpdate) -> DomainResult<Post>;
    async fn delete(&self, id: OwnerId) -> DomainResult<()>;
}
