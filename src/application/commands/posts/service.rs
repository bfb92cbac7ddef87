// src/application/commands/posts/service.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::slugs::SlugCommandService,
        dto::PostDto,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        post::{Post, PostWriteRepository},
        slug::OwnerId,
        sluggable::RecordRepository,
    },
};

pub struct PostCommandService {
    pub(super) write_repo: Arc<dyn PostWriteRepository>,
    pub(super) read_repo: Arc<dyn RecordRepository<Post>>,
    pub(super) slug_commands: Arc<SlugCommandService>,
    pub(super) clock: Arc<dyn Clock>,
}

impl PostCommandService {
    pub fn new(
        write_repo: Arc<dyn PostWriteRepository>,
        read_repo: Arc<dyn RecordRepository<Post>>,
        slug_commands: Arc<SlugCommandService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            slug_commands,
            clock,
        }
    }

    pub(super) async fn load(&self, id: i64) -> ApplicationResult<Post> {
        let id = OwnerId::new(id)?;
        self.read_repo
            .find_by_primary_key(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))
    }

    pub(super) async fn to_dto(&self, post: Post) -> ApplicationResult<PostDto> {
        let current = self.slug_commands.current_slug::<Post>(post.id).await?;
        Ok(PostDto::new(post, current.as_ref()))
    }
}
