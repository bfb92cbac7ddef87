// src/application/commands/posts/create.rs
use super::PostCommandService;
use crate::{
    application::{dto::PostDto, error::ApplicationResult},
    domain::post::{NewPost, Post},
};

pub struct CreatePostCommand {
    pub name: String,
    pub published: bool,
}

impl CreatePostCommand {
    pub fn builder() -> CreatePostCommandBuilder {
        CreatePostCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreatePostCommandBuilder {
    name: Option<String>,
    published: bool,
}

impl CreatePostCommandBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn published(mut self, published: bool) -> Self {
        self.published = published;
        self
    }

    pub fn build(self) -> Result<CreatePostCommand, &'static str> {
        Ok(CreatePostCommand {
            name: self.name.ok_or("name is required")?,
            published: self.published,
        })
    }
}

impl PostCommandService {
    pub async fn create_post(&self, command: CreatePostCommand) -> ApplicationResult<PostDto> {
        self.slug_commands
            .validate_source::<Post>(Some(&command.name))?;

        let now = self.clock.now();
        let created = self
            .write_repo
            .insert(NewPost {
                name: command.name,
                published: command.published,
                created_at: now,
                updated_at: now,
            })
            .await?;

        // The post is only kept once it holds a slug.
        if let Err(err) = self.slug_commands.sync_slug(&created).await {
            tracing::warn!(post_id = %created.id, error = %err, "rolling back post without slug");
            self.write_repo.delete(created.id).await?;
            return Err(err);
        }

        self.to_dto(created).await
    }
}
