use super::PostCommandService;
use crate::{
    application::{dto::PostDto, error::ApplicationResult},
    domain::post::{Post, PostUpdate},
};

pub struct UpdatePostCommand {
    pub id: i64,
    pub name: Option<String>,
    pub published: Option<bool>,
}

impl PostCommandService {
    pub async fn update_post(&self, command: UpdatePostCommand) -> ApplicationResult<PostDto> {
        let post = self.load(command.id).await?;

        let UpdatePostCommand {
            id: _,
            name,
            published,
        } = command;
        let mut update = PostUpdate::new(post.id, self.clock.now());

        // Reject the new name before anything is written.
        if let Some(name) = name {
            self.slug_commands.validate_source::<Post>(Some(&name))?;
            update = update.with_name(name);
        }
        if let Some(published) = published {
            update = update.with_published(published);
        }

        let updated = self.write_repo.update(update).await?;

        // A rename that cannot be slugged is undone so the post keeps its slug.
        if let Err(err) = self.slug_commands.sync_slug(&updated).await {
            tracing::warn!(post_id = %post.id, error = %err, "reverting post update without slug");
            let restore = PostUpdate::new(post.id, post.updated_at)
                .with_name(post.name)
                .with_published(post.published);
            self.write_repo.update(restore).await?;
            return Err(err);
        }

        self.to_dto(updated).await
    }
}
