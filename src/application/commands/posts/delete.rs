use super::PostCommandService;
use crate::{application::error::ApplicationResult, domain::post::Post};

pub struct DeletePostCommand {
    pub id: i64,
}

impl PostCommandService {
    /// Deletes the post together with its whole slug history.
    pub async fn delete_post(&self, command: DeletePostCommand) -> ApplicationResult<()> {
        let post = self.load(command.id).await?;
        self.slug_commands.remove_slugs::<Post>(post.id).await?;
        self.write_repo.delete(post.id).await?;
        Ok(())
    }
}
