use super::AuthorCommandService;
use crate::{
    application::{dto::AuthorDto, error::ApplicationResult},
    domain::author::NewAuthor,
};

pub struct CreateAuthorCommand {
    pub handle: String,
    pub name: String,
}

impl AuthorCommandService {
    pub async fn create_author(&self, command: CreateAuthorCommand) -> ApplicationResult<AuthorDto> {
        let new_author = NewAuthor::new(command.handle, command.name, self.clock.now())?;
        let author = self.write_repo.insert(new_author).await?;
        tracing::info!(author_id = %author.id, handle = %author.handle, "author created");
        Ok(AuthorDto::from(author))
    }
}
