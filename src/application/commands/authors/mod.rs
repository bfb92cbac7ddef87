mod create;
mod service;

pub use create::CreateAuthorCommand;
pub use service::AuthorCommandService;
