pub mod entity;
pub mod repository;

pub use entity::{Author, NewAuthor};
pub use repository::AuthorWriteRepository;
