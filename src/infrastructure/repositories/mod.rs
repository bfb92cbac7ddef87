// src/infrastructure/repositories/mod.rs
mod error;
mod memory_slug;
mod sqlite_author;
mod sqlite_post;
mod sqlite_slug;

pub use error::map_sqlx;
pub use memory_slug::InMemorySlugRepository;
pub use sqlite_author::SqliteAuthorRepository;
pub use sqlite_post::SqlitePostRepository;
pub use sqlite_slug::SqliteSlugRepository;
