pub mod authors;
pub mod posts;

pub use authors::{AuthorDto, ResolvedAuthorDto};
pub use posts::{PostDto, ResolvedPostDto};
