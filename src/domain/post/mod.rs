pub mod entity;
pub mod repository;

pub use entity::{NewPost, Post, PostUpdate};
pub use repository::PostWriteRepository;
