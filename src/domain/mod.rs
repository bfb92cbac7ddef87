pub mod author;
pub mod errors;
pub mod friendly_column;
pub mod post;
pub mod slug;
pub mod sluggable;
