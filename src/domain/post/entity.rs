// src/domain/post/entity.rs
use crate::domain::slug::OwnerId;
use crate::domain::sluggable::Sluggable;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: OwnerId,
    pub name: String,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Sluggable for Post {
    const SLUGGABLE_TYPE: &'static str = "Post";

    fn id(&self) -> OwnerId {
        self.id
    }

    fn friendly_id_source(&self) -> Option<&str> {
        Some(&self.name)
    }
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub name: String,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct PostUpdate {
    pub id: OwnerId,
    pub name: Option<String>,
    pub published: Option<bool>,
    pub updated_at: DateTime<Utc>,
}

impl PostUpdate {
    pub fn new(id: OwnerId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: None,
            published: None,
            updated_at,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_published(mut self, published: bool) -> Self {
        self.published = Some(published);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post() -> Post {
        Post {
            id: OwnerId::new(1).unwrap(),
            name: "Test post".into(),
            published: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn update_builder_collects_changes() {
        let post = sample_post();
        let later = post.updated_at + chrono::Duration::seconds(5);
        let update = PostUpdate::new(post.id, later)
            .with_name("Changed title")
            .with_published(true);
        assert_eq!(update.name.as_deref(), Some("Changed title"));
        assert_eq!(update.published, Some(true));
        assert_eq!(update.updated_at, later);
    }

    #[test]
    fn posts_seed_slugs_from_their_name() {
        let post = sample_post();
        assert_eq!(post.friendly_id_source(), Some("Test post"));
        assert_eq!(Post::sluggable_type().as_str(), "Post");
        assert!(post.slug_scope().is_none());
    }
}
