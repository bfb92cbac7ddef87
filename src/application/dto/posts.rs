use crate::application::queries::friendly_ids::Resolution;
use crate::domain::{post::Post, slug::Slug};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostDto {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friendly_id: Option<String>,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PostDto {
    pub fn new(post: Post, current_slug: Option<&Slug>) -> Self {
        Self {
            id: post.id.into(),
            name: post.name,
            friendly_id: current_slug.map(Slug::friendly_id),
            published: post.published,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// A post together with how it was found.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResolvedPostDto {
    #[serde(flatten)]
    pub post: PostDto,
    pub found_using_friendly_id: bool,
    pub has_better_id: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finder_slug: Option<String>,
}

impl From<Resolution<Post>> for ResolvedPostDto {
    fn from(resolution: Resolution<Post>) -> Self {
        let found_using_friendly_id = resolution.found_using_friendly_id();
        let has_better_id = resolution.has_better_id();
        let finder_slug = resolution.finder_slug.as_ref().map(Slug::friendly_id);
        Self {
            post: PostDto::new(resolution.record, resolution.current_slug.as_ref()),
            found_using_friendly_id,
            has_better_id,
            finder_slug,
        }
    }
}
