use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{NewPost, Post, PostUpdate, PostWriteRepository};
use crate::domain::slug::OwnerId;
use crate::domain::sluggable::{Pagination, RecordFilter, RecordRepository, Sluggable};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use std::sync::Arc;

const POST_COLUMNS: &str = "posts.id, posts.name, posts.published, posts.created_at, posts.updated_at";

/// Posts table. `published()` gives a view that only sees published posts.
#[derive(Clone)]
pub struct SqlitePostRepository {
    pool: Arc<SqlitePool>,
    published_only: bool,
}

impl SqlitePostRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            pool,
            published_only: false,
        }
    }

    pub fn published(&self) -> Self {
        Self {
            pool: Arc::clone(&self.pool),
            published_only: true,
        }
    }
}

#[derive(Debug, FromRow)]
struct PostRow {
    id: i64,
    name: String,
    published: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PostRow> for Post {
    type Error = DomainError;

    fn try_from(row: PostRow) -> Result<Self, Self::Error> {
        Ok(Post {
            id: OwnerId::new(row.id)?,
            name: row.name,
            published: row.published != 0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl PostWriteRepository for SqlitePostRepository {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let NewPost {
            name,
            published,
            created_at,
            updated_at,
        } = post;

        let row = sqlx::query_as::<_, PostRow>(
            "INSERT INTO posts (name, published, created_at, updated_at) VALUES (?, ?, ?, ?) RETURNING id, name, published, created_at, updated_at",
        )
        .bind(name)
        .bind(if published { 1 } else { 0 })
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Post::try_from(row)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let PostUpdate {
            id,
            name,
            published,
            updated_at,
        } = update;

        let row = sqlx::query_as::<_, PostRow>(
            "UPDATE posts SET name = COALESCE(?, name), published = COALESCE(?, published), updated_at = ? WHERE id = ? RETURNING id, name, published, created_at, updated_at",
        )
        .bind(name)
        .bind(published.map(|p| if p { 1 } else { 0 }))
        .bind(updated_at)
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.ok_or_else(|| DomainError::Persistence(format!("post {id} not found")))
            .and_then(Post::try_from)
    }

    async fn delete(&self, id: OwnerId) -> DomainResult<()> {
        sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }
}

#[async_trait]
impl RecordRepository<Post> for SqlitePostRepository {
    async fn find_by_primary_key(&self, id: OwnerId) -> DomainResult<Option<Post>> {
        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {POST_COLUMNS} FROM posts WHERE posts.id = "));
        builder.push_bind(i64::from(id));
        if self.published_only {
            builder.push(" AND posts.published = 1");
        }

        let row = builder
            .build_query_as::<PostRow>()
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Post::try_from).transpose()
    }

    async fn find_where(
        &self,
        filter: &RecordFilter,
        pagination: Pagination,
    ) -> DomainResult<Vec<Post>> {
        if filter.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(format!(
            "SELECT DISTINCT {POST_COLUMNS} FROM posts LEFT JOIN slugs ON slugs.sluggable_id = posts.id AND slugs.sluggable_type = "
        ));
        builder.push_bind(Post::SLUGGABLE_TYPE);
        builder.push(" WHERE (");

        let mut has_clause = false;
        if !filter.ids.is_empty() {
            builder.push("posts.id IN (");
            let mut ids = builder.separated(", ");
            for id in &filter.ids {
                ids.push_bind(i64::from(*id));
            }
            builder.push(")");
            has_clause = true;
        }
        if !filter.slugs.is_empty() {
            if has_clause {
                builder.push(" OR ");
            }
            builder.push("slugs.id IN (");
            let mut slug_ids = builder.separated(", ");
            for slug_id in filter.slug_ids() {
                slug_ids.push_bind(i64::from(slug_id));
            }
            builder.push(")");
        }
        builder.push(")");

        if self.published_only {
            builder.push(" AND posts.published = 1");
        }

        builder.push(" ORDER BY posts.id LIMIT ");
        builder.push_bind(pagination.limit.map(|l| l as i64).unwrap_or(-1));
        builder.push(" OFFSET ");
        builder.push_bind(pagination.offset.unwrap_or(0) as i64);

        let rows = builder
            .build_query_as::<PostRow>()
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Post::try_from).collect()
    }
}
