use super::map_sqlx;
use crate::domain::author::{Author, AuthorWriteRepository, NewAuthor};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::friendly_column::{ColumnFilter, ColumnRecordRepository};
use crate::domain::slug::OwnerId;
use crate::domain::sluggable::Pagination;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use std::sync::Arc;

const AUTHOR_COLUMNS: &str = "id, handle, name, created_at";

/// Authors table, addressed by the unique `handle` column.
#[derive(Clone)]
pub struct SqliteAuthorRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteAuthorRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AuthorRow {
    id: i64,
    handle: String,
    name: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<AuthorRow> for Author {
    type Error = DomainError;

    fn try_from(row: AuthorRow) -> Result<Self, Self::Error> {
        Ok(Author {
            id: OwnerId::new(row.id)?,
            handle: row.handle,
            name: row.name,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl AuthorWriteRepository for SqliteAuthorRepository {
    async fn insert(&self, author: NewAuthor) -> DomainResult<Author> {
        let NewAuthor {
            handle,
            name,
            created_at,
        } = author;

        let row = sqlx::query_as::<_, AuthorRow>(
            "INSERT INTO authors (handle, name, created_at) VALUES (?, ?, ?) RETURNING id, handle, name, created_at",
        )
        .bind(handle)
        .bind(name)
        .bind(created_at)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Author::try_from(row)
    }
}

#[async_trait]
impl ColumnRecordRepository<Author> for SqliteAuthorRepository {
    async fn find_by_primary_key(&self, id: OwnerId) -> DomainResult<Option<Author>> {
        let row = sqlx::query_as::<_, AuthorRow>(&format!(
            "SELECT {AUTHOR_COLUMNS} FROM authors WHERE id = ?"
        ))
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Author::try_from).transpose()
    }

    async fn find_by_friendly_column(&self, value: &str) -> DomainResult<Option<Author>> {
        let row = sqlx::query_as::<_, AuthorRow>(&format!(
            "SELECT {AUTHOR_COLUMNS} FROM authors WHERE handle = ?"
        ))
        .bind(value)
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Author::try_from).transpose()
    }

    async fn find_where(
        &self,
        filter: &ColumnFilter,
        pagination: Pagination,
    ) -> DomainResult<Vec<Author>> {
        if filter.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {AUTHOR_COLUMNS} FROM authors WHERE "));

        let mut has_clause = false;
        if !filter.ids.is_empty() {
            builder.push("id IN (");
            let mut ids = builder.separated(", ");
            for id in &filter.ids {
                ids.push_bind(i64::from(*id));
            }
            builder.push(")");
            has_clause = true;
        }
        if !filter.values.is_empty() {
            if has_clause {
                builder.push(" OR ");
            }
            builder.push("handle IN (");
            let mut handles = builder.separated(", ");
            for handle in &filter.values {
                handles.push_bind(handle.clone());
            }
            builder.push(")");
        }

        builder.push(" ORDER BY id LIMIT ");
        builder.push_bind(pagination.limit.map(|l| l as i64).unwrap_or(-1));
        builder.push(" OFFSET ");
        builder.push_bind(pagination.offset.unwrap_or(0) as i64);

        let rows = builder
            .build_query_as::<AuthorRow>()
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Author::try_from).collect()
    }
}
