use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::{
    NewSlug, OwnerId, Sequence, Slug, SlugId, SlugName, SlugRepository, SlugScope, SluggableType,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

const SLUG_COLUMNS: &str = "id, name, sequence, scope, sluggable_type, sluggable_id, created_at";

#[derive(Clone)]
pub struct SqliteSlugRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteSlugRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct SlugRow {
    id: i64,
    name: String,
    sequence: i64,
    scope: String,
    sluggable_type: String,
    sluggable_id: i64,
    created_at: DateTime<Utc>,
}

impl TryFrom<SlugRow> for Slug {
    type Error = DomainError;

    fn try_from(row: SlugRow) -> Result<Self, Self::Error> {
        let sequence = u32::try_from(row.sequence)
            .map_err(|_| DomainError::Persistence(format!("invalid slug sequence {}", row.sequence)))?;
        Ok(Slug {
            id: SlugId::new(row.id)?,
            name: SlugName::new(row.name)?,
            sequence: Sequence::new(sequence)?,
            scope: scope_from_column(row.scope)?,
            sluggable_type: SluggableType::new(row.sluggable_type)?,
            sluggable_id: OwnerId::new(row.sluggable_id)?,
            created_at: row.created_at,
        })
    }
}

fn scope_column(scope: Option<&SlugScope>) -> &str {
    scope.map(SlugScope::as_str).unwrap_or("")
}

fn scope_from_column(scope: String) -> DomainResult<Option<SlugScope>> {
    if scope.is_empty() {
        Ok(None)
    } else {
        SlugScope::new(scope).map(Some)
    }
}

#[async_trait]
impl SlugRepository for SqliteSlugRepository {
    async fn find_exact(
        &self,
        name: &str,
        scope: Option<&SlugScope>,
        sluggable_type: &SluggableType,
        sequence: Sequence,
    ) -> DomainResult<Option<Slug>> {
        let row = sqlx::query_as::<_, SlugRow>(&format!(
            "SELECT {SLUG_COLUMNS} FROM slugs WHERE name = ? AND scope = ? AND sluggable_type = ? AND sequence = ?"
        ))
        .bind(name)
        .bind(scope_column(scope))
        .bind(sluggable_type.as_str())
        .bind(i64::from(sequence.get()))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Slug::try_from).transpose()
    }

    async fn find_by_name_scope(
        &self,
        name: &str,
        scope: Option<&SlugScope>,
        sluggable_type: &SluggableType,
    ) -> DomainResult<Vec<Slug>> {
        let rows = sqlx::query_as::<_, SlugRow>(&format!(
            "SELECT {SLUG_COLUMNS} FROM slugs WHERE name = ? AND scope = ? AND sluggable_type = ? ORDER BY sequence"
        ))
        .bind(name)
        .bind(scope_column(scope))
        .bind(sluggable_type.as_str())
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Slug::try_from).collect()
    }

    async fn latest_for_owner(
        &self,
        owner: OwnerId,
        sluggable_type: &SluggableType,
    ) -> DomainResult<Option<Slug>> {
        let row = sqlx::query_as::<_, SlugRow>(&format!(
            "SELECT {SLUG_COLUMNS} FROM slugs WHERE sluggable_type = ? AND sluggable_id = ? ORDER BY created_at DESC, id DESC LIMIT 1"
        ))
        .bind(sluggable_type.as_str())
        .bind(i64::from(owner))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Slug::try_from).transpose()
    }

    async fn history_for_owner(
        &self,
        owner: OwnerId,
        sluggable_type: &SluggableType,
    ) -> DomainResult<Vec<Slug>> {
        let rows = sqlx::query_as::<_, SlugRow>(&format!(
            "SELECT {SLUG_COLUMNS} FROM slugs WHERE sluggable_type = ? AND sluggable_id = ? ORDER BY created_at DESC, id DESC"
        ))
        .bind(sluggable_type.as_str())
        .bind(i64::from(owner))
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Slug::try_from).collect()
    }

    async fn max_sequence(
        &self,
        name: &str,
        scope: Option<&SlugScope>,
        sluggable_type: &SluggableType,
    ) -> DomainResult<u32> {
        let max: i64 = sqlx::query_scalar(
            "SELECT COALESCE(MAX(sequence), 0) FROM slugs WHERE name = ? AND scope = ? AND sluggable_type = ?",
        )
        .bind(name)
        .bind(scope_column(scope))
        .bind(sluggable_type.as_str())
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        u32::try_from(max)
            .map_err(|_| DomainError::Persistence(format!("invalid slug sequence {max}")))
    }

    async fn insert(&self, slug: NewSlug) -> DomainResult<Slug> {
        let NewSlug {
            name,
            sequence,
            scope,
            sluggable_type,
            sluggable_id,
            created_at,
        } = slug;

        let row = sqlx::query_as::<_, SlugRow>(&format!(
            "INSERT INTO slugs (name, sequence, scope, sluggable_type, sluggable_id, created_at) VALUES (?, ?, ?, ?, ?, ?) RETURNING {SLUG_COLUMNS}"
        ))
        .bind(name.as_str())
        .bind(i64::from(sequence.get()))
        .bind(scope_column(scope.as_ref()))
        .bind(sluggable_type.as_str())
        .bind(i64::from(sluggable_id))
        .bind(created_at)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Slug::try_from(row)
    }

    async fn touch(&self, id: SlugId, at: DateTime<Utc>) -> DomainResult<Slug> {
        let row = sqlx::query_as::<_, SlugRow>(&format!(
            "UPDATE slugs SET created_at = ? WHERE id = ? RETURNING {SLUG_COLUMNS}"
        ))
        .bind(at)
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.ok_or_else(|| DomainError::Persistence(format!("slug {} vanished", id.0)))
            .and_then(Slug::try_from)
    }

    async fn delete_for_owner(
        &self,
        owner: OwnerId,
        sluggable_type: &SluggableType,
    ) -> DomainResult<u64> {
        let result = sqlx::query("DELETE FROM slugs WHERE sluggable_type = ? AND sluggable_id = ?")
            .bind(sluggable_type.as_str())
            .bind(i64::from(owner))
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(result.rows_affected())
    }
}
