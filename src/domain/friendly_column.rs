use crate::domain::errors::DomainResult;
use crate::domain::slug::OwnerId;
use crate::domain::sluggable::Pagination;
use async_trait::async_trait;

/// A record type whose friendly id is a unique column of its own table,
/// with no slug history behind it.
pub trait FriendlyColumn: Clone + Send + Sync + 'static {
    /// Name used in lookup errors.
    const RECORD_TYPE: &'static str;
    /// The unique column holding the friendly id.
    const COLUMN: &'static str;

    fn id(&self) -> OwnerId;

    fn friendly_id(&self) -> Option<&str>;
}

/// Records matched by primary key or by friendly column value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnFilter {
    pub ids: Vec<OwnerId>,
    pub values: Vec<String>,
}

impl ColumnFilter {
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty() && self.values.is_empty()
    }
}

/// Persistence collaborator for a friendly column record type.
#[async_trait]
pub trait ColumnRecordRepository<R: FriendlyColumn>: Send + Sync {
    async fn find_by_primary_key(&self, id: OwnerId) -> DomainResult<Option<R>>;

    /// Exact, case-sensitive match on the friendly column.
    async fn find_by_friendly_column(&self, value: &str) -> DomainResult<Option<R>>;

    /// Ordered by primary key; each record appears once.
    async fn find_where(&self, filter: &ColumnFilter, pagination: Pagination)
    -> DomainResult<Vec<R>>;
}
