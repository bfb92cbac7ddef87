use super::{FriendlyIdQueryService, Resolution};
use crate::{
    application::{error::ApplicationResult, options::FindOptions},
    domain::{
        errors::{DomainResult, RecordNotFound},
        slug::{FriendlyId, OwnerId, codec},
        sluggable::{Identifier, Pagination, RecordFilter, Sluggable},
    },
};

impl<R: Sluggable> FriendlyIdQueryService<R> {
    /// Resolves one friendly id or primary key to its record.
    ///
    /// String tokens are tried as friendly ids first; a token made only of
    /// digits falls back to a primary key lookup when no slug matches.
    pub async fn resolve_one(
        &self,
        identifier: impl Into<Identifier>,
        options: &FindOptions,
    ) -> ApplicationResult<Resolution<R>> {
        let identifier = identifier.into();
        self.lookup_one(identifier, options)
            .await
            .map_err(|err| self.diagnostics.annotate(err, options.scope.as_ref()).into())
    }

    async fn lookup_one(
        &self,
        identifier: Identifier,
        options: &FindOptions,
    ) -> DomainResult<Resolution<R>> {
        let token = match &identifier {
            Identifier::Id(id) => return self.by_primary_key(*id, identifier.clone()).await,
            Identifier::Token(token) => token.clone(),
        };

        let friendly = FriendlyId::parse(&token);
        let sluggable_type = R::sluggable_type();
        if let Some(slug) = self
            .slugs
            .find_exact(
                &friendly.name,
                options.scope.as_ref(),
                &sluggable_type,
                friendly.sequence,
            )
            .await?
        {
            let filter = RecordFilter {
                ids: Vec::new(),
                slugs: vec![slug.clone()],
            };
            let found = self
                .records
                .find_where(&filter, Pagination::default())
                .await?
                .into_iter()
                .find(|record| record.id() == slug.sluggable_id);
            if let Some(record) = found {
                return self.resolution(record, identifier, Some(slug)).await;
            }
        }

        match codec::numeric_id(&token) {
            Some(id) => self.by_primary_key(OwnerId(id), identifier).await,
            None => {
                tracing::debug!(token = %token, record_type = R::SLUGGABLE_TYPE, "no slug matches token");
                Err(RecordNotFound::single(R::SLUGGABLE_TYPE, token).into())
            }
        }
    }

    async fn by_primary_key(
        &self,
        id: OwnerId,
        identifier: Identifier,
    ) -> DomainResult<Resolution<R>> {
        match self.records.find_by_primary_key(id).await? {
            Some(record) => self.resolution(record, identifier, None).await,
            None => Err(RecordNotFound::single(R::SLUGGABLE_TYPE, identifier.to_string()).into()),
        }
    }
}
