// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            authors::AuthorCommandService, posts::PostCommandService, slugs::SlugCommandService,
        },
        options::FriendlyIdOptions,
        ports::{time::Clock, util::SlugNormalizer},
        queries::{friendly_columns::ColumnQueryService, friendly_ids::FriendlyIdQueryService},
    },
    domain::{
        author::{Author, AuthorWriteRepository},
        friendly_column::ColumnRecordRepository,
        post::{Post, PostWriteRepository},
        slug::{SequenceAssigner, SlugRepository},
        sluggable::RecordRepository,
    },
};

pub struct ApplicationServices {
    pub post_commands: Arc<PostCommandService>,
    pub post_queries: Arc<FriendlyIdQueryService<Post>>,
    pub slug_commands: Arc<SlugCommandService>,
    pub author_commands: Arc<AuthorCommandService>,
    pub author_queries: Arc<ColumnQueryService<Author>>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        post_write_repo: Arc<dyn PostWriteRepository>,
        post_read_repo: Arc<dyn RecordRepository<Post>>,
        author_write_repo: Arc<dyn AuthorWriteRepository>,
        author_read_repo: Arc<dyn ColumnRecordRepository<Author>>,
        slug_repo: Arc<dyn SlugRepository>,
        clock: Arc<dyn Clock>,
        normalizer: Arc<dyn SlugNormalizer>,
        options: FriendlyIdOptions,
    ) -> Self {
        let assigner = Arc::new(
            SequenceAssigner::new(Arc::clone(&slug_repo), Arc::clone(&clock))
                .with_max_attempts(options.max_attempts),
        );

        let post_queries = Arc::new(FriendlyIdQueryService::new(
            Arc::clone(&post_read_repo),
            Arc::clone(&slug_repo),
            options.scoped,
        ));

        let slug_commands = Arc::new(SlugCommandService::new(
            assigner,
            Arc::clone(&slug_repo),
            Arc::clone(&normalizer),
            options,
        ));

        let post_commands = Arc::new(PostCommandService::new(
            Arc::clone(&post_write_repo),
            Arc::clone(&post_read_repo),
            Arc::clone(&slug_commands),
            Arc::clone(&clock),
        ));

        let author_commands = Arc::new(AuthorCommandService::new(
            author_write_repo,
            Arc::clone(&clock),
        ));
        let author_queries = Arc::new(ColumnQueryService::new(author_read_repo));

        Self {
            post_commands,
            post_queries,
            slug_commands,
            author_commands,
            author_queries,
        }
    }
}
