// tests/support/helpers.rs
use std::sync::Arc;

use axum::Router;
use friendly_ids::application::{
    commands::{posts::CreatePostCommand, slugs::SlugCommandService},
    dto::PostDto,
    options::FriendlyIdOptions,
    ports::time::Clock,
    queries::friendly_ids::FriendlyIdQueryService,
    services::ApplicationServices,
};
use friendly_ids::domain::author::{Author, AuthorWriteRepository};
use friendly_ids::domain::friendly_column::ColumnRecordRepository;
use friendly_ids::domain::post::{Post, PostWriteRepository};
use friendly_ids::domain::slug::{SequenceAssigner, SlugRepository};
use friendly_ids::domain::sluggable::{RecordRepository, Sluggable};
use friendly_ids::infrastructure::{
    repositories::InMemorySlugRepository, util::DefaultSlugNormalizer,
};
use friendly_ids::presentation::http::{routes::build_router, state::HttpState};

use super::mocks::{InMemoryAuthors, InMemoryRecords, SteppingClock};

/// Application wired to in-memory stores.
pub struct TestApp {
    pub services: Arc<ApplicationServices>,
    pub posts: Arc<InMemoryRecords<Post>>,
    pub authors: Arc<InMemoryAuthors>,
    pub slugs: Arc<InMemorySlugRepository>,
    pub clock: Arc<SteppingClock>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_options(FriendlyIdOptions::default())
    }

    pub fn with_options(options: FriendlyIdOptions) -> Self {
        let posts = Arc::new(InMemoryRecords::<Post>::new());
        let authors = Arc::new(InMemoryAuthors::new());
        let slugs = Arc::new(InMemorySlugRepository::new());
        let clock = Arc::new(SteppingClock::default());

        let services = ApplicationServices::new(
            Arc::clone(&posts) as Arc<dyn PostWriteRepository>,
            Arc::clone(&posts) as Arc<dyn RecordRepository<Post>>,
            Arc::clone(&authors) as Arc<dyn AuthorWriteRepository>,
            Arc::clone(&authors) as Arc<dyn ColumnRecordRepository<Author>>,
            Arc::clone(&slugs) as Arc<dyn SlugRepository>,
            Arc::clone(&clock) as Arc<dyn Clock>,
            Arc::new(DefaultSlugNormalizer),
            options,
        );

        Self {
            services: Arc::new(services),
            posts,
            authors,
            slugs,
            clock,
        }
    }

    pub async fn create_post(&self, name: &str) -> PostDto {
        let command = CreatePostCommand::builder()
            .name(name)
            .published(true)
            .build()
            .expect("valid create command");
        self.services
            .post_commands
            .create_post(command)
            .await
            .unwrap_or_else(|err| panic!("creating post {name:?} failed: {err}"))
    }

    pub fn router(&self) -> Router {
        build_router(HttpState {
            services: Arc::clone(&self.services),
        })
    }

    /// Query service over a different view of the post table.
    pub fn post_queries_over(
        &self,
        records: Arc<dyn RecordRepository<Post>>,
    ) -> FriendlyIdQueryService<Post> {
        FriendlyIdQueryService::new(records, Arc::clone(&self.slugs) as _, false)
    }
}

/// Slug commands and lookups for an arbitrary record type over a shared
/// slug store.
pub struct Sluggables<R: Sluggable> {
    pub records: Arc<InMemoryRecords<R>>,
    pub commands: SlugCommandService,
    pub queries: FriendlyIdQueryService<R>,
}

impl<R: Sluggable> Sluggables<R> {
    pub fn new(
        slugs: Arc<dyn SlugRepository>,
        clock: Arc<dyn Clock>,
        options: FriendlyIdOptions,
    ) -> Self {
        let records = Arc::new(InMemoryRecords::<R>::new());
        let assigner = Arc::new(SequenceAssigner::new(Arc::clone(&slugs), clock));
        let queries = FriendlyIdQueryService::new(
            Arc::clone(&records) as Arc<dyn RecordRepository<R>>,
            Arc::clone(&slugs),
            options.scoped,
        );
        let commands =
            SlugCommandService::new(assigner, slugs, Arc::new(DefaultSlugNormalizer), options);
        Self {
            records,
            commands,
            queries,
        }
    }

    /// Stores `record` and syncs its slug, the way a save hook would.
    pub async fn save(&self, record: R) -> R {
        self.records.put(record.clone());
        self.commands
            .sync_slug(&record)
            .await
            .unwrap_or_else(|err| panic!("slug sync failed: {err}"));
        record
    }
}

/// Reads a JSON body, asserting the status first.
pub async fn json_body(
    resp: axum::response::Response,
    expected_status: axum::http::StatusCode,
) -> serde_json::Value {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = axum::body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    serde_json::from_slice(&body_bytes).expect("expected valid json body")
}

/// Assert that a response is an error JSON with the expected status, error
/// string and message.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: axum::http::StatusCode,
    expected_error: &str,
    expected_message: &str,
) {
    let json = json_body(resp, expected_status).await;
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert_eq!(msg_field, expected_message);
}
