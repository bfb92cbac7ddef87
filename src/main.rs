use friendly_ids::application::{
    ports::{time::Clock, util::SlugNormalizer},
    services::ApplicationServices,
};
use friendly_ids::config::AppConfig;
use friendly_ids::domain::{
    author::{Author, AuthorWriteRepository},
    friendly_column::ColumnRecordRepository,
    post::{Post, PostWriteRepository},
    slug::SlugRepository,
    sluggable::RecordRepository,
};
use friendly_ids::infrastructure::{
    database,
    repositories::{SqliteAuthorRepository, SqlitePostRepository, SqliteSlugRepository},
    time::SystemClock,
    util::DefaultSlugNormalizer,
};
use friendly_ids::presentation::http::{routes::build_router, state::HttpState};
use anyhow::Result;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;
    let pool = Arc::new(pool);

    let posts = SqlitePostRepository::new(Arc::clone(&pool));
    let post_write_repo: Arc<dyn PostWriteRepository> = Arc::new(posts.clone());
    let post_read_repo: Arc<dyn RecordRepository<Post>> = Arc::new(posts);
    let authors = SqliteAuthorRepository::new(Arc::clone(&pool));
    let author_write_repo: Arc<dyn AuthorWriteRepository> = Arc::new(authors.clone());
    let author_read_repo: Arc<dyn ColumnRecordRepository<Author>> = Arc::new(authors);
    let slug_repo: Arc<dyn SlugRepository> = Arc::new(SqliteSlugRepository::new(Arc::clone(&pool)));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let normalizer: Arc<dyn SlugNormalizer> = Arc::new(DefaultSlugNormalizer);

    let services = Arc::new(ApplicationServices::new(
        post_write_repo,
        post_read_repo,
        author_write_repo,
        author_read_repo,
        slug_repo,
        clock,
        normalizer,
        config.friendly_ids().clone(),
    ));

    let app = build_router(HttpState { services });

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
