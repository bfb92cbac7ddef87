// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{authors, posts};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, Router, routing::get};
use serde::Serialize;
use tower_http::trace::TraceLayer;

pub fn build_router(state: HttpState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/posts", get(posts::list_posts).post(posts::create_post))
        .route(
            "/posts/{id}",
            get(posts::show_post)
                .patch(posts::update_post)
                .delete(posts::delete_post),
        )
        .route(
            "/authors",
            get(authors::list_authors).post(authors::create_author),
        )
        .route("/authors/{id}", get(authors::show_author))
        .layer(TraceLayer::new_for_http())
        .layer(Extension(state))
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}
