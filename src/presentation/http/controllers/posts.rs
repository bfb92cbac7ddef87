// src/presentation/http/controllers/posts.rs
use crate::application::{
    commands::posts::{CreatePostCommand, DeletePostCommand, UpdatePostCommand},
    dto::{PostDto, ResolvedPostDto},
    options::FindOptions,
};
use crate::domain::{slug::SlugScope, sluggable::Identifier};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::{StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ShowPostParams {
    #[serde(default)]
    pub scope: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ListPostsParams {
    /// Comma separated friendly ids and/or numeric ids.
    pub ids: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub limit: Option<usize>,
    #[serde(default)]
    pub offset: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub name: String,
    #[serde(default)]
    pub published: bool,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePostRequest {
    pub name: Option<String>,
    pub published: Option<bool>,
}

fn find_options(scope: Option<String>) -> HttpResult<FindOptions> {
    let scope = scope
        .filter(|s| !s.is_empty())
        .map(SlugScope::new)
        .transpose()
        .map_err(|err| HttpError::from_error(err.into()))?;
    Ok(FindOptions {
        scope,
        ..FindOptions::default()
    })
}

/// Path of the canonical post URL. Scoped slugs keep their scope in the
/// query so the redirect target resolves to the same record.
fn redirect_location(friendly_id: &str, scope: Option<&SlugScope>) -> HttpResult<String> {
    let path = format!("/posts/{friendly_id}");
    let Some(scope) = scope else {
        return Ok(path);
    };
    let query = serde_urlencoded::to_string([("scope", scope.as_str())])
        .map_err(|err| HttpError::internal(err.to_string()))?;
    Ok(format!("{path}?{query}"))
}

/// Shows a post by friendly id or numeric id. Lookups through a numeric id
/// or an outdated friendly id redirect permanently to the current one.
pub async fn show_post(
    Extension(state): Extension<HttpState>,
    Path(token): Path<String>,
    Query(params): Query<ShowPostParams>,
) -> HttpResult<Response> {
    let options = find_options(params.scope)?;
    let resolution = state
        .services
        .post_queries
        .resolve_one(Identifier::Token(token), &options)
        .await
        .into_http()?;

    if resolution.has_better_id() {
        if let Some(current) = &resolution.current_slug {
            let location = redirect_location(&current.friendly_id(), current.scope.as_ref())?;
            return Ok((StatusCode::MOVED_PERMANENTLY, [(LOCATION, location)]).into_response());
        }
    }

    Ok(Json(ResolvedPostDto::from(resolution)).into_response())
}

pub async fn list_posts(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ListPostsParams>,
) -> HttpResult<Json<Vec<ResolvedPostDto>>> {
    let identifiers: Vec<Identifier> = params
        .ids
        .as_deref()
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(Identifier::from)
        .collect();
    if identifiers.is_empty() {
        return Err(HttpError::bad_request("ids parameter is required"));
    }

    let mut options = find_options(params.scope)?;
    options.limit = params.limit;
    options.offset = params.offset;

    let resolutions = state
        .services
        .post_queries
        .resolve_many(&identifiers, &options)
        .await
        .into_http()?;

    Ok(Json(
        resolutions.into_iter().map(ResolvedPostDto::from).collect(),
    ))
}

pub async fn create_post(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreatePostRequest>,
) -> HttpResult<(StatusCode, Json<PostDto>)> {
    let command = CreatePostCommand {
        name: payload.name,
        published: payload.published,
    };

    state
        .services
        .post_commands
        .create_post(command)
        .await
        .into_http()
        .map(|post| (StatusCode::CREATED, Json(post)))
}

pub async fn update_post(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdatePostRequest>,
) -> HttpResult<Json<PostDto>> {
    let command = UpdatePostCommand {
        id,
        name: payload.name,
        published: payload.published,
    };

    state
        .services
        .post_commands
        .update_post(command)
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_post(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .post_commands
        .delete_post(DeletePostCommand { id })
        .await
        .into_http()
        .map(|_| StatusCode::NO_CONTENT)
}
