use crate::application::{
    commands::authors::CreateAuthorCommand,
    dto::{AuthorDto, ResolvedAuthorDto},
};
use crate::domain::sluggable::{Identifier, Pagination};
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
pub struct ListAuthorsParams {
    /// Comma separated handles and/or numeric ids.
    pub ids: Option<String>,
    #[serde(default)]
    pub limit: Option<usize>,
    #[serde(default)]
    pub offset: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct CreateAuthorRequest {
    pub handle: String,
    pub name: String,
}

/// Shows an author by handle or numeric id. Numeric lookups redirect
/// permanently to the handle.
pub async fn show_author(
    Extension(state): Extension<HttpState>,
    Path(token): Path<String>,
) -> HttpResult<Response> {
    let resolution = state
        .services
        .author_queries
        .resolve_one(Identifier::Token(token))
        .await
        .into_http()?;

    if resolution.has_better_id() {
        if let Some(handle) = resolution.friendly_id() {
            let location = format!("/authors/{handle}");
            return Ok((StatusCode::MOVED_PERMANENTLY, [(LOCATION, location)]).into_response());
        }
    }

    Ok(Json(ResolvedAuthorDto::from(resolution)).into_response())
}

pub async fn list_authors(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ListAuthorsParams>,
) -> HttpResult<Json<Vec<ResolvedAuthorDto>>> {
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

    let pagination = Pagination {
        limit: params.limit,
        offset: params.offset,
    };
    let resolutions = state
        .services
        .author_queries
        .resolve_many(&identifiers, pagination)
        .await
        .into_http()?;

    Ok(Json(
        resolutions.into_iter().map(ResolvedAuthorDto::from).collect(),
    ))
}

pub async fn create_author(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateAuthorRequest>,
) -> HttpResult<(StatusCode, Json<AuthorDto>)> {
    let command = CreateAuthorCommand {
        handle: payload.handle,
        name: payload.name,
    };

    state
        .services
        .author_commands
        .create_author(command)
        .await
        .into_http()
        .map(|author| (StatusCode::CREATED, Json(author)))
}
