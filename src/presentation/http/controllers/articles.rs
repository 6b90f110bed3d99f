// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, UpdateArticleCommand},
    dto::{ArticleDto, Page},
    queries::articles::ListArticlesQuery,
    validation,
};
use crate::domain::article::{SortField, SortOrder};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateArticleRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub summary: Option<String>,
    pub author: String,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateArticleRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub summary: Option<String>,
    pub author: Option<String>,
    pub published: Option<bool>,
    pub tags: Option<Vec<String>>,
}

/// Query-string names are the public API's camelCase ones; unknown `sortBy`
/// or `order` values fail enum deserialization and come back as a 400.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListArticlesParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub published: Option<bool>,
    pub author: Option<String>,
    pub tag: Option<String>,
    pub search: Option<String>,
    pub sort_by: Option<SortField>,
    pub order: Option<SortOrder>,
}

pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let command = CreateArticleCommand {
        title: payload.title,
        content: payload.content,
        summary: payload.summary,
        author: payload.author,
        published: payload.published,
        tags: payload.tags,
    };
    validation::validate_create(&command)
        .map_err(validation::into_validation_error)
        .into_http()?;

    let article = state
        .services
        .article_commands
        .create_article(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(article)))
}

pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ListArticlesParams>,
) -> HttpResult<Json<Page<ArticleDto>>> {
    let query = ListArticlesQuery {
        page: params.page,
        limit: params.limit,
        published: params.published,
        author: params.author,
        tag: params.tag,
        search: params.search,
        sort_by: params.sort_by,
        order: params.order,
    };
    validation::validate_listing(&query)
        .map_err(validation::into_validation_error)
        .into_http()?;

    state
        .services
        .article_queries
        .list_articles(query)
        .await
        .into_http()
        .map(Json)
}

pub async fn get_article_by_id(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_id(id)
        .await
        .into_http()
        .map(Json)
}

pub async fn get_article_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_slug(slug)
        .await
        .into_http()
        .map(Json)
}

pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = UpdateArticleCommand {
        title: payload.title,
        content: payload.content,
        summary: payload.summary,
        author: payload.author,
        published: payload.published,
        tags: payload.tags,
    };
    validation::validate_update(&command)
        .map_err(validation::into_validation_error)
        .into_http()?;

    state
        .services
        .article_commands
        .update_article(id, command)
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .article_commands
        .delete_article(id)
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
