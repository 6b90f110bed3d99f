// src/domain/article/filter.rs
use crate::domain::article::entity::Article;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;
pub const MAX_LIMIT: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortField {
    #[default]
    #[serde(rename = "createdAt")]
    CreatedAt,
    #[serde(rename = "updatedAt")]
    UpdatedAt,
    #[serde(rename = "title")]
    Title,
    #[serde(rename = "publishedAt")]
    PublishedAt,
    #[serde(rename = "viewCount")]
    ViewCount,
}

impl SortField {
    /// Column name used by SQL backends.
    pub fn column(self) -> &'static str {
        match self {
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
            Self::Title => "title",
            Self::PublishedAt => "published_at",
            Self::ViewCount => "view_count",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    #[serde(rename = "ASC")]
    Asc,
    #[default]
    #[serde(rename = "DESC")]
    Desc,
}

/// Conjunctive predicates plus sort and pagination over the article
/// collection. The in-memory store evaluates `matches`/`compare` directly;
/// the Postgres store compiles the same semantics to SQL.
#[derive(Debug, Clone, Default)]
pub struct ArticleFilter {
    pub page: u32,
    pub limit: u32,
    pub published: Option<bool>,
    pub author: Option<String>,
    pub tag: Option<String>,
    pub search: Option<String>,
    pub sort_by: SortField,
    pub order: SortOrder,
}

impl ArticleFilter {
    pub fn new() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            ..Self::default()
        }
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.limit)
    }

    /// True when the article satisfies every supplied predicate.
    pub fn matches(&self, article: &Article) -> bool {
        if let Some(published) = self.published
            && article.published != published
        {
            return false;
        }
        if let Some(author) = &self.author
            && !contains_ci(&article.author, author)
        {
            return false;
        }
        if let Some(tag) = &self.tag
            && !article.has_tag(tag)
        {
            return false;
        }
        if let Some(search) = &self.search
            && !contains_ci(&article.title, search)
            && !contains_ci(&article.content, search)
        {
            return false;
        }
        true
    }

    /// Total order for pagination: the requested field in the requested
    /// direction, then `created_at` ascending, then id. The secondary keys
    /// make page boundaries deterministic when the primary field ties.
    pub fn compare(&self, a: &Article, b: &Article) -> Ordering {
        let primary = match self.sort_by {
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
            SortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
            SortField::Title => a.title.cmp(&b.title),
            SortField::PublishedAt => a.published_at.cmp(&b.published_at),
            SortField::ViewCount => a.view_count.cmp(&b.view_count),
        };
        let primary = match self.order {
            SortOrder::Asc => primary,
            SortOrder::Desc => primary.reverse(),
        };
        primary
            .then_with(|| a.created_at.cmp(&b.created_at))
            .then_with(|| a.id.cmp(&b.id))
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
