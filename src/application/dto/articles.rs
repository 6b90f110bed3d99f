use crate::domain::article::Article;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Wire shape for a single article. Field names follow the public API
/// (camelCase), timestamps serialize as RFC 3339.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub author: String,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub tags: Vec<String>,
    pub view_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title,
            slug: article.slug.into(),
            content: article.content,
            summary: article.summary,
            author: article.author,
            published: article.published,
            published_at: article.published_at,
            tags: article.tags,
            view_count: article.view_count,
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}
