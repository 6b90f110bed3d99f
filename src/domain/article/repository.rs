use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle};
use crate::domain::article::filter::ArticleFilter;
use crate::domain::article::value_objects::{ArticleId, ArticleSlug};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Persistence contract for articles. Implementations enforce slug
/// uniqueness on insert and update, and perform the view-count increment
/// atomically so concurrent reads never lose a bump.
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;

    /// Plain lookup, no side effects. Used by update/delete paths.
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>>;

    /// Increments the view counter and returns the post-increment row.
    async fn fetch_and_bump_views(&self, id: ArticleId) -> DomainResult<Option<Article>>;

    async fn fetch_and_bump_views_by_slug(
        &self,
        slug: &ArticleSlug,
    ) -> DomainResult<Option<Article>>;

    /// Returns one page of matches plus the pre-pagination total count.
    async fn list(&self, filter: &ArticleFilter) -> DomainResult<(Vec<Article>, u64)>;

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;

    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}
