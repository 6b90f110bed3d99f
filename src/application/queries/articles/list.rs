use super::ArticleQueryService;
use crate::application::{
    dto::{ArticleDto, Page},
    error::ApplicationResult,
};
use crate::domain::article::{
    ArticleFilter, SortField, SortOrder,
    filter::{DEFAULT_LIMIT, DEFAULT_PAGE},
};

/// Optional listing parameters as they arrive from the query string.
/// Absent values fall back to the defaults, so a bare `GET /articles`
/// is the unfiltered collection ordered by creation time, newest first.
#[derive(Debug, Clone, Default)]
pub struct ListArticlesQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub published: Option<bool>,
    pub author: Option<String>,
    pub tag: Option<String>,
    pub search: Option<String>,
    pub sort_by: Option<SortField>,
    pub order: Option<SortOrder>,
}

impl ListArticlesQuery {
    fn into_filter(self) -> ArticleFilter {
        ArticleFilter {
            page: self.page.unwrap_or(DEFAULT_PAGE),
            limit: self.limit.unwrap_or(DEFAULT_LIMIT),
            published: self.published,
            author: self.author,
            tag: self.tag,
            search: self.search,
            sort_by: self.sort_by.unwrap_or_default(),
            order: self.order.unwrap_or_default(),
        }
    }
}

impl ArticleQueryService {
    /// Pure read: listing never touches view counters.
    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Page<ArticleDto>> {
        let filter = query.into_filter();
        let (records, total) = self.repo.list(&filter).await?;
        let items = records.into_iter().map(ArticleDto::from).collect();
        Ok(Page::new(items, total, filter.page, filter.limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_absent_params() {
        let filter = ListArticlesQuery::default().into_filter();
        assert_eq!(filter.page, 1);
        assert_eq!(filter.limit, 10);
        assert_eq!(filter.sort_by, SortField::CreatedAt);
        assert_eq!(filter.order, SortOrder::Desc);
        assert!(filter.published.is_none());
    }
}
