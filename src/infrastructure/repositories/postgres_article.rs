// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleFilter, ArticleId, ArticleRepository, ArticleSlug, ArticleUpdate, NewArticle,
    SortOrder,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const COLUMNS: &str = "id, title, slug, content, summary, author, published, published_at, \
                       tags, view_count, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresArticleRepository {
    pool: PgPool,
}

impl PostgresArticleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    slug: String,
    content: String,
    summary: Option<String>,
    author: String,
    published: bool,
    published_at: Option<DateTime<Utc>>,
    tags: Vec<String>,
    view_count: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            title: row.title,
            slug: ArticleSlug::new(row.slug)?,
            content: row.content,
            summary: row.summary,
            author: row.author,
            published: row.published,
            published_at: row.published_at,
            tags: row.tags,
            view_count: row.view_count,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Appends the filter's predicates as a WHERE clause. Shared between the
/// page query and the count query so both see the same matches.
fn push_conditions<'a>(builder: &mut QueryBuilder<'a, Postgres>, filter: &'a ArticleFilter) {
    let mut has_where = false;
    let mut sep = |builder: &mut QueryBuilder<'a, Postgres>| {
        if has_where {
            builder.push(" AND ");
        } else {
            builder.push(" WHERE ");
            has_where = true;
        }
    };

    if let Some(published) = filter.published {
        sep(builder);
        builder.push("published = ");
        builder.push_bind(published);
    }
    if let Some(author) = &filter.author {
        sep(builder);
        builder.push("author ILIKE ");
        builder.push_bind(format!("%{}%", escape_like(author)));
    }
    if let Some(tag) = &filter.tag {
        sep(builder);
        builder.push_bind(tag.as_str());
        builder.push(" = ANY(tags)");
    }
    if let Some(search) = &filter.search {
        let pattern = format!("%{}%", escape_like(search));
        sep(builder);
        builder.push("(title ILIKE ");
        builder.push_bind(pattern.clone());
        builder.push(" OR content ILIKE ");
        builder.push_bind(pattern);
        builder.push(")");
    }
}

fn push_ordering(builder: &mut QueryBuilder<'_, Postgres>, filter: &ArticleFilter) {
    builder.push(" ORDER BY ");
    builder.push(filter.sort_by.column());
    // NULLS placement mirrors the in-memory comparator, where a missing
    // published_at sorts below every timestamp.
    match filter.order {
        SortOrder::Asc => builder.push(" ASC NULLS FIRST"),
        SortOrder::Desc => builder.push(" DESC NULLS LAST"),
    };
    builder.push(", created_at ASC, id ASC");
}

fn escape_like(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[async_trait]
impl ArticleRepository for PostgresArticleRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            slug,
            content,
            summary,
            author,
            published,
            published_at,
            tags,
            created_at,
            updated_at,
        } = article;

        let row = sqlx::query_as::<_, ArticleRow>(
            "INSERT INTO articles (title, slug, content, summary, author, published, published_at, tags, view_count, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, 0, $9, $10)
             RETURNING id, title, slug, content, summary, author, published, published_at, tags, view_count, created_at, updated_at",
        )
        .bind(title)
        .bind(slug.as_str())
        .bind(content)
        .bind(summary)
        .bind(author)
        .bind(published)
        .bind(published_at)
        .bind(tags)
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {COLUMNS} FROM articles WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {COLUMNS} FROM articles WHERE slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn fetch_and_bump_views(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "UPDATE articles SET view_count = view_count + 1 WHERE id = $1 RETURNING {COLUMNS}"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn fetch_and_bump_views_by_slug(
        &self,
        slug: &ArticleSlug,
    ) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "UPDATE articles SET view_count = view_count + 1 WHERE slug = $1 RETURNING {COLUMNS}"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn list(&self, filter: &ArticleFilter) -> DomainResult<(Vec<Article>, u64)> {
        let mut count_builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM articles");
        push_conditions(&mut count_builder, filter);
        let total: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {COLUMNS} FROM articles"));
        push_conditions(&mut builder, filter);
        push_ordering(&mut builder, filter);
        builder.push(" LIMIT ");
        builder.push_bind(i64::from(filter.limit));
        builder.push(" OFFSET ");
        builder.push_bind(i64::try_from(filter.offset()).unwrap_or(i64::MAX));

        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let articles = rows
            .into_iter()
            .map(Article::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((articles, u64::try_from(total).unwrap_or(0)))
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            id,
            title,
            slug,
            content,
            summary,
            author,
            tags,
            publish_state,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE articles SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(title);
        }
        if let Some(slug) = slug {
            let slug_str: String = slug.into();
            builder.push(", slug = ");
            builder.push_bind(slug_str);
        }
        if let Some(content) = content {
            builder.push(", content = ");
            builder.push_bind(content);
        }
        if let Some(summary) = summary {
            builder.push(", summary = ");
            builder.push_bind(summary);
        }
        if let Some(author) = author {
            builder.push(", author = ");
            builder.push_bind(author);
        }
        if let Some(tags) = tags {
            builder.push(", tags = ");
            builder.push_bind(tags);
        }
        if let Some(state) = publish_state {
            builder.push(", published = ");
            builder.push_bind(state.published);
            builder.push(", published_at = ");
            builder.push_bind(state.published_at);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(format!(" RETURNING {COLUMNS}"));

        let maybe_row = builder
            .build_query_as::<ArticleRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let row = maybe_row.ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        Article::try_from(row)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}
