pub mod entity;
pub mod filter;
pub mod repository;
pub mod slug;
pub mod value_objects;

pub use entity::{Article, ArticleUpdate, NewArticle, PublishStateUpdate};
pub use filter::{ArticleFilter, SortField, SortOrder};
pub use repository::ArticleRepository;
pub use slug::slugify;
pub use value_objects::{ArticleId, ArticleSlug};
