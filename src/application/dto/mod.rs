pub mod articles;
pub mod pagination;

pub use articles::ArticleDto;
pub use pagination::{Page, PageMeta};
