//! Parts catalog: immutable reference articles selected when composing
//! quote line items.

pub mod article;

pub use article::{ArticleId, CatalogArticle};
