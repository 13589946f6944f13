//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod article_repo;
pub mod user_repo;

pub use article_repo::ArticleRepo;
pub use user_repo::UserRepo;
