use thiserror::Error;

use crate::domain::blog::{Blog, BlogListQuery, NewBlog, UpdateBlog};
use crate::domain::product::{NewProduct, Product, ProductListQuery, UpdateProduct};

pub mod blog;
pub mod product;

#[cfg(test)]
pub mod mock;

pub use blog::InMemoryBlogRepository;
pub use product::JsonProductRepository;

/// Errors surfaced by the storage layer.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The referenced record does not exist.
    #[error("record not found")]
    NotFound,
    /// Backing file could not be written or read.
    #[error("storage I/O failure: {0}")]
    Io(#[from] std::io::Error),
    /// Backing file contents could not be serialized.
    #[error("storage serialization failure: {0}")]
    Serialization(#[from] serde_json::Error),
    /// A store lock was poisoned by a panicking writer.
    #[error("store lock poisoned")]
    Poisoned,
}

/// Result type returned by all repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Read-only operations over the product catalog.
pub trait ProductReader {
    fn get_product_by_id(&self, id: &str) -> RepositoryResult<Option<Product>>;
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<Product>>;
}

/// Write operations over the product catalog.
pub trait ProductWriter {
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
    fn update_product(&self, id: &str, updates: &UpdateProduct) -> RepositoryResult<Product>;
    fn delete_product(&self, id: &str) -> RepositoryResult<()>;
}

/// Read-only operations over blog posts.
pub trait BlogReader {
    fn get_blog_by_id(&self, id: &str) -> RepositoryResult<Option<Blog>>;
    fn list_blogs(&self, query: BlogListQuery) -> RepositoryResult<Vec<Blog>>;
}

/// Write operations over blog posts.
pub trait BlogWriter {
    fn create_blog(&self, new_blog: &NewBlog) -> RepositoryResult<Blog>;
    fn update_blog(&self, id: &str, updates: &UpdateBlog) -> RepositoryResult<Blog>;
    fn delete_blog(&self, id: &str) -> RepositoryResult<()>;
}
