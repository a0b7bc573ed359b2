use mockall::mock;

use super::{BlogReader, BlogWriter, ProductReader, ProductWriter, RepositoryResult};
use crate::domain::{
    blog::{Blog, BlogListQuery, NewBlog, UpdateBlog},
    product::{NewProduct, Product, ProductListQuery, UpdateProduct},
};

mock! {
    pub ProductReader {}

    impl ProductReader for ProductReader {
        fn get_product_by_id(&self, id: &str) -> RepositoryResult<Option<Product>>;
        fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<Product>>;
    }
}

mock! {
    pub ProductWriter {}

    impl ProductWriter for ProductWriter {
        fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
        fn update_product(&self, id: &str, updates: &UpdateProduct) -> RepositoryResult<Product>;
        fn delete_product(&self, id: &str) -> RepositoryResult<()>;
    }
}

mock! {
    pub BlogReader {}

    impl BlogReader for BlogReader {
        fn get_blog_by_id(&self, id: &str) -> RepositoryResult<Option<Blog>>;
        fn list_blogs(&self, query: BlogListQuery) -> RepositoryResult<Vec<Blog>>;
    }
}

mock! {
    pub BlogWriter {}

    impl BlogWriter for BlogWriter {
        fn create_blog(&self, new_blog: &NewBlog) -> RepositoryResult<Blog>;
        fn update_blog(&self, id: &str, updates: &UpdateBlog) -> RepositoryResult<Blog>;
        fn delete_blog(&self, id: &str) -> RepositoryResult<()>;
    }
}
