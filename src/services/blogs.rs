use serde::Deserialize;

use crate::domain::blog::{Blog, BlogListQuery};
use crate::forms::blogs::{AddBlogForm, EditBlogForm};
use crate::repository::{BlogReader, BlogWriter};
use crate::services::{ServiceError, ServiceResult};

/// Query parameters accepted by the blog listing endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct BlogsQuery {
    /// Only the literal string `true` enables the published filter; any other
    /// value is ignored and the full list is returned.
    pub published: Option<String>,
}

/// Lists blog posts, restricted to published ones when requested.
pub fn list_blogs<R>(repo: &R, query: BlogsQuery) -> ServiceResult<Vec<Blog>>
where
    R: BlogReader + ?Sized,
{
    let mut list_query = BlogListQuery::new();

    if query.published.as_deref() == Some("true") {
        list_query = list_query.published_only();
    }

    repo.list_blogs(list_query).map_err(ServiceError::from)
}

/// Fetches a single blog post by id.
pub fn get_blog<R>(repo: &R, id: &str) -> ServiceResult<Blog>
where
    R: BlogReader + ?Sized,
{
    repo.get_blog_by_id(id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

/// Creates a new blog post. The editorial path enforces no required fields.
pub fn create_blog<R>(repo: &R, form: AddBlogForm) -> ServiceResult<Blog>
where
    R: BlogWriter + ?Sized,
{
    repo.create_blog(&form.into_new_blog())
        .map_err(ServiceError::from)
}

/// Shallow-merges a partial update into an existing blog post.
pub fn modify_blog<R>(repo: &R, id: &str, form: EditBlogForm) -> ServiceResult<Blog>
where
    R: BlogWriter + ?Sized,
{
    repo.update_blog(id, &form.into_update_blog())
        .map_err(ServiceError::from)
}

/// Deletes a blog post by id.
pub fn remove_blog<R>(repo: &R, id: &str) -> ServiceResult<()>
where
    R: BlogWriter + ?Sized,
{
    repo.delete_blog(id).map_err(ServiceError::from)
}
