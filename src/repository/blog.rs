use std::sync::{Arc, RwLock};

use chrono::Utc;
use rand::Rng;
use rand::distributions::Alphanumeric;

use crate::domain::blog::{Blog, BlogListQuery, NewBlog, UpdateBlog};
use crate::repository::{BlogReader, BlogWriter, RepositoryError, RepositoryResult};

/// Length of the random suffix appended to blog identifiers.
const ID_SUFFIX_LEN: usize = 9;

/// In-process blog repository. State lives for the process lifetime only;
/// a restart starts from an empty list. Not a durable store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBlogRepository {
    blogs: Arc<RwLock<Vec<Blog>>>,
}

impl InMemoryBlogRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Millisecond timestamp plus a random alphanumeric suffix, unique enough
    /// for posts created within the same millisecond.
    fn next_id() -> String {
        let suffix: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(ID_SUFFIX_LEN)
            .map(|byte| (byte as char).to_ascii_lowercase())
            .collect();

        format!("{}{suffix}", Utc::now().timestamp_millis())
    }
}

impl BlogReader for InMemoryBlogRepository {
    fn get_blog_by_id(&self, id: &str) -> RepositoryResult<Option<Blog>> {
        let blogs = self.blogs.read().map_err(|_| RepositoryError::Poisoned)?;
        Ok(blogs.iter().find(|blog| blog.id == id).cloned())
    }

    fn list_blogs(&self, query: BlogListQuery) -> RepositoryResult<Vec<Blog>> {
        let blogs = self.blogs.read().map_err(|_| RepositoryError::Poisoned)?;
        Ok(blogs
            .iter()
            .filter(|blog| !query.published_only || blog.published)
            .cloned()
            .collect())
    }
}

impl BlogWriter for InMemoryBlogRepository {
    fn create_blog(&self, new_blog: &NewBlog) -> RepositoryResult<Blog> {
        let blog = Blog {
            id: Self::next_id(),
            title: new_blog.title.clone(),
            excerpt: new_blog.excerpt.clone(),
            content: new_blog.content.clone(),
            author: new_blog.author.clone(),
            cover_image: new_blog.cover_image.clone(),
            tags: new_blog.tags.clone(),
            published: new_blog.published,
            created_at: Utc::now(),
        };

        let mut blogs = self.blogs.write().map_err(|_| RepositoryError::Poisoned)?;
        blogs.push(blog.clone());
        Ok(blog)
    }

    fn update_blog(&self, id: &str, updates: &UpdateBlog) -> RepositoryResult<Blog> {
        let mut blogs = self.blogs.write().map_err(|_| RepositoryError::Poisoned)?;

        let blog = blogs
            .iter_mut()
            .find(|blog| blog.id == id)
            .ok_or(RepositoryError::NotFound)?;

        updates.apply(blog);
        Ok(blog.clone())
    }

    fn delete_blog(&self, id: &str) -> RepositoryResult<()> {
        let mut blogs = self.blogs.write().map_err(|_| RepositoryError::Poisoned)?;
        let before = blogs.len();

        blogs.retain(|blog| blog.id != id);
        if blogs.len() == before {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
