use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Domain representation of an editorial blog post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    /// Unique identifier, assigned by the store at creation.
    pub id: String,
    /// Post title.
    pub title: String,
    /// Short teaser shown in listings.
    pub excerpt: String,
    /// Full post body.
    pub content: String,
    /// Author name.
    pub author: String,
    /// Optional cover image URL, omitted from the wire format when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    /// Display tags, order preserved.
    pub tags: Vec<String>,
    /// Whether the post is publicly visible.
    pub published: bool,
    /// Timestamp set once at creation, immutable thereafter.
    pub created_at: DateTime<Utc>,
}

/// Payload required to insert a new blog post.
#[derive(Debug, Clone, Default)]
pub struct NewBlog {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub cover_image: Option<String>,
    pub tags: Vec<String>,
    pub published: bool,
}

impl NewBlog {
    /// Build a new blog payload with the supplied texts.
    pub fn new(
        title: impl Into<String>,
        excerpt: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            excerpt: excerpt.into(),
            content: content.into(),
            author: author.into(),
            cover_image: None,
            tags: Vec::new(),
            published: false,
        }
    }

    /// Attach a cover image URL.
    pub fn with_cover_image(mut self, cover_image: impl Into<String>) -> Self {
        self.cover_image = Some(cover_image.into());
        self
    }

    /// Replace the tag list.
    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Set the publish flag.
    pub fn published(mut self, published: bool) -> Self {
        self.published = published;
        self
    }
}

/// Patch data applied when updating an existing blog post.
#[derive(Debug, Clone, Default)]
pub struct UpdateBlog {
    /// Optional title update.
    pub title: Option<String>,
    /// Optional excerpt update.
    pub excerpt: Option<String>,
    /// Optional content update.
    pub content: Option<String>,
    /// Optional author update.
    pub author: Option<String>,
    /// Optional cover image update, `Some(None)` clears an existing value.
    pub cover_image: Option<Option<String>>,
    /// Optional tag list replacement.
    pub tags: Option<Vec<String>>,
    /// Optional publish flag update.
    pub published: Option<bool>,
}

impl UpdateBlog {
    /// Create a new patch object with no changes applied yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the post title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Update the post excerpt.
    pub fn excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }

    /// Update the post body.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Update the author name.
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Update the cover image, using `None` to clear an existing value.
    pub fn cover_image(mut self, cover_image: Option<impl Into<String>>) -> Self {
        self.cover_image = Some(cover_image.map(|value| value.into()));
        self
    }

    /// Replace the tag list.
    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    /// Publish or unpublish the post.
    pub fn published(mut self, published: bool) -> Self {
        self.published = Some(published);
        self
    }

    /// Shallow-merge the patch into an existing post.
    pub fn apply(&self, blog: &mut Blog) {
        if let Some(title) = &self.title {
            blog.title = title.clone();
        }
        if let Some(excerpt) = &self.excerpt {
            blog.excerpt = excerpt.clone();
        }
        if let Some(content) = &self.content {
            blog.content = content.clone();
        }
        if let Some(author) = &self.author {
            blog.author = author.clone();
        }
        if let Some(cover_image) = &self.cover_image {
            blog.cover_image = cover_image.clone();
        }
        if let Some(tags) = &self.tags {
            blog.tags = tags.clone();
        }
        if let Some(published) = self.published {
            blog.published = published;
        }
    }
}

/// Query definition used to list blog posts.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlogListQuery {
    /// When set, only posts with `published == true` are returned.
    pub published_only: bool,
}

impl BlogListQuery {
    /// Construct a query that targets all posts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the results to published posts.
    pub fn published_only(mut self) -> Self {
        self.published_only = true;
        self
    }
}
