use serde::Deserialize;

use crate::domain::blog::{NewBlog, UpdateBlog};

/// JSON payload accepted when creating a blog post.
///
/// The blog store performs no required-field validation; absent texts default
/// to empty strings, matching the loose contract of the editorial path.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddBlogForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: String,
    pub cover_image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub published: bool,
}

impl AddBlogForm {
    /// Convert the payload into a domain `NewBlog`.
    pub fn into_new_blog(self) -> NewBlog {
        let mut new_blog = NewBlog::new(self.title, self.excerpt, self.content, self.author)
            .tags(self.tags)
            .published(self.published);

        if let Some(cover_image) = self.cover_image.filter(|value| !value.trim().is_empty()) {
            new_blog = new_blog.with_cover_image(cover_image);
        }

        new_blog
    }
}

/// JSON payload accepted when updating a blog post. Absent fields are left
/// untouched; an empty `coverImage` string clears the stored value.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditBlogForm {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub cover_image: Option<String>,
    pub tags: Option<Vec<String>>,
    pub published: Option<bool>,
}

impl EditBlogForm {
    /// Convert the payload into a domain `UpdateBlog` patch.
    pub fn into_update_blog(self) -> UpdateBlog {
        let mut updates = UpdateBlog::new();

        if let Some(title) = self.title {
            updates = updates.title(title);
        }

        if let Some(excerpt) = self.excerpt {
            updates = updates.excerpt(excerpt);
        }

        if let Some(content) = self.content {
            updates = updates.content(content);
        }

        if let Some(author) = self.author {
            updates = updates.author(author);
        }

        if let Some(cover_image) = self.cover_image {
            let trimmed = cover_image.trim();
            if trimmed.is_empty() {
                updates = updates.cover_image(None::<String>);
            } else {
                updates = updates.cover_image(Some(cover_image));
            }
        }

        if let Some(tags) = self.tags {
            updates = updates.tags(tags);
        }

        if let Some(published) = self.published {
            updates = updates.published(published);
        }

        updates
    }
}
