use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Image path used when a product is created without one.
pub const PLACEHOLDER_IMAGE: &str = "/uploads/placeholder.jpg";

/// Catalog category a product belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Book,
    Bible,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Book => write!(f, "book"),
            Category::Bible => write!(f, "bible"),
        }
    }
}

impl FromStr for Category {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "book" => Ok(Category::Book),
            "bible" => Ok(Category::Bible),
            _ => Err(()),
        }
    }
}

/// Domain representation of a sellable catalog item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier, assigned by the store at creation.
    pub id: String,
    /// Title shown in the catalog.
    pub title: String,
    /// Author of the book or edition.
    pub author: String,
    /// Catalog category (`book` or `bible`).
    pub category: Category,
    /// Longer description shown on the product page.
    pub description: String,
    /// Price in Kenyan Shillings.
    pub price: f64,
    /// Image URL or uploads-relative path.
    pub image: String,
    /// Whether the product is currently in stock.
    pub in_stock: bool,
    /// Timestamp set once at creation, immutable thereafter.
    pub created_at: DateTime<Utc>,
}

/// Payload required to insert a new product.
#[derive(Debug, Clone)]
pub struct NewProduct {
    /// Title shown in the catalog.
    pub title: String,
    /// Author of the book or edition.
    pub author: String,
    /// Catalog category.
    pub category: Category,
    /// Longer description shown on the product page.
    pub description: String,
    /// Price in Kenyan Shillings.
    pub price: f64,
    /// Optional image path; the store falls back to [`PLACEHOLDER_IMAGE`].
    pub image: Option<String>,
    /// Stock flag, `true` when omitted by the caller.
    pub in_stock: bool,
}

impl NewProduct {
    /// Build a new product payload with the supplied details.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        category: Category,
        description: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            category,
            description: description.into(),
            price,
            image: None,
            in_stock: true,
        }
    }

    /// Attach an image path to the payload.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Set the stock flag.
    pub fn in_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = in_stock;
        self
    }
}

/// Patch data applied when updating an existing product.
///
/// `id` and `created_at` are deliberately absent: both are immutable.
#[derive(Debug, Clone, Default)]
pub struct UpdateProduct {
    /// Optional title update.
    pub title: Option<String>,
    /// Optional author update.
    pub author: Option<String>,
    /// Optional category update.
    pub category: Option<Category>,
    /// Optional description update.
    pub description: Option<String>,
    /// Optional price update.
    pub price: Option<f64>,
    /// Optional image update.
    pub image: Option<String>,
    /// Optional stock flag update.
    pub in_stock: Option<bool>,
}

impl UpdateProduct {
    /// Create a new patch object with no changes applied yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the product title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Update the product author.
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Update the product category.
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Update the product description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Update the product price.
    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Update the product image path.
    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Update the stock flag.
    pub fn in_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = Some(in_stock);
        self
    }

    /// Apply the patch to an existing product, leaving untouched fields as-is.
    pub fn apply(&self, product: &mut Product) {
        if let Some(title) = &self.title {
            product.title = title.clone();
        }
        if let Some(author) = &self.author {
            product.author = author.clone();
        }
        if let Some(category) = self.category {
            product.category = category;
        }
        if let Some(description) = &self.description {
            product.description = description.clone();
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(image) = &self.image {
            product.image = image.clone();
        }
        if let Some(in_stock) = self.in_stock {
            product.in_stock = in_stock;
        }
    }
}

/// Query definition used to list products.
#[derive(Debug, Clone, Default)]
pub struct ProductListQuery {
    /// Optional case-insensitive substring search over title, author and description.
    pub search: Option<String>,
    /// Optional exact category filter.
    pub category: Option<Category>,
}

impl ProductListQuery {
    /// Construct a query that targets the whole catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter the results by a search term.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Filter the results by an exact category match.
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Whether `product` satisfies every filter in the query.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = self.category
            && product.category != category
        {
            return false;
        }

        if let Some(term) = &self.search {
            let needle = term.to_lowercase();
            return product.title.to_lowercase().contains(&needle)
                || product.author.to_lowercase().contains(&needle)
                || product.description.to_lowercase().contains(&needle);
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_product() -> Product {
        Product {
            id: "1700000000000".to_string(),
            title: "Walking in Faith".to_string(),
            author: "J. Doe".to_string(),
            category: Category::Book,
            description: "A devotional for every day.".to_string(),
            price: 750.0,
            image: PLACEHOLDER_IMAGE.to_string(),
            in_stock: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn category_round_trips_through_str() {
        assert_eq!("book".parse::<Category>(), Ok(Category::Book));
        assert_eq!("bible".parse::<Category>(), Ok(Category::Bible));
        assert!("magazine".parse::<Category>().is_err());
        assert_eq!(Category::Bible.to_string(), "bible");
    }

    #[test]
    fn product_serializes_with_camel_case_keys() {
        let value = serde_json::to_value(sample_product()).expect("serialization");
        assert!(value.get("inStock").is_some());
        assert!(value.get("createdAt").is_some());
        assert_eq!(
            value.get("category").and_then(|v| v.as_str()),
            Some("book")
        );
    }

    #[test]
    fn update_applies_only_provided_fields() {
        let mut product = sample_product();
        let before = product.clone();

        UpdateProduct::new().price(500.0).apply(&mut product);

        assert_eq!(product.price, 500.0);
        assert_eq!(product.title, before.title);
        assert_eq!(product.author, before.author);
        assert_eq!(product.image, before.image);
        assert_eq!(product.created_at, before.created_at);
    }

    #[test]
    fn query_search_is_case_insensitive() {
        let product = sample_product();

        assert!(ProductListQuery::new().search("FAITH").matches(&product));
        assert!(ProductListQuery::new().search("doe").matches(&product));
        assert!(!ProductListQuery::new().search("hope").matches(&product));
    }

    #[test]
    fn query_filters_by_category() {
        let product = sample_product();

        assert!(ProductListQuery::new().category(Category::Book).matches(&product));
        assert!(!ProductListQuery::new().category(Category::Bible).matches(&product));
    }
}
