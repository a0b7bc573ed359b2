use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::product::{Category, NewProduct, UpdateProduct};

/// Maximum allowed length for a product title.
const TITLE_MAX_LEN: u64 = 256;

/// Maximum allowed length for an author name.
const AUTHOR_MAX_LEN: u64 = 128;

/// Result type returned by the product form helpers.
pub type ProductFormResult<T> = Result<T, ProductFormError>;

/// Errors that can occur while processing product payloads.
#[derive(Debug, Error)]
pub enum ProductFormError {
    /// One of the create-time required fields is absent or blank.
    #[error("Missing required fields")]
    MissingRequiredFields,
    /// The category is not one of `book`/`bible`.
    #[error("unknown category `{value}`")]
    UnknownCategory { value: String },
    /// The price is not a number or a numeric string.
    #[error("invalid price `{value}`")]
    InvalidPrice { value: String },
    /// The price is below zero.
    #[error("price cannot be negative")]
    NegativePrice,
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
}

/// JSON payload accepted when creating a product.
///
/// All fields are optional at the serde level so that presence checks are
/// reported as a 400 with a stable message rather than a deserializer error.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddProductForm {
    #[validate(length(max = TITLE_MAX_LEN))]
    pub title: Option<String>,
    #[validate(length(max = AUTHOR_MAX_LEN))]
    pub author: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    /// Accepts a JSON number or a numeric string.
    pub price: Option<Value>,
    pub image: Option<String>,
    pub in_stock: Option<bool>,
}

impl AddProductForm {
    /// Validates the payload into a domain `NewProduct`.
    pub fn into_new_product(self) -> ProductFormResult<NewProduct> {
        self.validate()?;

        let title = require_text(self.title)?;
        let author = require_text(self.author)?;
        let description = require_text(self.description)?;
        let category = parse_category(&require_text(self.category)?)?;
        let price = coerce_price(&self.price.ok_or(ProductFormError::MissingRequiredFields)?)?;

        let mut new_product = NewProduct::new(title, author, category, description, price);

        if let Some(image) = self.image.filter(|value| !value.trim().is_empty()) {
            new_product = new_product.with_image(image);
        }

        if let Some(in_stock) = self.in_stock {
            new_product = new_product.in_stock(in_stock);
        }

        Ok(new_product)
    }
}

/// JSON payload accepted when updating a product. Every field is optional;
/// absent fields are left untouched.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EditProductForm {
    #[validate(length(min = 1, max = TITLE_MAX_LEN))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = AUTHOR_MAX_LEN))]
    pub author: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    /// Accepts a JSON number or a numeric string.
    pub price: Option<Value>,
    pub image: Option<String>,
    pub in_stock: Option<bool>,
}

impl EditProductForm {
    /// Validates the payload into a domain `UpdateProduct` patch.
    pub fn into_update_product(self) -> ProductFormResult<UpdateProduct> {
        self.validate()?;

        let mut updates = UpdateProduct::new();

        if let Some(title) = self.title {
            updates = updates.title(title);
        }

        if let Some(author) = self.author {
            updates = updates.author(author);
        }

        if let Some(category) = self.category {
            updates = updates.category(parse_category(&category)?);
        }

        if let Some(description) = self.description {
            updates = updates.description(description);
        }

        if let Some(price) = self.price {
            updates = updates.price(coerce_price(&price)?);
        }

        if let Some(image) = self.image {
            updates = updates.image(image);
        }

        if let Some(in_stock) = self.in_stock {
            updates = updates.in_stock(in_stock);
        }

        Ok(updates)
    }
}

fn require_text(value: Option<String>) -> ProductFormResult<String> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(ProductFormError::MissingRequiredFields),
    }
}

fn parse_category(value: &str) -> ProductFormResult<Category> {
    value
        .parse()
        .map_err(|()| ProductFormError::UnknownCategory {
            value: value.to_string(),
        })
}

/// Coerce a JSON number or numeric string into a non-negative price.
fn coerce_price(value: &Value) -> ProductFormResult<f64> {
    let price = match value {
        Value::Number(number) => number.as_f64().ok_or(ProductFormError::InvalidPrice {
            value: number.to_string(),
        })?,
        Value::String(raw) => {
            raw.trim()
                .parse::<f64>()
                .map_err(|_| ProductFormError::InvalidPrice {
                    value: raw.clone(),
                })?
        }
        other => {
            return Err(ProductFormError::InvalidPrice {
                value: other.to_string(),
            });
        }
    };

    if !price.is_finite() {
        return Err(ProductFormError::InvalidPrice {
            value: price.to_string(),
        });
    }

    if price < 0.0 {
        return Err(ProductFormError::NegativePrice);
    }

    Ok(price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_form() -> AddProductForm {
        AddProductForm {
            title: Some("Grace".to_string()),
            author: Some("J. Doe".to_string()),
            category: Some("book".to_string()),
            description: Some("A story of grace.".to_string()),
            price: Some(json!(750)),
            image: None,
            in_stock: None,
        }
    }

    #[test]
    fn add_form_converts_successfully() {
        let new_product = valid_form().into_new_product().expect("expected success");

        assert_eq!(new_product.title, "Grace");
        assert_eq!(new_product.category, Category::Book);
        assert_eq!(new_product.price, 750.0);
        assert!(new_product.image.is_none());
        assert!(new_product.in_stock);
    }

    #[test]
    fn add_form_coerces_string_price() {
        let form = AddProductForm {
            price: Some(json!("750")),
            ..valid_form()
        };

        let new_product = form.into_new_product().expect("expected success");
        assert_eq!(new_product.price, 750.0);
    }

    #[test]
    fn add_form_rejects_missing_title() {
        let form = AddProductForm {
            title: None,
            ..valid_form()
        };

        assert!(matches!(
            form.into_new_product(),
            Err(ProductFormError::MissingRequiredFields)
        ));
    }

    #[test]
    fn add_form_rejects_blank_description() {
        let form = AddProductForm {
            description: Some("   ".to_string()),
            ..valid_form()
        };

        assert!(matches!(
            form.into_new_product(),
            Err(ProductFormError::MissingRequiredFields)
        ));
    }

    #[test]
    fn add_form_rejects_unknown_category() {
        let form = AddProductForm {
            category: Some("magazine".to_string()),
            ..valid_form()
        };

        assert!(matches!(
            form.into_new_product(),
            Err(ProductFormError::UnknownCategory { value }) if value == "magazine"
        ));
    }

    #[test]
    fn add_form_rejects_unparseable_price() {
        let form = AddProductForm {
            price: Some(json!("lots")),
            ..valid_form()
        };

        assert!(matches!(
            form.into_new_product(),
            Err(ProductFormError::InvalidPrice { value }) if value == "lots"
        ));
    }

    #[test]
    fn add_form_rejects_negative_price() {
        let form = AddProductForm {
            price: Some(json!(-1)),
            ..valid_form()
        };

        assert!(matches!(
            form.into_new_product(),
            Err(ProductFormError::NegativePrice)
        ));
    }

    #[test]
    fn edit_form_converts_partial_updates() {
        let form = EditProductForm {
            price: Some(json!("500")),
            in_stock: Some(false),
            ..EditProductForm::default()
        };

        let updates = form.into_update_product().expect("expected success");

        assert_eq!(updates.price, Some(500.0));
        assert_eq!(updates.in_stock, Some(false));
        assert!(updates.title.is_none());
        assert!(updates.category.is_none());
    }

    #[test]
    fn edit_form_rejects_unknown_category() {
        let form = EditProductForm {
            category: Some("tract".to_string()),
            ..EditProductForm::default()
        };

        assert!(matches!(
            form.into_update_product(),
            Err(ProductFormError::UnknownCategory { .. })
        ));
    }
}
