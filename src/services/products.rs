use serde::Deserialize;

use crate::domain::product::{Category, Product, ProductListQuery};
use crate::forms::products::{AddProductForm, EditProductForm};
use crate::repository::{ProductReader, ProductWriter};
use crate::services::{ServiceError, ServiceResult};

/// Query parameters accepted by the product listing endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ProductsQuery {
    /// Optional case-insensitive substring search.
    pub q: Option<String>,
    /// Optional category filter; unknown values are ignored.
    pub category: Option<String>,
}

/// Lists products, applying the search or category filter when present.
pub fn list_products<R>(repo: &R, query: ProductsQuery) -> ServiceResult<Vec<Product>>
where
    R: ProductReader + ?Sized,
{
    let ProductsQuery { q, category } = query;

    let mut list_query = ProductListQuery::new();

    if let Some(term) = q.filter(|term| !term.is_empty()) {
        list_query = list_query.search(term);
    } else if let Some(category) = category.and_then(|value| value.parse::<Category>().ok()) {
        list_query = list_query.category(category);
    }

    repo.list_products(list_query).map_err(ServiceError::from)
}

/// Fetches a single product by id.
pub fn get_product<R>(repo: &R, id: &str) -> ServiceResult<Product>
where
    R: ProductReader + ?Sized,
{
    repo.get_product_by_id(id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

/// Creates a new product from the validated payload.
pub fn create_product<R>(repo: &R, form: AddProductForm) -> ServiceResult<Product>
where
    R: ProductWriter + ?Sized,
{
    let new_product = form
        .into_new_product()
        .map_err(|err| ServiceError::Validation(err.to_string()))?;

    repo.create_product(&new_product).map_err(ServiceError::from)
}

/// Applies a partial update to an existing product.
pub fn modify_product<R>(repo: &R, id: &str, form: EditProductForm) -> ServiceResult<Product>
where
    R: ProductWriter + ?Sized,
{
    let updates = form
        .into_update_product()
        .map_err(|err| ServiceError::Validation(err.to_string()))?;

    repo.update_product(id, &updates).map_err(ServiceError::from)
}

/// Deletes a product by id.
pub fn remove_product<R>(repo: &R, id: &str) -> ServiceResult<()>
where
    R: ProductWriter + ?Sized,
{
    repo.delete_product(id).map_err(ServiceError::from)
}
