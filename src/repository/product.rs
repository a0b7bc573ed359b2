use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::domain::product::{
    NewProduct, PLACEHOLDER_IMAGE, Product, ProductListQuery, UpdateProduct,
};
use crate::repository::{ProductReader, ProductWriter, RepositoryError, RepositoryResult};

/// File-backed product repository persisting the whole catalog as one JSON array.
///
/// Every mutation re-reads and rewrites the entire file. There is no
/// cross-request coordination: concurrent writers race and the last write
/// wins, matching the storefront's accepted storage contract.
#[derive(Debug, Clone)]
pub struct JsonProductRepository {
    path: PathBuf,
}

impl JsonProductRepository {
    /// Create a repository backed by the JSON file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full catalog. A missing or unparseable file reads as empty.
    fn read_all(&self) -> Vec<Product> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(_) => return Vec::new(),
        };

        match serde_json::from_str(&raw) {
            Ok(products) => products,
            Err(err) => {
                log::warn!(
                    "ignoring unparseable product file {}: {err}",
                    self.path.display()
                );
                Vec::new()
            }
        }
    }

    /// Rewrite the backing file with the full catalog.
    fn write_all(&self, products: &[Product]) -> RepositoryResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let raw = serde_json::to_string_pretty(products)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }

    /// Millisecond-timestamp identifier, bumped until unique so that records
    /// created within the same millisecond do not collide.
    fn next_id(products: &[Product]) -> String {
        let mut candidate = Utc::now().timestamp_millis();
        while products
            .iter()
            .any(|product| product.id == candidate.to_string())
        {
            candidate += 1;
        }
        candidate.to_string()
    }
}

impl ProductReader for JsonProductRepository {
    fn get_product_by_id(&self, id: &str) -> RepositoryResult<Option<Product>> {
        Ok(self
            .read_all()
            .into_iter()
            .find(|product| product.id == id))
    }

    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<Product>> {
        Ok(self
            .read_all()
            .into_iter()
            .filter(|product| query.matches(product))
            .collect())
    }
}

impl ProductWriter for JsonProductRepository {
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product> {
        let mut products = self.read_all();

        let product = Product {
            id: Self::next_id(&products),
            title: new_product.title.clone(),
            author: new_product.author.clone(),
            category: new_product.category,
            description: new_product.description.clone(),
            price: new_product.price,
            image: new_product
                .image
                .clone()
                .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            in_stock: new_product.in_stock,
            created_at: Utc::now(),
        };

        products.push(product.clone());
        self.write_all(&products)?;

        Ok(product)
    }

    fn update_product(&self, id: &str, updates: &UpdateProduct) -> RepositoryResult<Product> {
        let mut products = self.read_all();

        let product = products
            .iter_mut()
            .find(|product| product.id == id)
            .ok_or(RepositoryError::NotFound)?;

        updates.apply(product);
        let updated = product.clone();

        self.write_all(&products)?;
        Ok(updated)
    }

    fn delete_product(&self, id: &str) -> RepositoryResult<()> {
        let mut products = self.read_all();
        let before = products.len();

        products.retain(|product| product.id != id);
        if products.len() == before {
            return Err(RepositoryError::NotFound);
        }

        self.write_all(&products)
    }
}
