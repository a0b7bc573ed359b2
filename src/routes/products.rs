use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use serde_json::json;

use crate::auth::AdminUser;
use crate::forms::products::{AddProductForm, EditProductForm};
use crate::repository::JsonProductRepository;
use crate::services::ServiceError;
use crate::services::products::{self, ProductsQuery};

#[get("/api/products")]
/// Return the product catalog, filtered by `q` (substring search) or
/// `category` when present.
pub async fn list_products(
    params: web::Query<ProductsQuery>,
    repo: web::Data<JsonProductRepository>,
) -> impl Responder {
    match products::list_products(repo.get_ref(), params.into_inner()) {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(err) => {
            log::error!("Failed to list products: {err}");
            HttpResponse::InternalServerError().json(json!({ "error": "Failed to fetch products" }))
        }
    }
}

#[post("/api/products")]
pub async fn add_product(
    _admin: AdminUser,
    repo: web::Data<JsonProductRepository>,
    form: web::Json<AddProductForm>,
) -> impl Responder {
    match products::create_product(repo.get_ref(), form.into_inner()) {
        Ok(product) => HttpResponse::Created().json(product),
        Err(ServiceError::Validation(message)) => {
            HttpResponse::BadRequest().json(json!({ "error": message }))
        }
        Err(err) => {
            log::error!("Failed to create product: {err}");
            HttpResponse::InternalServerError().json(json!({ "error": "Failed to create product" }))
        }
    }
}

#[get("/api/products/{id}")]
pub async fn show_product(
    path: web::Path<String>,
    repo: web::Data<JsonProductRepository>,
) -> impl Responder {
    let id = path.into_inner();

    match products::get_product(repo.get_ref(), &id) {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(ServiceError::NotFound) => {
            HttpResponse::NotFound().json(json!({ "error": "Product not found" }))
        }
        Err(err) => {
            log::error!("Failed to fetch product {id}: {err}");
            HttpResponse::InternalServerError().json(json!({ "error": "Failed to fetch product" }))
        }
    }
}

#[put("/api/products/{id}")]
pub async fn edit_product(
    path: web::Path<String>,
    _admin: AdminUser,
    repo: web::Data<JsonProductRepository>,
    form: web::Json<EditProductForm>,
) -> impl Responder {
    let id = path.into_inner();

    match products::modify_product(repo.get_ref(), &id, form.into_inner()) {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(ServiceError::Validation(message)) => {
            HttpResponse::BadRequest().json(json!({ "error": message }))
        }
        Err(ServiceError::NotFound) => {
            HttpResponse::NotFound().json(json!({ "error": "Product not found" }))
        }
        Err(err) => {
            log::error!("Failed to update product {id}: {err}");
            HttpResponse::InternalServerError().json(json!({ "error": "Failed to update product" }))
        }
    }
}

#[delete("/api/products/{id}")]
pub async fn delete_product(
    path: web::Path<String>,
    _admin: AdminUser,
    repo: web::Data<JsonProductRepository>,
) -> impl Responder {
    let id = path.into_inner();

    match products::remove_product(repo.get_ref(), &id) {
        Ok(()) => HttpResponse::Ok().json(json!({ "success": true })),
        Err(ServiceError::NotFound) => {
            HttpResponse::NotFound().json(json!({ "error": "Product not found" }))
        }
        Err(err) => {
            log::error!("Failed to delete product {id}: {err}");
            HttpResponse::InternalServerError().json(json!({ "error": "Failed to delete product" }))
        }
    }
}
