use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use serde_json::json;

use crate::auth::AdminUser;
use crate::forms::blogs::{AddBlogForm, EditBlogForm};
use crate::repository::InMemoryBlogRepository;
use crate::services::ServiceError;
use crate::services::blogs::{self, BlogsQuery};

#[get("/api/blogs")]
/// Return all blog posts, or only published ones when `published=true`.
pub async fn list_blogs(
    params: web::Query<BlogsQuery>,
    repo: web::Data<InMemoryBlogRepository>,
) -> impl Responder {
    match blogs::list_blogs(repo.get_ref(), params.into_inner()) {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(err) => {
            log::error!("Failed to list blogs: {err}");
            HttpResponse::InternalServerError().json(json!({ "error": "Failed to fetch blogs" }))
        }
    }
}

#[post("/api/blogs")]
pub async fn add_blog(
    _admin: AdminUser,
    repo: web::Data<InMemoryBlogRepository>,
    form: web::Json<AddBlogForm>,
) -> impl Responder {
    match blogs::create_blog(repo.get_ref(), form.into_inner()) {
        Ok(blog) => HttpResponse::Created().json(blog),
        Err(err) => {
            log::error!("Failed to create blog: {err}");
            HttpResponse::InternalServerError().json(json!({ "error": "Failed to create blog" }))
        }
    }
}

#[get("/api/blogs/{id}")]
pub async fn show_blog(
    path: web::Path<String>,
    repo: web::Data<InMemoryBlogRepository>,
) -> impl Responder {
    let id = path.into_inner();

    match blogs::get_blog(repo.get_ref(), &id) {
        Ok(blog) => HttpResponse::Ok().json(blog),
        Err(ServiceError::NotFound) => {
            HttpResponse::NotFound().json(json!({ "error": "Blog not found" }))
        }
        Err(err) => {
            log::error!("Failed to fetch blog {id}: {err}");
            HttpResponse::InternalServerError().json(json!({ "error": "Failed to fetch blog" }))
        }
    }
}

#[put("/api/blogs/{id}")]
pub async fn edit_blog(
    path: web::Path<String>,
    _admin: AdminUser,
    repo: web::Data<InMemoryBlogRepository>,
    form: web::Json<EditBlogForm>,
) -> impl Responder {
    let id = path.into_inner();

    match blogs::modify_blog(repo.get_ref(), &id, form.into_inner()) {
        Ok(blog) => HttpResponse::Ok().json(blog),
        Err(ServiceError::NotFound) => {
            HttpResponse::NotFound().json(json!({ "error": "Blog not found" }))
        }
        Err(err) => {
            log::error!("Failed to update blog {id}: {err}");
            HttpResponse::InternalServerError().json(json!({ "error": "Failed to update blog" }))
        }
    }
}

#[delete("/api/blogs/{id}")]
pub async fn delete_blog(
    path: web::Path<String>,
    _admin: AdminUser,
    repo: web::Data<InMemoryBlogRepository>,
) -> impl Responder {
    let id = path.into_inner();

    match blogs::remove_blog(repo.get_ref(), &id) {
        Ok(()) => HttpResponse::Ok().json(json!({ "success": true })),
        Err(ServiceError::NotFound) => {
            HttpResponse::NotFound().json(json!({ "error": "Blog not found" }))
        }
        Err(err) => {
            log::error!("Failed to delete blog {id}: {err}");
            HttpResponse::InternalServerError().json(json!({ "error": "Failed to delete blog" }))
        }
    }
}
