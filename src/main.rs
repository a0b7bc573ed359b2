use std::env;

use actix_files::Files;
use actix_session::config::PersistentSession;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::cookie::time::Duration;
use actix_web::{App, HttpServer, middleware, web};
use dotenvy::dotenv;

use emmaus_books::config::ServerConfig;
use emmaus_books::repository::{InMemoryBlogRepository, JsonProductRepository};
use emmaus_books::routes::auth::{login, logout};
use emmaus_books::routes::blogs::{add_blog, delete_blog, edit_blog, list_blogs, show_blog};
use emmaus_books::routes::products::{
    add_product, delete_product, edit_product, list_products, show_product,
};
use emmaus_books::routes::uploads::upload_image;

/// Admin session cookies stay valid for one day.
const SESSION_TTL: Duration = Duration::hours(24);

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let port = env::var("PORT").unwrap_or("8080".to_string());
    let port = port.parse::<u16>().unwrap_or(8080);
    let address = env::var("ADDRESS").unwrap_or("127.0.0.1".to_string());
    let products_file = env::var("PRODUCTS_FILE").unwrap_or("data/products.json".to_string());

    let secret_key = match env::var("SECRET_KEY") {
        Ok(key) => Key::from(key.as_bytes()),
        Err(_) => Key::generate(),
    };

    let config = ServerConfig::from_env();
    let product_repo = JsonProductRepository::new(products_file);
    let blog_repo = InMemoryBlogRepository::new();
    let uploads_dir = config.uploads_dir.clone();

    log::info!("storefront API available at {}", config.public_base_url);

    HttpServer::new(move || {
        App::new()
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false) // set to true in prod
                    .cookie_http_only(true)
                    .session_lifecycle(PersistentSession::default().session_ttl(SESSION_TTL))
                    .build(),
            )
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/uploads", uploads_dir.clone()))
            .service(list_products)
            .service(add_product)
            .service(show_product)
            .service(edit_product)
            .service(delete_product)
            .service(list_blogs)
            .service(add_blog)
            .service(show_blog)
            .service(edit_blog)
            .service(delete_blog)
            .service(login)
            .service(logout)
            .service(upload_image)
            .app_data(web::Data::new(product_repo.clone()))
            .app_data(web::Data::new(blog_repo.clone()))
            .app_data(web::Data::new(config.clone()))
    })
    .bind((address, port))?
    .run()
    .await
}
