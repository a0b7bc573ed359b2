pub mod auth;
pub mod blogs;
pub mod products;
pub mod uploads;
