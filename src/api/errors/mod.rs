pub mod handler;
pub mod routes;

pub use routes::error_routes;
