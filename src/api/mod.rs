//! HTTP API routes.

mod health;
mod routes;

pub use health::HealthResponse;
pub use routes::api_routes;
