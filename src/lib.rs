use axum::{Router, middleware::from_fn};
use axum_extra::routing::RouterExt;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod middleware;
pub mod routes;

pub use config::{ConfigError, ServerConfig};

pub fn create_root_app() -> Router {
    Router::new()
        .typed_get(routes::pruebas::pruebas_handler)
        .layer(
            ServiceBuilder::new()
                .layer(from_fn(middleware::request_id_layer))
                .layer(TraceLayer::new_for_http()),
        )
}
