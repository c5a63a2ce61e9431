//! HTTP transport for the render pipeline.
//!
//! One GET route carries the whole render request in its path segments,
//! matching the original wire format; the body of a successful response is
//! the raw row-major pixel buffer.

mod handlers;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

pub const RENDER_PATH: &str = "/mandelbrot/:x_min/:y_min/:x_max/:y_max/:x_num/:y_num/:n_lim";

pub fn app() -> Router {
    Router::new()
        .route(RENDER_PATH, get(handlers::render_handler))
        .route("/health", get(handlers::health_handler))
        .fallback(handlers::usage_handler)
        .layer(TraceLayer::new_for_http())
}
