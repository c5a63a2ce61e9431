use axum::extract::Path;
use axum::http::{header, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::core::actions::render_grid_rayon::render_grid_rayon;
use crate::core::data::render_request::RenderRequest;
use crate::server::RENDER_PATH;

/// Raw path segments in wire order. serde rejects malformed segments with a
/// typed-extraction failure, so nothing here is ever coerced.
#[derive(Debug, Deserialize)]
pub struct RenderPathParams {
    x_min: f64,
    y_min: f64,
    x_max: f64,
    y_max: f64,
    x_num: u32,
    y_num: u32,
    n_lim: u32,
}

pub async fn render_handler(Path(params): Path<RenderPathParams>) -> Response {
    let req = match RenderRequest::new(
        params.x_min,
        params.x_max,
        params.y_min,
        params.y_max,
        params.x_num,
        params.y_num,
        params.n_lim,
    ) {
        Ok(req) => req,
        Err(err) => {
            warn!(%err, "rejecting render request");
            return (StatusCode::BAD_REQUEST, err.to_string()).into_response();
        }
    };

    info!(
        x_num = req.x_num(),
        y_num = req.y_num(),
        n_lim = req.iteration_limit(),
        "rendering grid"
    );

    // The escape loop is CPU-bound; keep it off the async executor.
    let buffer = match tokio::task::spawn_blocking(move || render_grid_rayon(&req)).await {
        Ok(buffer) => buffer,
        Err(err) => {
            error!(%err, "render task panicked");
            return (StatusCode::INTERNAL_SERVER_ERROR, "render failed").into_response();
        }
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/octet-stream")],
        buffer.into_bytes(),
    )
        .into_response()
}

pub async fn usage_handler(uri: Uri) -> Response {
    warn!(%uri, "unmatched request");

    (
        StatusCode::NOT_FOUND,
        format!(
            "Uh oh.. Your request needs to be of this format: http://<ip-address>{}",
            RENDER_PATH
        ),
    )
        .into_response()
}

pub async fn health_handler() -> &'static str {
    "OK"
}
