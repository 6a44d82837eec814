//! Exporter handler: the configured gauge in Prometheus text format.
//!
//! Mounted as the router fallback. Only a request whose path equals
//! `metrics.path` exactly gets the body; everything else is a 404, or a 405
//! for a non-GET on the metrics path.

use axum::{
    extract::State,
    http::{header, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use promstub_core::exposition::MetricSample;

use crate::app_state::AppState;

pub async fn exposition(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
    let cfg = state.cfg();
    if uri.path() != cfg.metrics.path {
        return StatusCode::NOT_FOUND.into_response();
    }
    if method != Method::GET && method != Method::HEAD {
        return (StatusCode::METHOD_NOT_ALLOWED, [(header::ALLOW, "GET,HEAD")]).into_response();
    }

    let body = MetricSample::first_metric(cfg.metrics.value.as_str()).render();

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        body,
    )
        .into_response()
}
