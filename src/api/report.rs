use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::api::headers::{quoted_etag, HeaderMapExt};
use crate::error::{ApiError, RenderError};
use crate::report::Report;
use crate::services::renderer::STYLESHEET;
use crate::services::{RenderOptions, ReportRenderer};

/// Error body returned by every endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Status code
    pub status: u16,
    /// Error message
    pub error: String,
}

/// The rendered report page
///
/// Rendering is deterministic, so the ETag only changes when templates or
/// configuration change.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Report page", content_type = "text/html"),
        (status = 304, description = "Unchanged since the ETag in If-None-Match"),
        (status = 500, description = "Rendering error", body = ErrorResponse),
    ),
    params(
        ("If-None-Match" = Option<String>, Header, description = "ETag of a cached copy"),
    ),
    tag = "Report"
)]
pub async fn handle_page(
    State(renderer): State<Arc<ReportRenderer>>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let rendered = renderer.render(&RenderOptions::default())?;
    let etag = quoted_etag(&rendered.etag);

    if headers.if_none_match(&etag) {
        tracing::debug!(etag = %etag, "Report unchanged");
        return Ok((StatusCode::NOT_MODIFIED, [(header::ETAG, etag)]).into_response());
    }

    tracing::info!(size_bytes = rendered.html.len(), "Report served");

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/html; charset=utf-8".to_string()),
            (header::ETAG, etag),
            (header::CACHE_CONTROL, "no-cache".to_string()),
        ],
        rendered.html,
    )
        .into_response())
}

/// Sections and tables as JSON
#[utoipa::path(
    get,
    path = "/report.json",
    responses(
        (status = 200, description = "Section tree, page settings and fixed tables", content_type = "application/json"),
    ),
    tag = "Report"
)]
pub async fn handle_report_json(State(renderer): State<Arc<ReportRenderer>>) -> Json<Report> {
    Json(renderer.report().clone())
}

/// Page stylesheet
#[utoipa::path(
    get,
    path = "/static/report.css",
    responses(
        (status = 200, description = "Stylesheet", content_type = "text/css"),
        (status = 500, description = "Stylesheet missing", body = ErrorResponse),
    ),
    tag = "Report"
)]
pub async fn handle_stylesheet(
    State(renderer): State<Arc<ReportRenderer>>,
) -> Result<Response, ApiError> {
    let css = renderer
        .templates()
        .read_raw(STYLESHEET)
        .map_err(RenderError::from)?;
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        css,
    )
        .into_response())
}
