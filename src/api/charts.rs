use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::{ApiError, RenderError};
use crate::rendering::{PngSize, SvgRasterizer};
use crate::services::ReportRenderer;

/// Query parameters for PNG charts
#[derive(Debug, Deserialize)]
pub struct ChartQuery {
    /// Raster width (default: the chart's drawing width)
    #[serde(default)]
    pub w: Option<u32>,
    /// Raster height (default: the chart's drawing height)
    #[serde(default)]
    pub h: Option<u32>,
}

/// One chart of the report, as SVG or PNG
///
/// The extension picks the format: `balance-income.svg`, `admin-expense.png`.
#[utoipa::path(
    get,
    path = "/charts/{file}",
    responses(
        (status = 200, description = "Chart image", content_type = "image/svg+xml"),
        (status = 200, description = "Chart raster", content_type = "image/png"),
        (status = 400, description = "Unknown extension or size out of range", body = crate::api::ErrorResponse),
        (status = 404, description = "Unknown chart", body = crate::api::ErrorResponse),
    ),
    params(
        ("file" = String, Path, description = "Chart id plus .svg or .png"),
        ("w" = Option<u32>, Query, description = "PNG width in pixels (max 4000)"),
        ("h" = Option<u32>, Query, description = "PNG height in pixels (max 4000)"),
    ),
    tag = "Charts"
)]
pub async fn handle_chart(
    State(renderer): State<Arc<ReportRenderer>>,
    State(rasterizer): State<Arc<SvgRasterizer>>,
    Path(file): Path<String>,
    Query(query): Query<ChartQuery>,
) -> Result<Response, ApiError> {
    let (id, extension) = file
        .rsplit_once('.')
        .ok_or_else(|| ApiError::BadRequest(format!("missing extension in '{file}'")))?;

    match extension {
        "svg" => {
            let svg = renderer.render_chart_svg(id)?;
            tracing::info!(chart = %id, size_bytes = svg.len(), "Chart SVG served");
            Ok((
                StatusCode::OK,
                [(header::CONTENT_TYPE, "image/svg+xml")],
                svg,
            )
                .into_response())
        }
        "png" => {
            let spec = renderer
                .report()
                .chart(id)
                .ok_or_else(|| RenderError::UnknownChart(id.to_string()))?;
            let size = PngSize::new(query.w.unwrap_or(spec.width), query.h.unwrap_or(spec.height))?;
            let svg = renderer.render_chart_svg(id)?;

            let png_bytes =
                tokio::task::spawn_blocking(move || rasterizer.render_png(svg.as_bytes(), size))
                    .await
                    .map_err(|e| ApiError::Internal(format!("Task error: {e}")))??;

            tracing::info!(
                chart = %id,
                width = size.width,
                height = size.height,
                size_bytes = png_bytes.len(),
                "Chart PNG served"
            );

            Ok((
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "image/png"),
                    (header::CONTENT_LENGTH, &png_bytes.len().to_string()),
                ],
                Bytes::from(png_bytes),
            )
                .into_response())
        }
        other => Err(ApiError::BadRequest(format!(
            "unsupported chart format '{other}'"
        ))),
    }
}
