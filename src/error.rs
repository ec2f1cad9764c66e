use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::models::SeriesField;
use crate::services::TemplateError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found")]
    NotFound,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Chart error: {0}")]
    Chart(#[from] svg_chart::ChartError),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error("Unknown chart: {0}")]
    UnknownChart(String),

    #[error("Chart {chart} reads field {field:?}, which its table does not have")]
    MissingField { chart: String, field: SeriesField },

    #[error("SVG parse error: {0}")]
    SvgParse(String),

    #[error("Unsupported dimensions: {width}x{height}")]
    UnsupportedDimensions { width: u32, height: u32 },

    #[error("Failed to allocate pixmap")]
    PixmapAllocation,

    #[error("PNG encode error: {0}")]
    PngEncode(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::Render(e @ RenderError::UnknownChart(_)) => {
                (StatusCode::NOT_FOUND, e.to_string())
            }
            ApiError::Render(e @ RenderError::UnsupportedDimensions { .. }) => {
                (StatusCode::BAD_REQUEST, e.to_string())
            }
            ApiError::Render(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        if status.is_server_error() {
            tracing::error!(error = %message, "Request failed");
        }

        let body = Json(json!({
            "status": status.as_u16(),
            "error": message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[test]
    fn test_missing_field_message_names_chart() {
        let error = RenderError::MissingField {
            chart: "admin-expense".to_string(),
            field: SeriesField::TotalIncome,
        };
        assert_eq!(
            error.to_string(),
            "Chart admin-expense reads field TotalIncome, which its table does not have"
        );
    }

    #[test]
    fn test_template_error_is_transparent() {
        let error: RenderError = TemplateError::NotFound("report.html".to_string()).into();
        assert_eq!(error.to_string(), "Template not found: report.html");
    }

    #[test]
    fn test_chart_error_converts() {
        let error: RenderError = svg_chart::ChartError::EmptyDataset.into();
        assert!(matches!(error, RenderError::Chart(_)));
        let api_error: ApiError = error.into();
        assert!(matches!(api_error, ApiError::Render(RenderError::Chart(_))));
    }

    #[tokio::test]
    async fn test_unknown_chart_is_not_found() {
        let (status, body) = body_json(RenderError::UnknownChart("pie".into()).into()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["status"], 404);
        assert_eq!(body["error"], "Unknown chart: pie");
    }

    #[tokio::test]
    async fn test_oversized_raster_is_bad_request() {
        let error = RenderError::UnsupportedDimensions {
            width: 5000,
            height: 10,
        };
        let (status, body) = body_json(error.into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Unsupported dimensions: 5000x10");
    }

    #[test]
    fn test_remaining_status_codes() {
        let status = |e: ApiError| e.into_response().status();

        assert_eq!(status(ApiError::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(
            status(ApiError::BadRequest("gif".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status(ApiError::Internal("join".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status(RenderError::PixmapAllocation.into()),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status(RenderError::PngEncode("zlib".into()).into()),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
