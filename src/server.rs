//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::{Path, Query, State},
    http::{header::X_CONTENT_TYPE_OPTIONS, HeaderMap, HeaderValue},
    response::{Json, Response},
    routing::get,
    Router,
};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::{services::ServeDir, set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::api;
use crate::assets::AssetLoader;
use crate::error::ApiError;
use crate::models::AppConfig;
use crate::rendering::SvgRasterizer;
use crate::report::Report;
use crate::services::{ReportRenderer, TemplateService};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub renderer: Arc<ReportRenderer>,
    pub rasterizer: Arc<SvgRasterizer>,
    /// Image store served under `/images`
    pub images_dir: PathBuf,
}

/// Create application state from an asset loader.
///
/// Fails if the embedded tables do not parse; nothing is served from a
/// partial report.
pub fn create_app_state(
    asset_loader: Arc<AssetLoader>,
    images_dir: PathBuf,
) -> anyhow::Result<AppState> {
    let config = AppConfig::load_from_assets(&asset_loader);
    let report = Arc::new(
        Report::build(config.page)
            .map_err(|e| anyhow::anyhow!("Failed to build report: {e}"))?,
    );
    let rasterizer = Arc::new(SvgRasterizer::with_fonts(asset_loader.get_fonts()));
    let renderer = Arc::new(ReportRenderer::new(
        report,
        TemplateService::new(asset_loader),
    ));

    Ok(AppState {
        renderer,
        rasterizer,
        images_dir,
    })
}

/// Build the router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    let images = ServeDir::new(&state.images_dir);

    Router::new()
        // Report
        .route("/", get(handle_page))
        .route("/report.json", get(handle_report_json))
        .route("/static/report.css", get(handle_stylesheet))
        .route("/charts/:file", get(handle_chart))
        // Health check
        .route("/health", get(|| async { "OK" }))
        .nest_service("/images", images)
        .fallback(|| async { ApiError::NotFound })
        // Add state and tracing
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::if_not_present(
            X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
}

// Wrapper handlers to extract state components for the underlying API handlers

async fn handle_page(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    api::handle_page(State(state.renderer), headers).await
}

async fn handle_report_json(State(state): State<AppState>) -> Json<Report> {
    api::handle_report_json(State(state.renderer)).await
}

async fn handle_stylesheet(State(state): State<AppState>) -> Result<Response, ApiError> {
    api::handle_stylesheet(State(state.renderer)).await
}

async fn handle_chart(
    State(state): State<AppState>,
    path: Path<String>,
    query: Query<api::ChartQuery>,
) -> Result<Response, ApiError> {
    api::handle_chart(
        State(state.renderer),
        State(state.rasterizer),
        path,
        query,
    )
    .await
}
