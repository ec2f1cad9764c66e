//! Test application factory for integration tests.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

use parma_report::assets::AssetLoader;
use parma_report::server::{build_router, create_app_state, AppState};

/// Test application with router and a scratch image store
pub struct TestApp {
    router: axum::Router,
    images: TempDir,
}

impl TestApp {
    /// Create a new test application using embedded assets
    pub fn new() -> Self {
        let images = tempfile::tempdir().expect("Failed to create images dir");
        let state = Self::create_state(images.path());
        let router = build_router(state);

        Self { router, images }
    }

    /// Create application state serving images from `images_dir`
    pub fn create_state(images_dir: &Path) -> AppState {
        let asset_loader = Arc::new(AssetLoader::new(None, None, None));
        create_app_state(asset_loader, images_dir.to_path_buf())
            .expect("Failed to create app state")
    }

    /// Put a file into the image store
    pub fn add_image(&self, name: &str, bytes: &[u8]) {
        std::fs::write(self.images.path().join(name), bytes).expect("Failed to write image");
    }

    /// Make a GET request to the given path
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request(Request::get(path).body(Body::empty()).unwrap())
            .await
    }

    /// Make a GET request with custom headers
    pub async fn get_with_headers(&self, path: &str, headers: &[(&str, &str)]) -> TestResponse {
        let mut builder = Request::get(path);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        self.request(builder.body(Body::empty()).unwrap()).await
    }

    /// Send a request to the router
    async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes()
            .to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Test response with convenience methods
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Parse body as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse JSON response")
    }

    /// Get body as string
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }

    /// Header value as a string, if present
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Check if response is a PNG image
    pub fn is_png(&self) -> bool {
        self.body.len() >= 8 && &self.body[0..8] == b"\x89PNG\r\n\x1a\n"
    }

    /// Width and height from the PNG IHDR chunk
    pub fn png_dimensions(&self) -> Option<(u32, u32)> {
        if !self.is_png() || self.body.len() < 24 {
            return None;
        }
        let width = u32::from_be_bytes(self.body[16..20].try_into().ok()?);
        let height = u32::from_be_bytes(self.body[20..24].try_into().ok()?);
        Some((width, height))
    }
}
