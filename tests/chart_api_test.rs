//! Tests for /charts/{id}.{svg,png}.

mod common;

use axum::http::StatusCode;
use common::TestApp;

#[tokio::test]
async fn test_balance_chart_svg() {
    let app = TestApp::new();

    let response = app.get("/charts/balance-income.svg").await;

    common::assert_content_type(&response, "image/svg+xml");
    let svg = response.text();
    assert!(svg.starts_with("<svg"));
    assert_eq!(svg.matches("class=\"mark bar\"").count(), 9);
    assert_eq!(svg.matches("class=\"mark point\"").count(), 9);
    assert!(svg.contains(">338,189.75<"));
}

#[tokio::test]
async fn test_expense_chart_svg() {
    let app = TestApp::new();

    let response = app.get("/charts/admin-expense.svg").await;

    common::assert_content_type(&response, "image/svg+xml");
    let svg = response.text();
    assert_eq!(svg.matches("class=\"mark bar\"").count(), 18);
    assert!(svg.contains(">9,960.00<"));
}

#[tokio::test]
async fn test_chart_png_default_size() {
    let app = TestApp::new();

    let response = app.get("/charts/admin-expense.png").await;

    common::assert_png(&response);
    assert_eq!(response.png_dimensions(), Some((1000, 400)));
}

#[tokio::test]
async fn test_chart_png_custom_size() {
    let app = TestApp::new();

    let response = app.get("/charts/balance-income.png?w=600&h=300").await;

    common::assert_png(&response);
    assert_eq!(response.png_dimensions(), Some((600, 300)));
}

#[tokio::test]
async fn test_unknown_chart() {
    let app = TestApp::new();

    let svg = app.get("/charts/nonexistent.svg").await;
    common::assert_json_error(&svg, StatusCode::NOT_FOUND);

    let png = app.get("/charts/nonexistent.png").await;
    common::assert_json_error(&png, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_png_size_out_of_range() {
    let app = TestApp::new();

    let too_wide = app.get("/charts/balance-income.png?w=5000").await;
    common::assert_json_error(&too_wide, StatusCode::BAD_REQUEST);

    let zero = app.get("/charts/balance-income.png?h=0").await;
    common::assert_json_error(&zero, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unsupported_format() {
    let app = TestApp::new();

    let response = app.get("/charts/balance-income.gif").await;
    common::assert_json_error(&response, StatusCode::BAD_REQUEST);

    let response = app.get("/charts/balance-income").await;
    common::assert_json_error(&response, StatusCode::BAD_REQUEST);
}
