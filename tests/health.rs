use product_catalog_api::routes::health::health_check;

#[tokio::test]
async fn health_check_returns_from_api() {
    let response = health_check().await;
    assert_eq!(response.0.msg, "From API");
}
