use super::*;

// =============================================================
// Construction from config
// =============================================================

#[test]
fn catalog_uses_configured_url() {
    let config = AppConfig { catalog_url: "/static/products.json".into(), ..AppConfig::default() };
    assert_eq!(HttpCatalog::new(&config).url(), "/static/products.json");
}

#[test]
fn transport_uses_configured_endpoint_and_timeout() {
    let config = AppConfig {
        assistant_url: "https://proxy.example.test".into(),
        request_timeout_secs: 12,
        ..AppConfig::default()
    };
    let transport = BrowserTransport::new(&config);
    assert_eq!(transport.endpoint(), "https://proxy.example.test");
    assert_eq!(transport.timeout_secs(), 12);
}

// =============================================================
// Native stubs
// =============================================================

#[tokio::test]
async fn catalog_outside_browser_is_transport_error() {
    let source = HttpCatalog::new(&AppConfig::default());
    assert!(matches!(source.load().await, Err(CatalogLoadError::Transport(_))));
}

#[tokio::test]
async fn transport_outside_browser_is_transport_error() {
    let transport = BrowserTransport::new(&AppConfig::default());
    let result = transport.send_conversation(&[Message::system("rules")]).await;
    assert!(matches!(result, Err(ChatError::Transport(TransportError::Network(_)))));
}
