//! Common test utilities for integration tests.

use ga4_panel::adapters::mock::MockHttpClient;
use ga4_panel::app::{App, AppMessage};
use ga4_panel::config::Config;
use ga4_panel::host::StaticHost;
use ga4_panel::models::ItemInfo;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;

pub const ENDPOINT: &str = "https://api.example.com/ga";
pub const BLOG_URL: &str = "https://api.example.com/ga?codename=abc-123";
pub const LANDING_URL: &str = "https://api.example.com/ga?codename=xyz-789";
pub const BLOG_BODY: &str = r#"{"slug":"/blog/abc","screenPageViews":1500,"activeUsers":42}"#;
pub const LANDING_BODY: &str = r#"{"slug":"/landing","screenPageViews":98765,"activeUsers":7}"#;

pub fn test_config() -> Config {
    Config {
        api_endpoint: ENDPOINT.to_string(),
    }
}

pub fn blog_post() -> ItemInfo {
    ItemInfo::new("Blog Post", "abc-123")
}

pub fn landing_page() -> ItemInfo {
    ItemInfo::new("Landing Page", "xyz-789")
}

/// Host with the blog post selected and the landing page next.
pub fn test_host() -> StaticHost {
    StaticHost::new(vec![blog_post(), landing_page()], test_config()).unwrap()
}

/// App over `client` with its message receiver already taken.
pub fn test_app(client: &MockHttpClient) -> (App, UnboundedReceiver<AppMessage>) {
    let mut app = App::new(test_host(), Arc::new(client.clone()));
    let rx = app.message_rx.take().unwrap();
    (app, rx)
}

/// Wait for the next message, failing the test if none arrives.
pub async fn next_message(rx: &mut UnboundedReceiver<AppMessage>) -> AppMessage {
    tokio::time::timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("timed out waiting for app message")
        .expect("channel closed")
}

/// Assert that no message arrives within a short window.
pub async fn assert_no_message(rx: &mut UnboundedReceiver<AppMessage>) {
    let result = tokio::time::timeout(Duration::from_millis(50), rx.recv()).await;
    assert!(result.is_err(), "unexpected message: {:?}", result);
}

/// Render the full screen and return it row by row.
pub fn render_app(app: &App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| ga4_panel::ui::render(f, app)).unwrap();

    let buffer = terminal.backend().buffer();
    let area = buffer.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}
