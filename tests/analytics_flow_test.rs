//! End-to-end fetch cycles through the App with a scripted HTTP client.

mod common;

use common::*;
use ga4_panel::adapters::mock::{MockHttpClient, MockResponse};
use ga4_panel::analytics::{run_cycle, AnalyticsView, ViewState};
use ga4_panel::app::AppMessage;
use ga4_panel::config::Config;
use ga4_panel::error::UNEXPECTED_ERROR_MESSAGE;
use ga4_panel::traits::{HttpError, Response};

#[tokio::test]
async fn test_mount_issues_exactly_one_get() {
    let client = MockHttpClient::new();
    client.set_response(BLOG_URL, MockResponse::Success(Response::new(200, BLOG_BODY)));
    let (mut app, mut rx) = test_app(&client);

    assert_eq!(app.view.state(), &ViewState::Loading);

    let msg = next_message(&mut rx).await;
    app.handle_message(msg);
    assert_no_message(&mut rx).await;

    let requests = client.get_requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].url, BLOG_URL);
    assert!(requests[0].headers.is_empty());

    // Re-reading an unchanged host starts nothing new
    app.refresh();
    assert_no_message(&mut rx).await;
    assert_eq!(client.get_requests().len(), 1);
}

#[tokio::test]
async fn test_success_renders_stats_and_slug() {
    let client = MockHttpClient::new();
    client.set_response(BLOG_URL, MockResponse::Success(Response::new(200, BLOG_BODY)));
    let (mut app, mut rx) = test_app(&client);

    let loading = render_app(&app, 80, 20);
    assert!(loading.contains("Loading analytics data…"));

    let msg = next_message(&mut rx).await;
    app.handle_message(msg);

    assert!(matches!(app.view.state(), ViewState::Success { .. }));
    let screen = render_app(&app, 80, 20);
    assert!(screen.contains("GA4 Analytics"));
    assert!(screen.contains("Blog Post · abc-123"));
    assert!(screen.contains("1,500"));
    assert!(screen.contains("42"));
    assert!(screen.contains("/blog/abc"));
    assert!(!screen.contains("Loading analytics data…"));
}

#[tokio::test]
async fn test_http_404_shows_status_line() {
    let client = MockHttpClient::new();
    client.set_response(BLOG_URL, MockResponse::Success(Response::new(404, "")));
    let (mut app, mut rx) = test_app(&client);

    let msg = next_message(&mut rx).await;
    app.handle_message(msg);

    assert_eq!(
        app.view.state(),
        &ViewState::Error {
            message: "404 Not Found".to_string()
        }
    );
    let screen = render_app(&app, 80, 20);
    assert!(screen.contains("Failed to load analytics"));
    assert!(screen.contains("404 Not Found"));
}

#[tokio::test]
async fn test_network_failure_shows_its_message() {
    let client = MockHttpClient::new();
    client.set_response(
        BLOG_URL,
        MockResponse::Error(HttpError::ConnectionFailed("Failed to fetch".to_string())),
    );
    let (mut app, mut rx) = test_app(&client);

    let msg = next_message(&mut rx).await;
    app.handle_message(msg);

    assert_eq!(
        app.view.state(),
        &ViewState::Error {
            message: "Failed to fetch".to_string()
        }
    );
}

#[tokio::test]
async fn test_malformed_body_is_an_error() {
    let client = MockHttpClient::new();
    client.set_response(BLOG_URL, MockResponse::Success(Response::new(200, "not json")));
    let (mut app, mut rx) = test_app(&client);

    let msg = next_message(&mut rx).await;
    app.handle_message(msg);

    match app.view.state() {
        ViewState::Error { message } => {
            assert!(!message.is_empty());
            assert_ne!(message, UNEXPECTED_ERROR_MESSAGE);
        }
        other => panic!("expected Error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_switching_items_mid_flight_shows_only_new_item() {
    let client = MockHttpClient::new();
    client.set_response(BLOG_URL, MockResponse::Success(Response::new(200, BLOG_BODY)));
    client.set_response(LANDING_URL, MockResponse::Success(Response::new(200, LANDING_BODY)));
    let blog_gate = client.hold(BLOG_URL);
    let (mut app, mut rx) = test_app(&client);

    // First request is pending; switch item
    tokio::task::yield_now().await;
    app.next_item();
    assert_eq!(app.view.state(), &ViewState::Loading);
    assert_eq!(app.view.item().codename, "xyz-789");

    // Release the old request; whatever it produces must not land
    blog_gate.notify_one();

    let msg = next_message(&mut rx).await;
    app.handle_message(msg);
    while let Ok(Some(msg)) =
        tokio::time::timeout(std::time::Duration::from_millis(50), rx.recv()).await
    {
        app.handle_message(msg);
    }

    match app.view.state() {
        ViewState::Success { data } => {
            assert_eq!(data.slug, "/landing");
            assert_eq!(data.screen_page_views, 98765);
        }
        other => panic!("expected Success for xyz-789, got {:?}", other),
    }
    let screen = render_app(&app, 80, 20);
    assert!(screen.contains("98,765"));
    assert!(screen.contains("Landing Page · xyz-789"));
    assert!(!screen.contains("/blog/abc"));
}

#[tokio::test]
async fn test_late_stale_message_is_ignored() {
    let client = MockHttpClient::new();
    client.set_default_response(MockResponse::Success(Response::new(200, LANDING_BODY)));
    let (mut app, mut rx) = test_app(&client);

    app.next_item();
    let msg = next_message(&mut rx).await;
    app.handle_message(msg);
    assert!(matches!(app.view.state(), ViewState::Success { .. }));

    // A superseded cycle reporting in late
    app.handle_message(AppMessage::AnalyticsSettled {
        generation: 1,
        outcome: Err(ga4_panel::error::FetchError::Transport("late".to_string())),
    });
    assert!(matches!(app.view.state(), ViewState::Success { .. }));
}

#[tokio::test]
async fn test_stale_response_resolving_last_never_applies() {
    // Drive the view directly so the superseded request really completes
    let client = MockHttpClient::new();
    client.set_response(BLOG_URL, MockResponse::Success(Response::new(200, BLOG_BODY)));
    client.set_response(LANDING_URL, MockResponse::Success(Response::new(200, LANDING_BODY)));
    let blog_gate = client.hold(BLOG_URL);

    let (mut view, first) = AnalyticsView::mount(blog_post(), test_config());
    let first_task = {
        let client = client.clone();
        tokio::spawn(async move { run_cycle(&client, first.request).await })
    };

    let second = view.sync(&landing_page(), &test_config()).unwrap();
    let second_outcome = run_cycle(&client, second.request).await;
    assert!(view.apply(second.generation, second_outcome));

    blog_gate.notify_one();
    let first_outcome = first_task.await.unwrap();
    assert!(first_outcome.is_ok());
    assert!(!view.apply(first.generation, first_outcome));

    match view.state() {
        ViewState::Success { data } => assert_eq!(data.slug, "/landing"),
        other => panic!("expected landing data, got {:?}", other),
    }
}

#[tokio::test]
async fn test_config_change_refetches_against_new_endpoint() {
    let client = MockHttpClient::new();
    client.set_default_response(MockResponse::Success(Response::new(200, BLOG_BODY)));
    let (mut app, mut rx) = test_app(&client);
    let msg = next_message(&mut rx).await;
    app.handle_message(msg);

    app.set_config(Config {
        api_endpoint: "https://other.example.com/stats".to_string(),
    });
    assert_eq!(app.view.state(), &ViewState::Loading);

    let msg = next_message(&mut rx).await;
    app.handle_message(msg);

    let urls: Vec<String> = client.get_requests().into_iter().map(|r| r.url).collect();
    assert_eq!(
        urls,
        vec![
            BLOG_URL.to_string(),
            "https://other.example.com/stats?codename=abc-123".to_string()
        ]
    );
}

#[tokio::test]
async fn test_invalid_endpoint_errors_without_a_request() {
    let client = MockHttpClient::new();
    let (mut app, mut rx) = test_app(&client);
    let msg = next_message(&mut rx).await;
    app.handle_message(msg);
    client.clear_requests();

    app.set_config(Config {
        api_endpoint: "localhost/ga".to_string(),
    });
    assert_eq!(app.view.state(), &ViewState::Loading);

    let msg = next_message(&mut rx).await;
    app.handle_message(msg);

    match app.view.state() {
        ViewState::Error { message } => assert!(message.starts_with("Invalid API endpoint")),
        other => panic!("expected Error, got {:?}", other),
    }
    assert!(client.get_requests().is_empty());
}

#[tokio::test]
async fn test_quit_aborts_pending_request() {
    let client = MockHttpClient::new();
    client.set_default_response(MockResponse::Success(Response::new(200, BLOG_BODY)));
    let _gate = client.hold(BLOG_URL);
    let (mut app, mut rx) = test_app(&client);

    tokio::task::yield_now().await;
    assert!(app.is_fetching());

    app.quit();
    assert!(app.should_quit);
    assert!(!app.is_fetching());
    assert_no_message(&mut rx).await;
}
