//! Request construction and the single GET of a fetch cycle.

use crate::error::FetchError;
use crate::models::ApiResponse;
use crate::traits::{Headers, HttpClient};

/// Query parameter carrying the item codename.
pub const CODENAME_PARAM: &str = "codename";

/// Add `codename=<percent-encoded>` to the endpoint's query string.
///
/// The endpoint must be an absolute http(s) URL. An existing query string is
/// extended with `&`; a fragment stays after the query.
pub fn build_request_url(endpoint: &str, codename: &str) -> Result<String, FetchError> {
    let mut url =
        reqwest::Url::parse(endpoint).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(FetchError::InvalidUrl(format!(
            "unsupported scheme \"{}\"",
            url.scheme()
        )));
    }

    let param = format!("{}={}", CODENAME_PARAM, urlencoding::encode(codename));
    let query = match url.query() {
        None | Some("") => param,
        Some(existing) if existing.ends_with('&') => format!("{}{}", existing, param),
        Some(existing) => format!("{}&{}", existing, param),
    };
    url.set_query(Some(&query));

    Ok(url.into())
}

/// Issue the GET and decode the analytics payload.
pub async fn fetch_analytics<C>(client: &C, url: &str) -> Result<ApiResponse, FetchError>
where
    C: HttpClient + ?Sized,
{
    let response = client.get(url, &Headers::new()).await?;

    if !response.is_success() {
        return Err(FetchError::Http {
            status: response.status,
            status_text: response.status_text,
        });
    }

    ApiResponse::from_json(&response.body)
}

/// Run one cycle: a request that failed to build settles without any I/O.
pub async fn run_cycle<C>(
    client: &C,
    request: Result<String, FetchError>,
) -> Result<ApiResponse, FetchError>
where
    C: HttpClient + ?Sized,
{
    match request {
        Ok(url) => fetch_analytics(client, &url).await,
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::traits::{HttpError, Response};

    const ENDPOINT: &str = "https://api.example.com/ga";

    #[test]
    fn test_build_request_url_plain() {
        assert_eq!(
            build_request_url(ENDPOINT, "abc-123").unwrap(),
            "https://api.example.com/ga?codename=abc-123"
        );
    }

    #[test]
    fn test_build_request_url_percent_encodes() {
        assert_eq!(
            build_request_url(ENDPOINT, "a b&c=d/é").unwrap(),
            "https://api.example.com/ga?codename=a%20b%26c%3Dd%2F%C3%A9"
        );
    }

    #[test]
    fn test_build_request_url_extends_existing_query() {
        assert_eq!(
            build_request_url("https://api.example.com/ga?range=7d", "x").unwrap(),
            "https://api.example.com/ga?range=7d&codename=x"
        );
        assert_eq!(
            build_request_url("https://api.example.com/ga?", "x").unwrap(),
            "https://api.example.com/ga?codename=x"
        );
    }

    #[test]
    fn test_build_request_url_keeps_codename_out_of_fragment() {
        let url = build_request_url("https://api.example.com/ga#stats", "abc-123").unwrap();
        assert_eq!(url, "https://api.example.com/ga?codename=abc-123#stats");

        let parsed = reqwest::Url::parse(&url).unwrap();
        assert_eq!(parsed.query(), Some("codename=abc-123"));
        assert_eq!(parsed.fragment(), Some("stats"));
    }

    #[test]
    fn test_build_request_url_rejects_relative_and_odd_schemes() {
        assert!(matches!(
            build_request_url("/api/ga", "x"),
            Err(FetchError::InvalidUrl(_))
        ));
        assert!(matches!(
            build_request_url("ftp://example.com/ga", "x"),
            Err(FetchError::InvalidUrl(_))
        ));
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let client = MockHttpClient::new();
        client.set_response(
            "https://api.example.com/ga?codename=abc-123",
            MockResponse::Success(Response::new(
                200,
                r#"{"slug":"/blog/abc","screenPageViews":1500,"activeUsers":42}"#,
            )),
        );

        let data = fetch_analytics(&client, "https://api.example.com/ga?codename=abc-123")
            .await
            .unwrap();
        assert_eq!(data.slug, "/blog/abc");
        assert_eq!(data.screen_page_views, 1500);
        assert_eq!(data.active_users, 42);
    }

    #[tokio::test]
    async fn test_fetch_http_error() {
        let client = MockHttpClient::new();
        client.set_default_response(MockResponse::Success(Response::new(404, "nope")));

        let err = fetch_analytics(&client, "https://api.example.com/ga?codename=x")
            .await
            .unwrap_err();
        assert_eq!(err.message(), "404 Not Found");
    }

    #[tokio::test]
    async fn test_fetch_network_error() {
        let client = MockHttpClient::new();
        client.set_default_response(MockResponse::Error(HttpError::ConnectionFailed(
            "Failed to fetch".to_string(),
        )));

        let err = fetch_analytics(&client, "https://api.example.com/ga?codename=x")
            .await
            .unwrap_err();
        assert_eq!(err.message(), "Failed to fetch");
    }

    #[tokio::test]
    async fn test_run_cycle_with_unbuildable_request_makes_no_call() {
        let client = MockHttpClient::new();
        let err = run_cycle(&client, Err(FetchError::InvalidUrl("bad".to_string())))
            .await
            .unwrap_err();
        assert_eq!(err, FetchError::InvalidUrl("bad".to_string()));
        assert!(client.get_requests().is_empty());
    }
}
