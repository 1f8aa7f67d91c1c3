use crate::error::{Result, ScanError};
use crate::extractor::extract_report;
use crate::result::SeoReport;
use reqwest::header::{ACCEPT_LANGUAGE, HeaderMap, HeaderValue, REFERER};
use reqwest::{Client, StatusCode};
use std::time::{Duration, Instant};
use tracing::{debug, warn};
use url::Url;

pub const DEFAULT_UPSTREAM_TEMPLATE: &str =
    "https://tools.trafficthinktank.com/website-traffic-checker?q={domain}";

pub const DOMAIN_PLACEHOLDER: &str = "{domain}";

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/113.0.0.0 Safari/537.36";

const ACCEPT_LANGUAGE_VALUE: &str = "en-US,en;q=0.9";
const REFERER_VALUE: &str = "https://www.google.com/";

/// Settings for the upstream fetch.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// URL template; `{domain}` is replaced by the normalized domain
    pub upstream_template: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            upstream_template: DEFAULT_UPSTREAM_TEMPLATE.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl FetchConfig {
    pub fn with_upstream_template(mut self, template: impl Into<String>) -> Self {
        self.upstream_template = template.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Reject templates that cannot produce a request URL.
    pub fn validate(&self) -> Result<()> {
        if !self.upstream_template.contains(DOMAIN_PLACEHOLDER) {
            return Err(ScanError::InvalidTemplate(format!(
                "{:?} has no {} placeholder",
                self.upstream_template, DOMAIN_PLACEHOLDER
            )));
        }
        let probe = self.upstream_template.replace(DOMAIN_PLACEHOLDER, "example.com");
        Url::parse(&probe).map_err(|e| {
            ScanError::InvalidTemplate(format!("{:?}: {}", self.upstream_template, e))
        })?;
        Ok(())
    }
}

/// Fetches the upstream metrics page for a domain and turns it into a report.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    config: FetchConfig,
}

impl Fetcher {
    pub fn new(config: FetchConfig) -> Result<Self> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(ACCEPT_LANGUAGE_VALUE));
        headers.insert(REFERER, HeaderValue::from_static(REFERER_VALUE));

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// The upstream URL for `domain`. The domain is interpolated verbatim.
    pub fn upstream_url(&self, domain: &str) -> String {
        self.config
            .upstream_template
            .replace(DOMAIN_PLACEHOLDER, domain)
    }

    /// Fetch the raw upstream page. Anything but a 200 is an error.
    pub async fn fetch_page(&self, domain: &str) -> Result<String> {
        let url = self.upstream_url(domain);
        debug!("Fetching {}", url);

        let start = Instant::now();
        let response = self.client.get(&url).send().await.inspect_err(|e| {
            warn!("Request to {} failed: {}", url, e);
        })?;
        let status = response.status();
        debug!("{} answered {} in {:?}", url, status, start.elapsed());

        if status != StatusCode::OK {
            warn!("Upstream returned {} for {}", status, url);
            return Err(ScanError::UpstreamStatus(status.as_u16()));
        }

        Ok(response.text().await?)
    }

    /// Fetch and extract. Parsing runs on the blocking pool.
    pub async fn fetch_report(&self, domain: &str) -> Result<SeoReport> {
        let body = self.fetch_page(domain).await?;
        let domain = domain.to_string();
        tokio::task::spawn_blocking(move || extract_report(&domain, &body)).await?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::NOT_FOUND;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path, query_param},
    };

    fn fetcher_for(server: &MockServer) -> Fetcher {
        let config = FetchConfig::default().with_upstream_template(format!(
            "{}/website-traffic-checker?q={{domain}}",
            server.uri()
        ));
        Fetcher::new(config).unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = FetchConfig::default();
        assert_eq!(config.upstream_template, DEFAULT_UPSTREAM_TEMPLATE);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_template_without_placeholder_is_rejected() {
        let config = FetchConfig::default().with_upstream_template("https://example.com/?q=");
        let err = Fetcher::new(config).unwrap_err();
        assert!(matches!(err, ScanError::InvalidTemplate(_)));
    }

    #[test]
    fn test_unparseable_template_is_rejected() {
        let config = FetchConfig::default().with_upstream_template("not a url {domain}");
        assert!(matches!(
            config.validate(),
            Err(ScanError::InvalidTemplate(_))
        ));
    }

    #[test]
    fn test_upstream_url_interpolates_domain() {
        let fetcher = Fetcher::new(FetchConfig::default()).unwrap();
        assert_eq!(
            fetcher.upstream_url("example.com"),
            "https://tools.trafficthinktank.com/website-traffic-checker?q=example.com"
        );
    }

    #[tokio::test]
    async fn test_sends_browser_headers_and_query() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/website-traffic-checker"))
            .and(query_param("q", "example.com"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "text/html")
                    .set_body_string("<html><body><p>Visits</p><p><a>5K</a></p></body></html>"),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let report = fetcher_for(&mock_server)
            .fetch_report("example.com")
            .await
            .unwrap();

        assert_eq!(report.domain, "example.com");
        assert_eq!(report.metrics.visits, "5K");
        assert_eq!(report.metrics.bounce_rate, NOT_FOUND);

        let requests = mock_server.received_requests().await.unwrap();
        let headers = &requests[0].headers;
        assert_eq!(headers.get("user-agent").unwrap(), DEFAULT_USER_AGENT);
        assert_eq!(headers.get("accept-language").unwrap(), "en-US,en;q=0.9");
        assert_eq!(headers.get("referer").unwrap(), "https://www.google.com/");
    }

    #[tokio::test]
    async fn test_non_200_status_is_upstream_failure() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&mock_server)
            .await;

        let err = fetcher_for(&mock_server)
            .fetch_report("example.com")
            .await
            .unwrap_err();

        assert!(matches!(err, ScanError::UpstreamStatus(403)));
        assert_eq!(
            err.to_string(),
            "Failed to retrieve the page. Status Code: 403"
        );
    }

    #[tokio::test]
    async fn test_other_2xx_status_is_upstream_failure() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&mock_server)
            .await;

        let err = fetcher_for(&mock_server)
            .fetch_page("example.com")
            .await
            .unwrap_err();

        assert!(matches!(err, ScanError::UpstreamStatus(204)));
    }

    #[tokio::test]
    async fn test_timeout_is_request_failure() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("<html></html>")
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&mock_server)
            .await;

        let config = FetchConfig::default()
            .with_upstream_template(format!("{}/?q={{domain}}", mock_server.uri()))
            .with_timeout(Duration::from_millis(200));
        let err = Fetcher::new(config)
            .unwrap()
            .fetch_page("example.com")
            .await
            .unwrap_err();

        assert!(matches!(err, ScanError::HttpError(_)));
        assert!(err.to_string().starts_with("Request failed: "));
    }

    #[tokio::test]
    async fn test_every_call_refetches() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
            .expect(2)
            .mount(&mock_server)
            .await;

        let fetcher = fetcher_for(&mock_server);
        fetcher.fetch_report("example.com").await.unwrap();
        fetcher.fetch_report("example.com").await.unwrap();
    }
}
