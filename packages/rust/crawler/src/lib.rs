//! HTTP fetching of provider documentation pages.
//!
//! A [`Fetcher`] knows where provider index pages live on the documentation
//! site and downloads their raw HTML. Requests are issued one at a time; there
//! is no retry or rate limiting.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, instrument};
use url::Url;

use docwiki_shared::{DocWikiError, Provider, Result, WikiConfig};

/// User-Agent string for page requests.
const USER_AGENT: &str = concat!("docwiki/", env!("CARGO_PKG_VERSION"));

/// Maximum number of redirects to follow.
const MAX_REDIRECTS: usize = 5;

/// Maximum response size we accept (10 MB).
const MAX_RESPONSE_SIZE: u64 = 10 * 1024 * 1024;

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Configuration for the fetcher.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Scheme and host of the documentation site, without a trailing slash.
    pub docs_host: String,
    /// Path under which provider pages live, e.g. `/docs/providers`.
    pub providers_path: String,
    /// Timeout for HTTP requests in seconds.
    pub timeout_secs: u64,
}

impl From<&WikiConfig> for FetchOptions {
    fn from(config: &WikiConfig) -> Self {
        Self {
            docs_host: config.docs_host.clone(),
            providers_path: config.providers_path.clone(),
            timeout_secs: config.timeout_secs,
        }
    }
}

// ---------------------------------------------------------------------------
// Fetcher
// ---------------------------------------------------------------------------

/// Downloads provider index pages.
pub struct Fetcher {
    client: Client,
    providers_base: Url,
}

impl Fetcher {
    /// Create a fetcher, building the HTTP client and the provider base URL.
    pub fn new(opts: FetchOptions) -> Result<Self> {
        let base = format!(
            "{}/{}/",
            opts.docs_host.trim_end_matches('/'),
            opts.providers_path.trim_matches('/')
        );
        let providers_base = Url::parse(&base)
            .map_err(|e| DocWikiError::parse(format!("invalid provider base URL '{base}': {e}")))?;

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .timeout(Duration::from_secs(opts.timeout_secs))
            .build()
            .map_err(|e| DocWikiError::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            providers_base,
        })
    }

    /// URL of a provider's index page: `<host><providers_path>/<slug>/`.
    pub fn provider_url(&self, provider: &Provider) -> Result<Url> {
        self.providers_base
            .join(&format!("{}/", provider.slug()))
            .map_err(|e| {
                DocWikiError::parse(format!("cannot build URL for provider {provider}: {e}"))
            })
    }

    /// Fetch `url` and return the response body.
    #[instrument(skip_all, fields(url = %url))]
    pub async fn fetch(&self, url: &Url) -> Result<String> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| DocWikiError::Network(format!("{url}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DocWikiError::Network(format!("{url}: HTTP {status}")));
        }

        if let Some(len) = response.content_length() {
            if len > MAX_RESPONSE_SIZE {
                return Err(DocWikiError::validation(format!(
                    "{url}: response too large ({len} bytes, max {MAX_RESPONSE_SIZE})"
                )));
            }
        }

        let body = response
            .text()
            .await
            .map_err(|e| DocWikiError::Network(format!("{url}: failed to read body: {e}")))?;

        debug!(bytes = body.len(), "page fetched");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(host: &str) -> FetchOptions {
        FetchOptions {
            docs_host: host.to_string(),
            providers_path: "/docs/providers".into(),
            timeout_secs: 5,
        }
    }

    #[test]
    fn provider_url_uses_slug() {
        let fetcher = Fetcher::new(options("https://www.terraform.io")).unwrap();
        let provider = Provider::new("AzureRM").unwrap();
        assert_eq!(
            fetcher.provider_url(&provider).unwrap().as_str(),
            "https://www.terraform.io/docs/providers/azurerm/"
        );
    }

    #[test]
    fn provider_url_tolerates_trailing_slashes() {
        let mut opts = options("https://docs.example.com/");
        opts.providers_path = "providers/".into();
        let fetcher = Fetcher::new(opts).unwrap();
        let provider = Provider::new("AWS").unwrap();
        assert_eq!(
            fetcher.provider_url(&provider).unwrap().as_str(),
            "https://docs.example.com/providers/aws/"
        );
    }

    #[test]
    fn invalid_host_is_rejected() {
        assert!(Fetcher::new(options("not a host")).is_err());
    }

    #[tokio::test]
    async fn fetch_returns_body() {
        let server = wiremock::MockServer::start().await;

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/docs/providers/aws/"))
            .respond_with(
                wiremock::ResponseTemplate::new(200).set_body_string("<html><body>ok</body></html>"),
            )
            .mount(&server)
            .await;

        let fetcher = Fetcher::new(options(&server.uri())).unwrap();
        let url = fetcher.provider_url(&Provider::new("AWS").unwrap()).unwrap();
        let body = fetcher.fetch(&url).await.unwrap();

        assert!(body.contains("ok"));
    }

    #[tokio::test]
    async fn fetch_reports_http_status() {
        let server = wiremock::MockServer::start().await;

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .respond_with(wiremock::ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let fetcher = Fetcher::new(options(&server.uri())).unwrap();
        let url = fetcher.provider_url(&Provider::new("Google").unwrap()).unwrap();
        let err = fetcher.fetch(&url).await.unwrap_err();

        assert!(matches!(err, DocWikiError::Network(_)));
        assert!(err.to_string().contains("404"));
        assert!(err.to_string().contains("/docs/providers/google/"));
    }
}
