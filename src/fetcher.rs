use crate::BrochureError;
use reqwest::{header::HeaderMap, Client};
use std::time::Duration;
use tracing::{debug, error, instrument};

/// HTTP fetcher for the company website. One GET per invocation, no retry.
#[derive(Clone)]
pub struct Fetcher {
    client: Client,
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetcher {
    pub fn new() -> Self {
        let user_agent = "brochure-gen/0.1.0";
        let timeout = Duration::from_secs(10);
        debug!("Fetcher initialized with default configuration");

        Self::new_with_custom_config(timeout, user_agent)
    }

    pub fn new_with_custom_config(timeout: Duration, user_agent: &str) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .unwrap_or_else(|e| {
                error!(error = %e, "Failed to create HTTP client");
                panic!("Failed to initialize HTTP client: {}", e);
            });
        Fetcher { client }
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Creates a Fetcher with custom configuration
    /// This method allows users to provide their own configuration options
    pub fn new_with_config(config: FetcherConfig) -> Self {
        let mut client_builder = Client::builder()
            .user_agent(config.user_agent)
            .timeout(config.timeout);

        if let Some(headers) = config.headers {
            client_builder = client_builder.default_headers(headers);
        }

        if let Some(redirect_policy) = config.redirect_policy {
            client_builder = client_builder.redirect(redirect_policy);
        }

        let client = client_builder
            .build()
            .expect("Failed to create HTTP client with custom config");

        Self { client }
    }

    /// Fetch the page body as HTML text.
    ///
    /// Transport errors and timeouts map to their own variants; a non-2xx
    /// status or a response that is not HTML is rejected before the body is
    /// read.
    #[instrument(level = "debug", skip(self), err)]
    pub async fn fetch(&self, url: &str) -> Result<String, BrochureError> {
        debug!(url = %url, "Starting fetch request");

        let response = self.client.get(url).send().await.map_err(|e| {
            error!(error = %e, url = %url, "Failed to send request");
            if e.is_timeout() {
                BrochureError::TimeoutError(e.to_string())
            } else {
                BrochureError::FetchError(e.to_string())
            }
        })?;

        if !response.status().is_success() {
            return Err(BrochureError::FetchError(format!(
                "Server returned status: {}",
                response.status()
            )));
        }

        if let Some(content_type) = response.headers().get(reqwest::header::CONTENT_TYPE) {
            let content_type = content_type.to_str().unwrap_or_default();
            if !content_type.contains("html") && !content_type.contains("text") {
                return Err(BrochureError::InvalidContentType(content_type.to_string()));
            }
        }

        let content = response.text().await.map_err(|e| {
            error!(error = %e, url = %url, "Failed to read response body");
            BrochureError::FetchError(e.to_string())
        })?;

        debug!(url = %url, content_length = content.len(), "Successfully fetched webpage");
        Ok(content)
    }
}

pub struct FetcherConfig {
    pub user_agent: String,
    pub timeout: Duration,
    pub headers: Option<HeaderMap>,
    pub redirect_policy: Option<reqwest::redirect::Policy>,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            user_agent: "brochure-gen/0.1.0".to_string(),
            timeout: Duration::from_secs(10),
            headers: None,
            redirect_policy: None,
        }
    }
}
