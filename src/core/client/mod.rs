//! Public client surface + builder.
//!
//! The client bundles the HTTP connection pool and the per-strategy
//! configuration that the fetch chain consumes. Defaults live in `constants`.

mod constants;

use std::path::PathBuf;
use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::core::ScrapeError;
use crate::fetch::FetchStrategyKind;
use constants::{
    DEFAULT_HTTP_TIMEOUT, DEFAULT_RENDER_TIMEOUT, DEFAULT_SETTLE_DELAY, DEFAULT_WEBDRIVER_URL,
    USER_AGENT,
};

pub(crate) use constants::{CHALLENGE_MARKERS, MIN_HTML_LEN};

/// Settings for the headless Chrome render strategy.
#[derive(Debug, Clone)]
pub struct ChromeConfig {
    pub(crate) timeout: Duration,
    pub(crate) settle_delay: Duration,
    pub(crate) binary: Option<PathBuf>,
    pub(crate) user_agent: String,
}

/// Settings for the WebDriver render strategy.
#[derive(Debug, Clone)]
pub struct WebDriverConfig {
    pub(crate) endpoint: Url,
    pub(crate) timeout: Duration,
    pub(crate) settle_delay: Duration,
}

/// Settings for the plain HTTP GET strategy.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub(crate) timeout: Duration,
}

/// Shared context for the extraction pipeline: one HTTP pool plus the
/// strategy chain configuration. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ScrapeClient {
    http: Client,
    strategies: Vec<FetchStrategyKind>,
    chrome: ChromeConfig,
    webdriver: WebDriverConfig,
    http_cfg: HttpConfig,
}

impl ScrapeClient {
    /// Create a new builder.
    pub fn builder() -> ScrapeClientBuilder {
        ScrapeClientBuilder::default()
    }

    /// The configured strategy chain, in attempt order.
    pub fn strategies(&self) -> &[FetchStrategyKind] {
        &self.strategies
    }

    /* -------- internal getters used by the fetch module -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn chrome(&self) -> &ChromeConfig {
        &self.chrome
    }
    pub(crate) fn webdriver(&self) -> &WebDriverConfig {
        &self.webdriver
    }
    pub(crate) fn http_cfg(&self) -> &HttpConfig {
        &self.http_cfg
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct ScrapeClientBuilder {
    user_agent: Option<String>,
    strategies: Option<Vec<FetchStrategyKind>>,
    webdriver_url: Option<Url>,
    chrome_binary: Option<PathBuf>,
    render_timeout: Option<Duration>,
    http_timeout: Option<Duration>,
    settle_delay: Option<Duration>,
}

impl ScrapeClientBuilder {
    /// Override the User-Agent used by every strategy.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the strategy chain. The default is the full fallback order:
    /// Chrome render, WebDriver render, plain HTTP GET.
    pub fn strategies(mut self, order: Vec<FetchStrategyKind>) -> Self {
        self.strategies = Some(order);
        self
    }

    /// Restrict the chain to the plain HTTP GET strategy. Useful for
    /// server-rendered sites and for tests, where no browser is available.
    pub fn http_only(self) -> Self {
        self.strategies(vec![FetchStrategyKind::HttpGet])
    }

    /// Override the WebDriver endpoint (default `http://localhost:4444`).
    pub fn webdriver_url(mut self, url: Url) -> Self {
        self.webdriver_url = Some(url);
        self
    }

    /// Point the Chrome strategy at a specific browser binary.
    pub fn chrome_binary(mut self, path: impl Into<PathBuf>) -> Self {
        self.chrome_binary = Some(path.into());
        self
    }

    /// Set the time budget for each headless render strategy. Default: 30s.
    pub fn render_timeout(mut self, dur: Duration) -> Self {
        self.render_timeout = Some(dur);
        self
    }

    /// Set the time budget for the plain HTTP GET strategy. Default: 10s.
    pub fn http_timeout(mut self, dur: Duration) -> Self {
        self.http_timeout = Some(dur);
        self
    }

    /// Set the post-navigation settle delay for render strategies. Default: 2s.
    pub fn settle_delay(mut self, dur: Duration) -> Self {
        self.settle_delay = Some(dur);
        self
    }

    pub fn build(self) -> Result<ScrapeClient, ScrapeError> {
        let strategies = self.strategies.unwrap_or_else(|| {
            vec![
                FetchStrategyKind::ChromeRender,
                FetchStrategyKind::WebDriverRender,
                FetchStrategyKind::HttpGet,
            ]
        });
        if strategies.is_empty() {
            return Err(ScrapeError::NoStrategies);
        }

        let user_agent = self.user_agent.unwrap_or_else(|| USER_AGENT.to_string());
        let render_timeout = self.render_timeout.unwrap_or(DEFAULT_RENDER_TIMEOUT);
        let http_timeout = self.http_timeout.unwrap_or(DEFAULT_HTTP_TIMEOUT);
        let settle_delay = self.settle_delay.unwrap_or(DEFAULT_SETTLE_DELAY);

        let webdriver_endpoint = match self.webdriver_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_WEBDRIVER_URL)?,
        };

        let http = reqwest::Client::builder()
            .user_agent(user_agent.clone())
            .cookie_store(true)
            .timeout(http_timeout)
            .build()?;

        Ok(ScrapeClient {
            http,
            strategies,
            chrome: ChromeConfig {
                timeout: render_timeout,
                settle_delay,
                binary: self.chrome_binary,
                user_agent,
            },
            webdriver: WebDriverConfig {
                endpoint: webdriver_endpoint,
                timeout: render_timeout,
                settle_delay,
            },
            http_cfg: HttpConfig {
                timeout: http_timeout,
            },
        })
    }
}
