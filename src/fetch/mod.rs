//! Fetch Strategy Chain: obtain rendered HTML for a URL.
//!
//! Strategies are attempted in the client's configured order, short-circuiting
//! on the first success. A failure in one strategy is logged and converted
//! into "try the next one"; only exhaustion of the whole chain surfaces an
//! error to the caller.

mod chrome;
mod http;
mod webdriver;

use std::fmt;

use serde::Serialize;
use tracing::{debug, warn};

use crate::core::{ScrapeClient, ScrapeError};

/// One method of obtaining rendered HTML for a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FetchStrategyKind {
    /// Headless Chrome render (DevTools protocol). Handles JS-rendered prices.
    ChromeRender,
    /// Alternate engine: render via a WebDriver session (e.g. geckodriver).
    WebDriverRender,
    /// Plain HTTP GET with a browser-like UA. Cheapest; server-rendered sites only.
    HttpGet,
}

impl fmt::Display for FetchStrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ChromeRender => "chrome-render",
            Self::WebDriverRender => "webdriver-render",
            Self::HttpGet => "http-get",
        };
        f.write_str(name)
    }
}

/// A successfully fetched document, tagged with the strategy that produced it.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// The rendered HTML body.
    pub html: String,
    /// Which strategy succeeded.
    pub strategy: FetchStrategyKind,
}

/// Run the strategy chain for `url`, returning the first strategy's HTML.
///
/// Each strategy enforces its own timeout and releases its resources on every
/// exit path, so a failed render never leaks a browser process into the next
/// attempt.
pub(crate) async fn fetch_page(
    client: &ScrapeClient,
    url: &str,
) -> Result<FetchedPage, ScrapeError> {
    let mut last: Option<ScrapeError> = None;

    for &strategy in client.strategies() {
        let attempt = match strategy {
            FetchStrategyKind::ChromeRender => chrome::fetch(client.chrome(), url).await,
            FetchStrategyKind::WebDriverRender => webdriver::fetch(client.webdriver(), url).await,
            FetchStrategyKind::HttpGet => http::fetch(client, url).await,
        };

        match attempt {
            Ok(html) => {
                debug!(%url, %strategy, html_len = html.len(), "fetch strategy succeeded");
                return Ok(FetchedPage { html, strategy });
            }
            Err(e) => {
                warn!(%url, %strategy, error = %e, "fetch strategy failed, trying next");
                last = Some(e);
            }
        }
    }

    match last {
        Some(e) => Err(ScrapeError::AllStrategiesExhausted { last: Box::new(e) }),
        None => Err(ScrapeError::NoStrategies),
    }
}
