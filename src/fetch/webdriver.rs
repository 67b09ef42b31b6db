//! Engine B: render through a WebDriver session (fantoccini).
//!
//! Used when the Chrome engine is blocked or crashes. The navigation future
//! runs under `tokio::time::timeout`; the session is closed on success,
//! timeout, and error alike so a stuck page never leaks a browser session
//! into the next strategy.

use fantoccini::ClientBuilder;
use tracing::warn;

use crate::core::ScrapeError;
use crate::core::client::WebDriverConfig;
use crate::fetch::FetchStrategyKind;

pub(crate) async fn fetch(cfg: &WebDriverConfig, url: &str) -> Result<String, ScrapeError> {
    let session = ClientBuilder::native()
        .connect(cfg.endpoint.as_str())
        .await
        .map_err(|e| ScrapeError::Browser {
            strategy: FetchStrategyKind::WebDriverRender,
            message: format!("webdriver session failed: {e}"),
        })?;

    let nav = async {
        session.goto(url).await?;
        tokio::time::sleep(cfg.settle_delay).await;
        session.source().await
    };
    let outcome = tokio::time::timeout(cfg.timeout, nav).await;

    // Close the session before inspecting the outcome.
    if let Err(e) = session.close().await {
        warn!(error = %e, "failed to close webdriver session");
    }

    match outcome {
        Err(_) => Err(ScrapeError::FetchTimeout {
            strategy: FetchStrategyKind::WebDriverRender,
            timeout: cfg.timeout,
        }),
        Ok(Err(e)) => Err(ScrapeError::Browser {
            strategy: FetchStrategyKind::WebDriverRender,
            message: e.to_string(),
        }),
        Ok(Ok(html)) => Ok(html),
    }
}
