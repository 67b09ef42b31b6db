use std::time::Duration;

use thiserror::Error;

use crate::fetch::FetchStrategyKind;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A fetch strategy exceeded its time budget.
    #[error("{strategy} timed out after {timeout:?}")]
    FetchTimeout {
        /// The strategy that timed out.
        strategy: FetchStrategyKind,
        /// The configured time budget for that strategy.
        timeout: Duration,
    },

    /// The target site returned a non-success status or an anti-bot challenge page.
    #[error("fetch blocked: status {status} at {url}")]
    FetchBlocked {
        /// The HTTP status code (200 when the block was detected from the body).
        status: u16,
        /// The URL that was blocked.
        url: String,
    },

    /// A headless-browser engine failed to launch, navigate, or render.
    #[error("browser error ({strategy}): {message}")]
    Browser {
        /// The engine that failed.
        strategy: FetchStrategyKind,
        /// The engine's error, flattened to text.
        message: String,
    },

    /// A caller-supplied selector string is not valid CSS.
    #[error("invalid selector: {0}")]
    InvalidSelector(String),

    /// HTML was fetched, but no candidate selector matched a price element.
    #[error("no selector matched a price element")]
    NoSelectorMatch,

    /// A selector matched text, but no valid currency amount could be parsed from it.
    #[error("matched text did not normalize to a price: {0:?}")]
    NormalizationFailed(String),

    /// Every fetch strategy failed for this URL.
    #[error("all fetch strategies exhausted; last error: {last}")]
    AllStrategiesExhausted {
        /// The error from the last strategy attempted.
        last: Box<ScrapeError>,
    },

    /// The client was built with an empty strategy chain.
    #[error("no fetch strategies configured")]
    NoStrategies,

    /// A monitored product was constructed with a non-positive target price.
    #[error("invalid target price: {0}")]
    InvalidTargetPrice(f64),
}
