//! Extraction Orchestrator: fetch chain + candidate bank + normalizer,
//! composed into a single "get me the current price for this URL" operation.
//!
//! Automatic mode walks the whole candidate bank in priority order and takes
//! the first match that normalizes; manual mode applies one caller-supplied
//! selector and skips the bank. The first valid match always wins; priority
//! rank is the only confidence signal.

use scraper::{Html, Selector};
use serde::Serialize;
use tracing::debug;

use crate::core::{ScrapeClient, ScrapeError};
use crate::fetch::{self, FetchStrategyKind, FetchedPage};
use crate::price;
use crate::selectors::{self, candidate_bank};

/// A successfully extracted price, tagged for diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceMatch {
    /// Normalized decimal amount, e.g. `899.94`.
    pub price: f64,
    /// The selector (or rule identifier) that produced the match.
    pub selector: String,
    /// The fetch strategy that produced the HTML.
    pub strategy: FetchStrategyKind,
}

/// Wire-shaped envelope (`success`/`price`/`selector`/`error`) for callers
/// that serialize results to the web layer.
#[derive(Debug, Clone, Serialize)]
pub struct ScrapeOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<Result<PriceMatch, ScrapeError>> for ScrapeOutcome {
    fn from(res: Result<PriceMatch, ScrapeError>) -> Self {
        match res {
            Ok(m) => Self {
                success: true,
                price: Some(m.price),
                selector: Some(m.selector),
                error: None,
            },
            Err(e) => Self {
                success: false,
                price: None,
                selector: None,
                error: Some(e.to_string()),
            },
        }
    }
}

/// Fetch `url` and extract its current price using the full candidate bank.
///
/// Candidates are evaluated in strict priority order; the first matched text
/// that normalizes to a valid amount wins. A "couldn't find the price" case
/// is an ordinary error result, never a panic.
///
/// # Errors
///
/// Returns [`ScrapeError::AllStrategiesExhausted`] when no fetch strategy
/// produced HTML, [`ScrapeError::NoSelectorMatch`] when no candidate matched
/// any element, or [`ScrapeError::NormalizationFailed`] when candidates
/// matched text but none of it parsed as an amount.
pub async fn scrape_price_auto(
    client: &ScrapeClient,
    url: &str,
) -> Result<PriceMatch, ScrapeError> {
    let page = fetch::fetch_page(client, url).await?;
    scan_bank(&page)
}

/// Fetch `url` and extract its price using only `selector`, skipping the bank.
///
/// # Errors
///
/// Returns [`ScrapeError::InvalidSelector`] for unparsable CSS,
/// [`ScrapeError::NoSelectorMatch`] when nothing matches, or
/// [`ScrapeError::NormalizationFailed`] when the matched text holds no amount.
pub async fn scrape_price(
    client: &ScrapeClient,
    url: &str,
    selector: &str,
) -> Result<PriceMatch, ScrapeError> {
    // Validate before spending a fetch on it.
    if Selector::parse(selector).is_err() {
        return Err(ScrapeError::InvalidSelector(selector.to_string()));
    }

    let page = fetch::fetch_page(client, url).await?;
    scan_explicit(&page, selector)
}

/// Walk the candidate bank against fetched HTML, first valid match wins.
fn scan_bank(page: &FetchedPage) -> Result<PriceMatch, ScrapeError> {
    let doc = Html::parse_document(&page.html);
    let mut first_unparsed: Option<String> = None;

    for candidate in candidate_bank() {
        for m in candidate.matches(&doc) {
            match price::normalize(&m.text) {
                Some(amount) => {
                    debug!(
                        rank = candidate.rank,
                        label = candidate.label,
                        selector = %m.selector,
                        price = amount,
                        "candidate matched"
                    );
                    return Ok(PriceMatch {
                        price: amount,
                        selector: m.selector,
                        strategy: page.strategy,
                    });
                }
                None => {
                    if first_unparsed.is_none() {
                        first_unparsed = Some(m.text);
                    }
                }
            }
        }
    }

    match first_unparsed {
        Some(text) => Err(ScrapeError::NormalizationFailed(text)),
        None => Err(ScrapeError::NoSelectorMatch),
    }
}

/// Apply one explicit selector to fetched HTML.
fn scan_explicit(page: &FetchedPage, selector: &str) -> Result<PriceMatch, ScrapeError> {
    let sel =
        Selector::parse(selector).map_err(|_| ScrapeError::InvalidSelector(selector.to_string()))?;
    let doc = Html::parse_document(&page.html);

    let mut first_text: Option<String> = None;
    for el in doc.select(&sel) {
        // Elements like `<meta>` carry the amount in `content`, not text.
        let text = {
            let t = selectors::element_text(&el);
            if t.is_empty() {
                el.value().attr("content").unwrap_or_default().to_string()
            } else {
                t
            }
        };
        if text.is_empty() {
            continue;
        }
        if let Some(amount) = price::normalize(&text) {
            return Ok(PriceMatch {
                price: amount,
                selector: selector.to_string(),
                strategy: page.strategy,
            });
        }
        if first_text.is_none() {
            first_text = Some(text);
        }
    }

    match first_text {
        Some(text) => Err(ScrapeError::NormalizationFailed(text)),
        None => Err(ScrapeError::NoSelectorMatch),
    }
}
