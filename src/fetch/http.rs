//! The lightweight fallback: a plain HTTP GET with browser-like headers.
//!
//! No JS execution, so it only works on server-rendered price markup. Bodies
//! that look like anti-bot interstitials are rejected as blocked rather than
//! handed to the selector bank.

use crate::core::client::{CHALLENGE_MARKERS, MIN_HTML_LEN};
use crate::core::{ScrapeClient, ScrapeError};
use crate::fetch::FetchStrategyKind;

pub(crate) async fn fetch(client: &ScrapeClient, url: &str) -> Result<String, ScrapeError> {
    let resp = client
        .http()
        .get(url)
        .header("Accept", "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8")
        .header("Accept-Language", "pt-BR,pt;q=0.9,en;q=0.8")
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                ScrapeError::FetchTimeout {
                    strategy: FetchStrategyKind::HttpGet,
                    timeout: client.http_cfg().timeout,
                }
            } else {
                ScrapeError::Http(e)
            }
        })?;

    let status = resp.status();
    if !status.is_success() {
        return Err(ScrapeError::FetchBlocked {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let html = resp.text().await?;
    if looks_blocked(&html) {
        return Err(ScrapeError::FetchBlocked {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    Ok(html)
}

/// Challenge interstitials come back with status 200; detect them from the body.
fn looks_blocked(html: &str) -> bool {
    if html.len() < MIN_HTML_LEN {
        return true;
    }
    let lower = html.to_lowercase();
    CHALLENGE_MARKERS.iter().any(|m| lower.contains(m))
}
