//! Centralized constants for defaults: UA, timeouts, block detection.

use std::time::Duration;

/// Default desktop UA to avoid trivial bot blocking.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// Default WebDriver endpoint for the fallback render engine.
pub(crate) const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:4444";

/// Time budget for a headless render (navigation + paint), per engine.
pub(crate) const DEFAULT_RENDER_TIMEOUT: Duration = Duration::from_secs(30);

/// Time budget for the plain HTTP GET fallback.
pub(crate) const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Extra wait after navigation so client-side price widgets can paint.
pub(crate) const DEFAULT_SETTLE_DELAY: Duration = Duration::from_secs(2);

/// Bodies shorter than this are treated as block/interstitial pages.
pub(crate) const MIN_HTML_LEN: usize = 256;

/// Lowercased markers of anti-bot challenge interstitials.
pub(crate) const CHALLENGE_MARKERS: &[&str] = &[
    "cf-browser-verification",
    "cf-challenge",
    "cf-turnstile",
    "checking your browser",
    "just a moment",
    "enable javascript and cookies to continue",
    "challenge-platform",
    "verify you are human",
    "access denied",
];
