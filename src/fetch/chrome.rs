//! Engine A: headless Chrome over the DevTools protocol.
//!
//! `headless_chrome` is a blocking API, so the render runs under
//! `spawn_blocking`. Timeouts are enforced inside the browser itself
//! (`set_default_timeout` + `idle_browser_timeout`) so the blocking call
//! returns within budget and the `Browser` handle drops, killing the child
//! process, before the chain moves on to the next strategy.

use std::ffi::OsString;
use std::time::Duration;

use headless_chrome::{Browser, LaunchOptionsBuilder};

use crate::core::ScrapeError;
use crate::core::client::ChromeConfig;
use crate::fetch::FetchStrategyKind;

pub(crate) async fn fetch(cfg: &ChromeConfig, url: &str) -> Result<String, ScrapeError> {
    let cfg = cfg.clone();
    let url = url.to_string();

    tokio::task::spawn_blocking(move || render(&cfg, &url))
        .await
        .map_err(|e| ScrapeError::Browser {
            strategy: FetchStrategyKind::ChromeRender,
            message: format!("render task failed: {e}"),
        })?
}

fn render(cfg: &ChromeConfig, url: &str) -> Result<String, ScrapeError> {
    let args: Vec<OsString> = vec![
        OsString::from("--disable-gpu"),
        OsString::from("--no-sandbox"),
        OsString::from("--disable-blink-features=AutomationControlled"),
        OsString::from("--window-size=1920,1080"),
        OsString::from(format!("--user-agent={}", cfg.user_agent)),
    ];

    let arg_refs: Vec<&std::ffi::OsStr> = args.iter().map(OsString::as_os_str).collect();

    let options = LaunchOptionsBuilder::default()
        .headless(true)
        .path(cfg.binary.clone())
        .args(arg_refs)
        .idle_browser_timeout(cfg.timeout)
        .build()
        .map_err(|e| browser_err(e.to_string()))?;

    // Dropping `browser` kills the child process on every exit path below.
    let browser = Browser::new(options).map_err(|e| classify(e.to_string(), cfg.timeout))?;
    let tab = browser
        .new_tab()
        .map_err(|e| classify(e.to_string(), cfg.timeout))?;
    tab.set_default_timeout(cfg.timeout);

    tab.navigate_to(url)
        .map_err(|e| classify(e.to_string(), cfg.timeout))?;
    tab.wait_until_navigated()
        .map_err(|e| classify(e.to_string(), cfg.timeout))?;

    // Let client-side price widgets paint before taking the DOM snapshot.
    std::thread::sleep(cfg.settle_delay);

    tab.get_content()
        .map_err(|e| classify(e.to_string(), cfg.timeout))
}

fn browser_err(message: String) -> ScrapeError {
    ScrapeError::Browser {
        strategy: FetchStrategyKind::ChromeRender,
        message,
    }
}

/// Surface DevTools deadline errors as the chain's timeout kind.
fn classify(message: String, timeout: Duration) -> ScrapeError {
    let lower = message.to_lowercase();
    if lower.contains("timed out") || lower.contains("timeout") {
        ScrapeError::FetchTimeout {
            strategy: FetchStrategyKind::ChromeRender,
            timeout,
        }
    } else {
        browser_err(message)
    }
}
