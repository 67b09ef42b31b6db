//! pechincha: price-drop watcher core for Brazilian e-commerce.
//!
//! The crate is built around one pipeline: given a product URL, obtain
//! rendered HTML (trying headless Chrome, then a WebDriver engine, then a
//! plain GET), locate the price element with an ordered bank of selector
//! heuristics, and normalize Brazilian-locale money text (`R$ 1.234,56`)
//! into a comparable amount. On top of that sits a sequential monitoring
//! cycle that re-scrapes watched products and emits notification events when
//! a price reaches its target.
//!
//! ```no_run
//! use pechincha::{ScrapeClient, scrape_price_auto};
//!
//! # async fn run() -> Result<(), pechincha::ScrapeError> {
//! let client = ScrapeClient::builder().build()?;
//! let hit = scrape_price_auto(&client, "https://www.example.com.br/produto/123").await?;
//! println!("R$ {:.2} via {}", hit.price, hit.selector);
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod extract;
pub mod fetch;
pub mod monitor;
pub mod price;
pub mod selectors;
pub mod sites;

pub use crate::core::{ScrapeClient, ScrapeClientBuilder, ScrapeError};
pub use extract::{PriceMatch, ScrapeOutcome, scrape_price, scrape_price_auto};
pub use fetch::{FetchStrategyKind, FetchedPage};
pub use monitor::{CycleReport, MonitoredProduct, NotificationEvent, ProductReport, run_cycle};
pub use selectors::{CandidateKind, CandidateMatch, SelectorCandidate, candidate_bank};
