//! Monitoring cycle: one sequential pass over the active products.
//!
//! Products are scraped one at a time, both to stay polite toward target
//! sites and to bound concurrent headless-browser instances. One product's
//! failure never aborts the batch; it is recorded in the cycle report and the
//! loop moves on.

mod model;

pub use model::{CycleReport, MonitoredProduct, NotificationEvent, ProductReport};

use tracing::{debug, info, warn};

use crate::core::ScrapeClient;
use crate::extract;

/// Re-scrape every active product, updating `current_price` in place and
/// collecting notification events for prices at or below target.
pub async fn run_cycle(client: &ScrapeClient, products: &mut [MonitoredProduct]) -> CycleReport {
    let mut report = CycleReport::default();

    for product in products.iter_mut() {
        if !product.active {
            debug!(product_id = %product.id, "skipping inactive product");
            continue;
        }
        report.checked += 1;

        match extract::scrape_price_auto(client, &product.url).await {
            Ok(m) => {
                info!(
                    product_id = %product.id,
                    store = %product.store,
                    price = m.price,
                    selector = %m.selector,
                    "scraped current price"
                );
                if m.price <= product.target_price {
                    report
                        .notifications
                        .push(NotificationEvent::new(product, m.price));
                }
                product.current_price = Some(m.price);
                report.reports.push(ProductReport {
                    product_id: product.id.clone(),
                    price: Some(m.price),
                    selector: Some(m.selector),
                    error: None,
                });
            }
            Err(e) => {
                warn!(product_id = %product.id, url = %product.url, error = %e, "scrape failed");
                report.reports.push(ProductReport {
                    product_id: product.id.clone(),
                    price: None,
                    selector: None,
                    error: Some(e.to_string()),
                });
            }
        }
    }

    report
}
