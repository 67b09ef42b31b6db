use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::ScrapeError;
use crate::sites;

/// A product being watched for a price drop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitoredProduct {
    /// Opaque product id.
    pub id: String,
    /// Opaque owning user id.
    pub user_id: String,
    /// Display name.
    pub name: String,
    /// Source URL re-scraped every cycle.
    pub url: String,
    /// User-set target; a notification fires when the price reaches it.
    pub target_price: f64,
    /// Last observed price; `None` until the first successful scrape.
    pub current_price: Option<f64>,
    /// Store label derived from the URL host.
    pub store: String,
    /// Inactive products are skipped by the cycle.
    pub active: bool,
}

impl MonitoredProduct {
    /// Create an active product with no observed price yet.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::InvalidTargetPrice`] unless `target_price > 0`.
    pub fn new(
        id: impl Into<String>,
        user_id: impl Into<String>,
        name: impl Into<String>,
        url: impl Into<String>,
        target_price: f64,
    ) -> Result<Self, ScrapeError> {
        if !(target_price > 0.0) {
            return Err(ScrapeError::InvalidTargetPrice(target_price));
        }
        let url = url.into();
        let store = sites::store_label(&url);
        Ok(Self {
            id: id.into(),
            user_id: user_id.into(),
            name: name.into(),
            url,
            target_price,
            current_price: None,
            store,
            active: true,
        })
    }
}

/// Emitted when a scraped price reaches the product's target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationEvent {
    pub product_id: String,
    /// Previously observed price, when there was one.
    pub old_price: Option<f64>,
    pub new_price: f64,
    /// Percentage below target, rounded to two decimals.
    pub discount_pct: f64,
    pub timestamp: DateTime<Utc>,
}

impl NotificationEvent {
    pub(crate) fn new(product: &MonitoredProduct, new_price: f64) -> Self {
        let discount_pct =
            ((1.0 - new_price / product.target_price) * 10000.0).round() / 100.0;
        Self {
            product_id: product.id.clone(),
            old_price: product.current_price,
            new_price,
            discount_pct,
            timestamp: Utc::now(),
        }
    }
}

/// Outcome of one product within a cycle.
#[derive(Debug, Clone, Serialize)]
pub struct ProductReport {
    pub product_id: String,
    /// The price observed this cycle, when the scrape succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// The selector that produced it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,
    /// Failure reason, when the scrape failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Aggregate result of one pass over the active products.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CycleReport {
    /// How many products were scraped (inactive ones are not counted).
    pub checked: usize,
    /// Per-product outcomes, in input order.
    pub reports: Vec<ProductReport>,
    /// Price-drop events to hand to the notification dispatcher.
    pub notifications: Vec<NotificationEvent>,
}

impl CycleReport {
    /// Count of products whose scrape failed this cycle.
    pub fn failures(&self) -> usize {
        self.reports.iter().filter(|r| r.error.is_some()).count()
    }
}
