//! URL host → store display label.
//!
//! A plain substring lookup; new stores are appended as they show up in the
//! wild. Unknown hosts fall back to the bare host name.

use url::Url;

static STORE_LABELS: &[(&str, &str)] = &[
    ("amazon", "Amazon"),
    ("mercadolivre", "Mercado Livre"),
    ("mercadolibre", "Mercado Livre"),
    ("magazineluiza", "Magazine Luiza"),
    ("magazinevoce", "Magazine Você"),
    ("americanas", "Americanas"),
    ("submarino", "Submarino"),
    ("casasbahia", "Casas Bahia"),
    ("pontofrio", "Ponto"),
    ("extra.com", "Extra"),
    ("kabum", "KaBuM!"),
    ("shopee", "Shopee"),
    ("aliexpress", "AliExpress"),
    ("netshoes", "Netshoes"),
    ("centauro", "Centauro"),
    ("shoptime", "Shoptime"),
    ("fastshop", "Fast Shop"),
];

/// Derive a store label from a product URL's host.
pub fn store_label(url: &str) -> String {
    let host = Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_default();

    for (fragment, label) in STORE_LABELS {
        if host.contains(fragment) {
            return (*label).to_string();
        }
    }
    if host.is_empty() {
        "Loja desconhecida".to_string()
    } else {
        host
    }
}
