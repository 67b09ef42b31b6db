mod common;

use httpmock::{Method::GET, MockServer};
use pechincha::{MonitoredProduct, ScrapeError, run_cycle};

fn product(id: &str, url: String, target: f64) -> MonitoredProduct {
    MonitoredProduct::new(id, "user-1", format!("Produto {id}"), url, target).unwrap()
}

#[tokio::test]
async fn one_unreachable_product_does_not_abort_the_batch() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/a");
        then.status(200)
            .header("content-type", "text/html")
            .body(common::product_page(r#"<span class="price">R$ 899,94</span>"#));
    });
    server.mock(|when, then| {
        when.method(GET).path("/b");
        then.status(404).body("Not Found");
    });
    server.mock(|when, then| {
        when.method(GET).path("/c");
        then.status(200)
            .header("content-type", "text/html")
            .body(common::product_page(r#"<span class="price">R$ 1.500,00</span>"#));
    });

    let mut products = vec![
        product("a", server.url("/a"), 900.0),
        product("b", server.url("/b"), 50.0),
        product("c", server.url("/c"), 1000.0),
    ];

    let client = common::http_only_client();
    let report = run_cycle(&client, &mut products).await;

    assert_eq!(report.checked, 3);
    assert_eq!(report.reports.len(), 3);
    assert_eq!(report.failures(), 1);

    // Healthy products were scraped and updated in place.
    assert_eq!(products[0].current_price, Some(899.94));
    assert_eq!(products[1].current_price, None);
    assert_eq!(products[2].current_price, Some(1500.00));

    // The failed product carries its error; the others carry their price.
    let failed = &report.reports[1];
    assert_eq!(failed.product_id, "b");
    assert!(failed.error.is_some());
    assert_eq!(report.reports[0].price, Some(899.94));
    assert_eq!(report.reports[2].price, Some(1500.00));
}

#[tokio::test]
async fn notifies_only_when_price_reaches_target() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/hit");
        then.status(200)
            .header("content-type", "text/html")
            .body(common::product_page(r#"<span class="price">R$ 899,94</span>"#));
    });
    server.mock(|when, then| {
        when.method(GET).path("/miss");
        then.status(200)
            .header("content-type", "text/html")
            .body(common::product_page(r#"<span class="price">R$ 1.500,00</span>"#));
    });

    let mut products = vec![
        product("hit", server.url("/hit"), 900.0),
        product("miss", server.url("/miss"), 1000.0),
    ];
    // A previous observation, so the event carries an old price.
    products[0].current_price = Some(1099.90);

    let client = common::http_only_client();
    let report = run_cycle(&client, &mut products).await;

    assert_eq!(report.notifications.len(), 1);
    let event = &report.notifications[0];
    assert_eq!(event.product_id, "hit");
    assert_eq!(event.old_price, Some(1099.90));
    assert_eq!(event.new_price, 899.94);
    assert!(event.discount_pct > 0.0);
}

#[tokio::test]
async fn inactive_products_are_skipped() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/sleeping");
        then.status(200)
            .header("content-type", "text/html")
            .body(common::product_page(r#"<span class="price">R$ 10,00</span>"#));
    });

    let mut products = vec![product("sleeping", server.url("/sleeping"), 20.0)];
    products[0].active = false;

    let client = common::http_only_client();
    let report = run_cycle(&client, &mut products).await;

    assert_eq!(report.checked, 0);
    assert!(report.reports.is_empty());
    assert!(report.notifications.is_empty());
    mock.assert_hits(0);
}

#[test]
fn rejects_non_positive_target_price() {
    let err = MonitoredProduct::new("x", "u", "Produto", "https://www.exemplo.com.br/p", 0.0)
        .unwrap_err();
    assert!(matches!(err, ScrapeError::InvalidTargetPrice(_)));

    let err = MonitoredProduct::new("x", "u", "Produto", "https://www.exemplo.com.br/p", -5.0)
        .unwrap_err();
    assert!(matches!(err, ScrapeError::InvalidTargetPrice(_)));
}

#[test]
fn derives_store_label_from_url() {
    let p = MonitoredProduct::new(
        "x",
        "u",
        "Echo Dot",
        "https://www.amazon.com.br/dp/B09B8V1LZ3",
        200.0,
    )
    .unwrap();
    assert_eq!(p.store, "Amazon");

    let p = MonitoredProduct::new(
        "y",
        "u",
        "Fone",
        "https://produto.mercadolivre.com.br/MLB-12345",
        100.0,
    )
    .unwrap();
    assert_eq!(p.store, "Mercado Livre");
}
