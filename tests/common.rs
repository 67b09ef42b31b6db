#![allow(dead_code)]

use std::time::Duration;

use pechincha::ScrapeClient;

/// An HTTP-only client: no browser engines in CI, short timeout.
pub fn http_only_client() -> ScrapeClient {
    ScrapeClient::builder()
        .http_only()
        .http_timeout(Duration::from_secs(5))
        .build()
        .expect("client")
}

/// Wrap a fragment in a realistic product page. The boilerplate keeps the
/// body above the block-detection length floor.
pub fn product_page(fragment: &str) -> String {
    format!(
        r#"<!doctype html>
<html lang="pt-BR">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Produto em oferta | Loja Exemplo</title>
</head>
<body>
<header><nav>Departamentos | Ofertas do dia | Atendimento | Meus pedidos</nav></header>
<main>
<h1>Produto Exemplo 128GB</h1>
{fragment}
<section class="descricao">Entrega para todo o Brasil. Parcele em até 10x sem juros.</section>
</main>
<footer>&copy; 2025 Loja Exemplo LTDA &mdash; CNPJ 00.000.000/0001-00</footer>
</body>
</html>"#
    )
}
