//! The static candidate table.
//!
//! Site-specific rules were discovered empirically per marketplace and sit at
//! the top; structured-data reads come next, then generic class-name guesses,
//! then attribute heuristics, and finally the brute-force currency scan.
//! Ranks are spaced so a new rule can be inserted without renumbering;
//! append-order otherwise.

use super::{CandidateKind, SelectorCandidate};

static BANK: &[SelectorCandidate] = &[
    // ---- marketplace-specific containers ----
    SelectorCandidate {
        rank: 10,
        kind: CandidateKind::Css {
            selector: "#corePrice_feature_div .a-offscreen",
        },
        label: "amazon core price",
        site: Some("amazon"),
    },
    SelectorCandidate {
        rank: 20,
        kind: CandidateKind::Css {
            selector: ".a-price .a-offscreen",
        },
        label: "amazon offscreen price",
        site: Some("amazon"),
    },
    SelectorCandidate {
        rank: 30,
        kind: CandidateKind::Css {
            selector: ".a-price-whole",
        },
        label: "amazon whole price",
        site: Some("amazon"),
    },
    SelectorCandidate {
        rank: 40,
        kind: CandidateKind::Css {
            selector: ".ui-pdp-price__second-line .andes-money-amount__fraction",
        },
        label: "mercado livre pdp fraction",
        site: Some("mercadolivre"),
    },
    SelectorCandidate {
        rank: 50,
        kind: CandidateKind::Attr {
            selector: r#"meta[itemprop="price"]"#,
            attr: "content",
        },
        label: "itemprop price meta",
        site: None,
    },
    SelectorCandidate {
        rank: 60,
        kind: CandidateKind::Css {
            selector: r#"[data-testid="price-value"]"#,
        },
        label: "magalu price value",
        site: Some("magazineluiza"),
    },
    SelectorCandidate {
        rank: 70,
        kind: CandidateKind::Css {
            selector: r#"[class*="price__SalesPrice"]"#,
        },
        label: "americanas sales price",
        site: Some("americanas"),
    },
    SelectorCandidate {
        rank: 80,
        kind: CandidateKind::Css {
            selector: "#product-price",
        },
        label: "casas bahia product price",
        site: Some("casasbahia"),
    },
    SelectorCandidate {
        rank: 90,
        kind: CandidateKind::Css {
            selector: "h4.finalPrice",
        },
        label: "kabum final price",
        site: Some("kabum"),
    },
    // ---- structured data ----
    SelectorCandidate {
        rank: 120,
        kind: CandidateKind::JsonLd,
        label: "ld+json offers price",
        site: None,
    },
    SelectorCandidate {
        rank: 130,
        kind: CandidateKind::Attr {
            selector: r#"meta[property="product:price:amount"]"#,
            attr: "content",
        },
        label: "open graph price",
        site: None,
    },
    // ---- generic price classes ----
    SelectorCandidate {
        rank: 200,
        kind: CandidateKind::Css {
            selector: ".sales-price",
        },
        label: "generic sales price",
        site: None,
    },
    SelectorCandidate {
        rank: 210,
        kind: CandidateKind::Css {
            selector: ".price-value",
        },
        label: "generic price value",
        site: None,
    },
    SelectorCandidate {
        rank: 220,
        kind: CandidateKind::Css {
            selector: ".current-price",
        },
        label: "generic current price",
        site: None,
    },
    SelectorCandidate {
        rank: 230,
        kind: CandidateKind::Css {
            selector: ".product-price",
        },
        label: "generic product price",
        site: None,
    },
    SelectorCandidate {
        rank: 240,
        kind: CandidateKind::Css {
            selector: ".price",
        },
        label: "generic price class",
        site: None,
    },
    // ---- attribute heuristics ----
    SelectorCandidate {
        rank: 300,
        kind: CandidateKind::Attr {
            selector: "[data-price]",
            attr: "data-price",
        },
        label: "data-price attribute",
        site: None,
    },
    SelectorCandidate {
        rank: 310,
        kind: CandidateKind::Css {
            selector: r#"[itemprop="price"]"#,
        },
        label: "itemprop price text",
        site: None,
    },
    SelectorCandidate {
        rank: 320,
        kind: CandidateKind::Css {
            selector: r#"[class*="price"]"#,
        },
        label: "class contains price",
        site: None,
    },
    // ---- last resort ----
    SelectorCandidate {
        rank: 900,
        kind: CandidateKind::TextScan,
        label: "currency text scan",
        site: None,
    },
];

/// The full candidate bank, in strict priority order.
pub fn candidate_bank() -> &'static [SelectorCandidate] {
    BANK
}
