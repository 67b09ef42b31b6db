//! Selector Candidate Bank: ordered heuristics for where a price lives in
//! the DOM.
//!
//! Candidates are tagged data (rank + kind + label) consumed by one matching
//! function per kind. Structurally specific rules (site-specific containers,
//! structured data) rank before generic class-name guesses, which rank before
//! the brute-force currency text scan, so a crossed-out "was" price or a
//! shipping fee is only matched when nothing better exists.

mod bank;

pub use bank::candidate_bank;

use scraper::{ElementRef, Html, Selector};
use serde_json::Value;
use tracing::warn;

/// How a candidate locates price text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateKind {
    /// Query a CSS selector and read the element's text content.
    Css {
        /// The selector to query.
        selector: &'static str,
    },
    /// Query a CSS selector and read an attribute value instead of text.
    Attr {
        /// The selector to query.
        selector: &'static str,
        /// The attribute carrying the amount.
        attr: &'static str,
    },
    /// Scan `application/ld+json` blocks for an `offers.price`-style field.
    JsonLd,
    /// Scan every leaf element whose text contains the currency symbol.
    TextScan,
}

/// One heuristic rule for locating a price element within HTML.
#[derive(Debug, Clone, Copy)]
pub struct SelectorCandidate {
    /// Strictly-ordered evaluation priority; unique across the bank.
    pub rank: u32,
    /// The matching rule.
    pub kind: CandidateKind,
    /// Human label for diagnostics.
    pub label: &'static str,
    /// Originating site family, when the rule was discovered empirically on
    /// one marketplace. Informational only; every candidate is evaluated.
    pub site: Option<&'static str>,
}

/// One `(matched text, element-identifying selector)` pair.
#[derive(Debug, Clone)]
pub struct CandidateMatch {
    /// The raw text (or attribute/JSON value) the rule matched.
    pub text: String,
    /// A selector identifying where the match came from, for diagnostics.
    pub selector: String,
}

impl SelectorCandidate {
    /// Apply this candidate to a parsed document, returning zero or more
    /// matches in document order.
    pub fn matches(&self, doc: &Html) -> Vec<CandidateMatch> {
        match self.kind {
            CandidateKind::Css { selector } => match_css(doc, selector),
            CandidateKind::Attr { selector, attr } => match_attr(doc, selector, attr),
            CandidateKind::JsonLd => match_json_ld(doc),
            CandidateKind::TextScan => match_text_scan(doc),
        }
    }
}

fn parse_static(selector: &'static str) -> Option<Selector> {
    match Selector::parse(selector) {
        Ok(s) => Some(s),
        Err(e) => {
            warn!(selector, error = %e, "bank selector failed to parse, skipping");
            None
        }
    }
}

fn match_css(doc: &Html, selector: &'static str) -> Vec<CandidateMatch> {
    let Some(sel) = parse_static(selector) else {
        return Vec::new();
    };
    doc.select(&sel)
        .filter_map(|el| {
            let text = element_text(&el);
            (!text.is_empty()).then(|| CandidateMatch {
                text,
                selector: selector.to_string(),
            })
        })
        .collect()
}

fn match_attr(doc: &Html, selector: &'static str, attr: &'static str) -> Vec<CandidateMatch> {
    let Some(sel) = parse_static(selector) else {
        return Vec::new();
    };
    doc.select(&sel)
        .filter_map(|el| {
            el.value().attr(attr).map(|v| CandidateMatch {
                text: v.trim().to_string(),
                selector: format!("{selector}@{attr}"),
            })
        })
        .collect()
}

/// Pull `price`/`lowPrice` values out of `application/ld+json` product blocks.
fn match_json_ld(doc: &Html) -> Vec<CandidateMatch> {
    let Some(sel) = parse_static(r#"script[type="application/ld+json"]"#) else {
        return Vec::new();
    };
    let mut out = Vec::new();
    for el in doc.select(&sel) {
        let raw = el.text().collect::<String>();
        let Ok(value) = serde_json::from_str::<Value>(&raw) else {
            continue;
        };
        collect_json_prices(&value, &mut out);
    }
    out
}

fn collect_json_prices(value: &Value, out: &mut Vec<CandidateMatch>) {
    match value {
        Value::Object(map) => {
            for key in ["price", "lowPrice"] {
                if let Some(v) = map.get(key) {
                    let text = match v {
                        Value::String(s) => s.clone(),
                        Value::Number(n) => n.to_string(),
                        _ => continue,
                    };
                    out.push(CandidateMatch {
                        text,
                        selector: format!("ld+json:{key}"),
                    });
                }
            }
            for v in map.values() {
                collect_json_prices(v, out);
            }
        }
        Value::Array(items) => {
            for v in items {
                collect_json_prices(v, out);
            }
        }
        _ => {}
    }
}

/// Brute force: any leaf element whose text mentions `R$`.
fn match_text_scan(doc: &Html) -> Vec<CandidateMatch> {
    doc.root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|el| is_leaf(el) && !is_non_content(el))
        .filter_map(|el| {
            let text = element_text(&el);
            text.contains("R$").then(|| CandidateMatch {
                selector: identify(&el),
                text,
            })
        })
        .collect()
}

fn is_leaf(el: &ElementRef<'_>) -> bool {
    el.children().all(|c| !c.value().is_element())
}

fn is_non_content(el: &ElementRef<'_>) -> bool {
    matches!(el.value().name(), "script" | "style" | "noscript" | "del" | "s")
}

/// Build a short identifying selector (`tag.first-class`) for diagnostics.
fn identify(el: &ElementRef<'_>) -> String {
    let tag = el.value().name();
    match el.value().classes().next() {
        Some(class) => format!("{tag}.{class}"),
        None => tag.to_string(),
    }
}

/// Collapse an element's text nodes into one trimmed string.
pub(crate) fn element_text(el: &ElementRef<'_>) -> String {
    el.text().collect::<String>().split_whitespace().collect::<Vec<_>>().join(" ")
}
