use pechincha::{CandidateKind, candidate_bank, sites::store_label};

#[test]
fn ranks_are_unique_and_strictly_increasing() {
    let bank = candidate_bank();
    assert!(!bank.is_empty());
    for pair in bank.windows(2) {
        assert!(
            pair[0].rank < pair[1].rank,
            "bank ranks must strictly increase: {} then {}",
            pair[0].rank,
            pair[1].rank
        );
    }
}

#[test]
fn specific_rules_rank_before_generic_ones() {
    let bank = candidate_bank();

    let rank_of = |label: &str| {
        bank.iter()
            .find(|c| c.label == label)
            .unwrap_or_else(|| panic!("missing candidate {label}"))
            .rank
    };

    // Marketplace containers before structured data, before class guesses,
    // before the brute-force scan.
    assert!(rank_of("amazon whole price") < rank_of("ld+json offers price"));
    assert!(rank_of("ld+json offers price") < rank_of("generic sales price"));
    assert!(rank_of("generic sales price") < rank_of("class contains price"));
    assert!(rank_of("class contains price") < rank_of("currency text scan"));
}

#[test]
fn text_scan_is_the_last_resort() {
    let bank = candidate_bank();
    let last = bank.last().unwrap();
    assert!(matches!(last.kind, CandidateKind::TextScan));
}

#[test]
fn store_labels_cover_known_hosts_and_fall_back_to_the_host() {
    assert_eq!(store_label("https://www.amazon.com.br/dp/X"), "Amazon");
    assert_eq!(store_label("https://www.kabum.com.br/produto/1"), "KaBuM!");
    assert_eq!(store_label("https://www.magazineluiza.com.br/p/1"), "Magazine Luiza");
    assert_eq!(store_label("https://loja-obscura.com.br/p/1"), "loja-obscura.com.br");
    assert_eq!(store_label("not a url"), "Loja desconhecida");
}
