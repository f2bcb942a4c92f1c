use std::thread;

use price_common::{PriceClass, explain_price, normalize_amount, normalize_price, normalize_price_str};

#[test]
fn fallback_sentinels() {
    assert_eq!(normalize_price(None), "€ --");
    assert_eq!(normalize_price(Some("")), "—");
    assert_eq!(normalize_price(Some("n/a")), "N/A");
    assert_eq!(normalize_price(Some("N/A")), "N/A");
}

#[test]
fn symbol_candidates_share_a_canonical_form() {
    assert_eq!(normalize_price_str("€12,50"), "€12.50");
    assert_eq!(normalize_price_str("12.50€"), "€12.50");
    assert_eq!(normalize_price_str("EUR 12,50"), "€12.50");
    assert_eq!(normalize_price_str("12.50 eur"), "€12.50");
}

#[test]
fn code_candidates_resolve_through_the_table() {
    assert_eq!(normalize_price_str("USD 9.99"), "$9.99");
    assert_eq!(normalize_price_str("INR 250"), "₹250");
    assert_eq!(normalize_price_str("JPY 1200"), "¥1200");
    assert_eq!(normalize_price_str("45 CAD"), "CAD 45");
}

#[test]
fn whole_numbers_never_carry_a_decimal_point() {
    assert_eq!(normalize_price_str("€10"), "€10");
    assert_eq!(normalize_price_str("€10.00"), "€10");
    assert_eq!(normalize_price_str("£ 7,0"), "£7");
}

#[test]
fn euro_is_preferred() {
    assert_eq!(normalize_price_str("mentioned USD 5 and EUR 5"), "€5");
    assert_eq!(normalize_price_str("$8.50 (7,90 €)"), "€7.90");
}

#[test]
fn first_candidate_wins_a_tie() {
    assert_eq!(normalize_price_str("5 CHF or 6 USD"), "CHF 5");
    assert_eq!(normalize_price_str("£3 / $4"), "£3");
}

#[test]
fn separator_resolution_for_bare_amounts() {
    assert_eq!(normalize_price_str("1.234,56"), "1234.56");
    assert_eq!(normalize_price_str("1,234.56"), "1234.56");
}

#[test]
fn single_separator_fragments_are_pinned() {
    // one, two and three-plus digits after the separator
    assert_eq!(normalize_amount("12,5").as_deref(), Some("12.50"));
    assert_eq!(normalize_amount("12.5").as_deref(), Some("12.50"));
    assert_eq!(normalize_amount("12,50").as_deref(), Some("12.50"));
    assert_eq!(normalize_amount("12.50").as_deref(), Some("12.50"));
    assert_eq!(normalize_amount("1,234").as_deref(), Some("1.23"));
    assert_eq!(normalize_amount("1.234").as_deref(), Some("1.23"));
    assert_eq!(normalize_amount("1.2345").as_deref(), Some("1.23"));
    assert_eq!(normalize_price_str("€1.234"), "€1.23");
}

#[test]
fn amounts_written_without_a_leading_zero() {
    assert_eq!(normalize_price_str("$.99"), "$0.99");
    assert_eq!(normalize_price_str("€,50"), "€0.50");
    assert_eq!(normalize_price_str(".75 USD"), "$0.75");
    assert_eq!(normalize_price_str("about .5 each"), "0.50");
}

#[test]
fn canonical_outputs_are_fixed_points() {
    for raw in ["€12.50", "$9.99", "$0.99", "CHF 5", "1234.56", "0.50", "N/A", "—", "€ --", "ask server"] {
        assert_eq!(normalize_price_str(raw), raw);
    }
}

#[test]
fn unparsable_input_is_returned_trimmed() {
    assert_eq!(normalize_price_str("ask server"), "ask server");
    assert_eq!(normalize_price_str("\tseasonal\n"), "seasonal");
}

#[test]
fn negative_amounts_lose_their_sign() {
    assert_eq!(normalize_price_str("-€5"), "€5");
    assert_eq!(normalize_price_str("-3"), "3");
}

#[test]
fn report_agrees_with_normalize() {
    for raw in ["€12,50", "USD 5 and EUR 5", "12", "ask", "", "n/a"] {
        let report = explain_price(Some(raw));
        assert_eq!(report.output, normalize_price_str(raw), "{raw}");
    }
    let report = explain_price(Some("€1,2,3 and 4 USD"));
    assert_eq!(report.candidates.len(), 1);
    assert_eq!(report.output, "$4");
    assert_eq!(report.class, PriceClass::Tagged);
}

#[test]
fn report_serializes_to_json() {
    let report = explain_price(Some("CHF 12.5"));
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["output"], "CHF 12.50");
    assert_eq!(json["class"], "tagged");
    assert_eq!(json["selected"]["unit"], "CHF");
    assert_eq!(json["selected"]["notation"], "code-prefix");
    assert_eq!(json["selected"]["priority"], 4);
}

#[test]
fn concurrent_callers_do_not_interfere() {
    let inputs = ["€12,50", "USD 9.99", "5 CHF or 6 USD", "ask server", "1.234,56"];
    let expected: Vec<String> = inputs.iter().map(|raw| normalize_price_str(raw)).collect();

    thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                for _ in 0..200 {
                    for (raw, want) in inputs.iter().zip(&expected) {
                        assert_eq!(&normalize_price_str(raw), want);
                    }
                }
            });
        }
    });
}
