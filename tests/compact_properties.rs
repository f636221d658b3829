use proptest::prelude::*;
use purse::config::EngineConfig;
use purse::format::{FormattingEngine, RenderMode};

fn engine(use_us_format: bool) -> FormattingEngine {
    FormattingEngine::new(EngineConfig {
        use_us_format,
        ..EngineConfig::default()
    })
}

/// Parse compact output back into the value it stands for, using the default labels.
fn lower_bound(text: &str) -> u128 {
    let (number, scale) = match text.chars().last() {
        Some('K') => (&text[..text.len() - 1], 1_000u128),
        Some('M') => (&text[..text.len() - 1], 1_000_000),
        Some('B') => (&text[..text.len() - 1], 1_000_000_000),
        Some('T') => (&text[..text.len() - 1], 1_000_000_000_000),
        Some('Q') => (&text[..text.len() - 1], 1_000_000_000_000_000),
        _ => (text, 1),
    };
    match number.split_once('.') {
        Some((whole, tenth)) => {
            whole.parse::<u128>().unwrap() * scale + tenth.parse::<u128>().unwrap() * scale / 10
        }
        None => number.parse::<u128>().unwrap() * scale,
    }
}

proptest! {
    #[test]
    fn below_thousand_has_no_suffix(balance in 0i64..1000) {
        prop_assert_eq!(engine(true).format_compact(balance), balance.to_string());
    }

    #[test]
    fn negative_mirrors_positive(balance in i64::MIN..0) {
        let engine = engine(true);
        let positive = engine.format_compact(balance.checked_neg().unwrap_or(i64::MAX));
        prop_assert_eq!(engine.format_compact(balance), format!("-{}", positive));
    }

    #[test]
    fn never_exceeds_balance(balance in 0i64..i64::MAX) {
        let shown = lower_bound(&engine(true).format_compact(balance));
        prop_assert!(shown <= balance as u128);
    }

    #[test]
    fn separator_is_the_only_difference(balance in 1000i64..i64::MAX) {
        let us = engine(true).format_compact(balance);
        let eu = engine(false).format_compact(balance);
        prop_assert_eq!(us.replace('.', ","), eu);
    }

    #[test]
    fn negative_precision_matches_zero(value in -1e12f64..1e12, places in i32::MIN..0) {
        let engine = engine(true);
        prop_assert_eq!(
            engine.render(value, RenderMode::DecimalPlaces(places)),
            engine.render(value, RenderMode::DecimalPlaces(0))
        );
    }

    #[test]
    fn wide_precision_matches_shortest_digits(
        value in prop::num::f64::NORMAL | prop::num::f64::SUBNORMAL | prop::num::f64::ZERO
    ) {
        prop_assert_eq!(
            engine(true).render(value, RenderMode::DecimalPlaces(340)),
            value.to_string()
        );
    }

    #[test]
    fn decimal_places_repeatable(value in -1e9f64..1e9, places in 0i32..8) {
        let engine = engine(true);
        let first = engine.render(value, RenderMode::DecimalPlaces(places));
        let second = engine.render(value, RenderMode::DecimalPlaces(places));
        prop_assert_eq!(first, second);
        prop_assert_eq!(engine.cached_precisions(), 1);
    }
}
