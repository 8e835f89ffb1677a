//! Property-based tests for pricekit-core
//!
//! These tests use proptest to verify pricing and formatting invariants
//! across a wide range of inputs.

#[cfg(test)]
mod price_properties {
    use pricekit_core::{price_for, Amount, BillingInterval, PricePeriod};
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    /// round(base * pct / 100), halves up, for non-negative integers.
    fn rounded_percent(base: i64, pct: i64) -> i64 {
        (base * pct + 50) / 100
    }

    proptest! {
        /// Annual billing passes the base price through untouched
        #[test]
        fn annual_is_passthrough(base in 0i64..1_000_000i64) {
            let price = price_for(BillingInterval::Annually, Amount::from_units(base));
            prop_assert_eq!(price.amount, Amount::from_units(base));
        }

        /// Monthly billing adds exactly 20
        #[test]
        fn monthly_adds_twenty(base in 0i64..1_000_000i64) {
            let price = price_for(BillingInterval::Monthly, Amount::from_units(base));
            prop_assert_eq!(price.amount, Amount::from_units(base + 20));
        }

        /// Prepay discounts round half up to whole units
        #[test]
        fn prepay_discounts_round_half_up(base in 0i64..1_000_000i64) {
            let two = price_for(BillingInterval::TwoYears, Amount::from_units(base));
            let three = price_for(BillingInterval::ThreeYears, Amount::from_units(base));

            prop_assert_eq!(two.amount, Amount::from_units(rounded_percent(base, 92)));
            prop_assert_eq!(three.amount, Amount::from_units(rounded_percent(base, 89)));
        }

        /// Fractional bases still produce whole discounted amounts
        #[test]
        fn fractional_bases_round(cents in 0i64..10_000_000i64) {
            let base = Amount::new(Decimal::new(cents, 2));
            let two = price_for(BillingInterval::TwoYears, base);
            prop_assert_eq!(two.amount, Amount::from_units((cents * 92 + 5_000) / 10_000));
            prop_assert_eq!(two.amount.as_decimal().fract(), Decimal::ZERO);
        }

        /// Quotes are pure: same input, same output
        #[test]
        fn quotes_are_idempotent(base in 0i64..1_000_000i64, idx in 0usize..4) {
            let interval = BillingInterval::ALL[idx];
            let first = price_for(interval, Amount::from_units(base));
            let second = price_for(interval, Amount::from_units(base));
            prop_assert_eq!(first, second);
        }

        /// Every quote is a monthly USD price with a note
        #[test]
        fn quote_shape(base in 0i64..1_000_000i64, idx in 0usize..4) {
            let price = price_for(BillingInterval::ALL[idx], Amount::from_units(base));
            prop_assert_eq!(price.currency.as_str(), "USD");
            prop_assert_eq!(price.per, PricePeriod::Month);
            prop_assert!(price.note.is_some());
        }

        /// Longer commitments never cost more per month
        #[test]
        fn discounts_are_monotonic(base in 0i64..1_000_000i64) {
            let quote = |interval| price_for(interval, Amount::from_units(base)).amount;
            prop_assert!(quote(BillingInterval::Monthly) >= quote(BillingInterval::Annually));
            prop_assert!(quote(BillingInterval::Annually) >= quote(BillingInterval::TwoYears));
            prop_assert!(quote(BillingInterval::TwoYears) >= quote(BillingInterval::ThreeYears));
        }
    }
}

#[cfg(test)]
mod format_properties {
    use pricekit_core::{build_formatter, Amount};
    use proptest::prelude::*;

    proptest! {
        /// Stripping symbol and separators gives back the integer
        #[test]
        fn whole_units_round_trip(n in 0i64..1_000_000_000_000i64) {
            let usd = build_formatter("USD", 0).unwrap();
            let text = usd.format(Amount::from_units(n));
            prop_assert!(text.starts_with('$'));
            let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
            prop_assert_eq!(digits, n.to_string());
        }

        /// Groups after the first are exactly three digits
        #[test]
        fn grouping_is_by_thousands(n in 0i64..1_000_000_000_000i64) {
            let usd = build_formatter("USD", 0).unwrap();
            let text = usd.format(Amount::from_units(n));
            let groups: Vec<&str> = text.trim_start_matches('$').split(',').collect();
            prop_assert!(!groups[0].is_empty() && groups[0].len() <= 3);
            for group in &groups[1..] {
                prop_assert_eq!(group.len(), 3);
            }
        }

        /// Negation only adds a leading minus sign
        #[test]
        fn negatives_mirror_positives(n in 1i64..1_000_000_000i64, digits in 0u32..4) {
            let usd = build_formatter("USD", digits).unwrap();
            let positive = usd.format(Amount::from_units(n));
            let negative = usd.format(Amount::from_units(-n));
            prop_assert_eq!(negative, format!("-{}", positive));
        }

        /// Fractions are padded to the minor units and trimmed above them
        #[test]
        fn fraction_width_stays_within_bounds(
            ten_thousandths in 0i64..1_000_000_000i64,
            digits in 1u32..6,
        ) {
            let usd = build_formatter("USD", digits).unwrap();
            let text = usd.format(Amount::new(rust_decimal::Decimal::new(ten_thousandths, 4)));
            let (_, fraction) = text.split_once('.').unwrap();
            let min = digits.min(2) as usize;
            prop_assert!(fraction.len() >= min && fraction.len() <= digits as usize);
            if fraction.len() > min {
                prop_assert!(!fraction.ends_with('0'));
            }
        }
    }
}
