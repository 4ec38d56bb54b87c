//! Round-trip ranking.
//!
//! Orders assembled round trips by total price and truncates to the
//! requested result count.

use crate::domain::RoundTrip;

/// Rank round trips cheapest-first and keep the top `max_results`.
///
/// The sort is stable with no secondary key: equal-priced trips keep
/// their assembly order. Contents are returned unchanged, only ordered
/// and truncated.
pub fn rank_round_trips(mut trips: Vec<RoundTrip>, max_results: usize) -> Vec<RoundTrip> {
    trips.sort_by(|a, b| a.total().amount().cmp(&b.total().amount()));
    trips.truncate(max_results);
    trips
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{CurrencyCode, IataCode, Journey, Money};
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    fn iata(s: &str) -> IataCode {
        IataCode::parse(s).unwrap()
    }

    /// Trip with a tag smuggled into the hub code so stability can be
    /// checked: equal-priced trips are distinguishable by hub.
    fn tagged_trip(tag: usize, total_cents: i64) -> RoundTrip {
        let letters = [b'A' + (tag % 26) as u8, b'A' + ((tag / 26) % 26) as u8];
        let hub = IataCode::parse(&format!(
            "{}{}H",
            letters[0] as char, letters[1] as char
        ))
        .unwrap();
        let currency = CurrencyCode::parse("USD").unwrap();
        let half = Money::new(Decimal::new(total_cents / 2, 2), currency);
        let rest = Money::new(Decimal::new(total_cents - total_cents / 2, 2), currency);
        RoundTrip::new(
            Journey::one_stop(iata("AAA"), hub, iata("BBB"), half),
            Journey::one_stop(iata("BBB"), hub, iata("AAA"), rest),
        )
        .unwrap()
    }

    fn trips_strategy() -> impl Strategy<Value = Vec<RoundTrip>> {
        prop::collection::vec(0i64..500, 0..30).prop_map(|cents| {
            cents
                .into_iter()
                .enumerate()
                .map(|(tag, c)| tagged_trip(tag, c * 2))
                .collect()
        })
    }

    proptest! {
        /// Adjacent totals are non-decreasing.
        #[test]
        fn output_is_sorted(trips in trips_strategy()) {
            let ranked = rank_round_trips(trips, usize::MAX);
            for window in ranked.windows(2) {
                prop_assert!(window[0].total().amount() <= window[1].total().amount());
            }
        }

        /// Length is min(input, max_results) and every output trip
        /// came from the input unchanged.
        #[test]
        fn truncation_is_a_prefix_of_the_full_ranking(
            trips in trips_strategy(),
            max in 0usize..40,
        ) {
            let full = rank_round_trips(trips.clone(), usize::MAX);
            let truncated = rank_round_trips(trips.clone(), max);

            prop_assert_eq!(truncated.len(), trips.len().min(max));
            prop_assert_eq!(&truncated[..], &full[..truncated.len()]);
        }

        /// Equal-priced trips preserve their relative input order
        /// (stable sort, no secondary key).
        #[test]
        fn equal_prices_stay_in_input_order(trips in trips_strategy()) {
            let ranked = rank_round_trips(trips.clone(), usize::MAX);

            for (i, a) in ranked.iter().enumerate() {
                for b in &ranked[i + 1..] {
                    if a.total() == b.total() {
                        let pos_a = trips.iter().position(|t| t == a).unwrap();
                        let pos_b = trips.iter().position(|t| t == b).unwrap();
                        prop_assert!(pos_a < pos_b);
                    }
                }
            }
        }
    }
}
