//! Leg-to-journey combination and round-trip assembly.
//!
//! Joins independently fetched one-way legs through a common hub into
//! connecting journeys, enforcing the minimum connection time, then
//! pairs outbound and inbound journeys into priced round trips. All
//! functions here are pure over their inputs so each rule can be
//! tested in isolation.

use chrono::{DateTime, Duration, FixedOffset};
use tracing::warn;

use crate::domain::{IataCode, Journey, Offer, RoundTrip};

use super::fetch::DirectionLegs;

/// The connection-time feasibility rule.
///
/// The second leg must depart strictly later than the first leg's
/// arrival plus the minimum connection buffer. A connection at exactly
/// the buffer is infeasible; one second past it is feasible.
pub fn feasible_connection(
    arrival: DateTime<FixedOffset>,
    departure: DateTime<FixedOffset>,
    min_connection: Duration,
) -> bool {
    departure > arrival + min_connection
}

/// Combine first and second legs through each shared hub into one-stop
/// journeys for one direction of travel.
///
/// For every hub present in both leg maps, the full cross product of
/// (first offer x second offer) is considered; pairs failing the
/// feasibility rule are discarded, everything else becomes a journey
/// priced at the exact sum of the two offers. Identical journeys are
/// not deduplicated. A hub missing from either map yields nothing.
pub fn combine_one_stop(
    origin: IataCode,
    destination: IataCode,
    legs: &DirectionLegs,
    min_connection: Duration,
) -> Vec<Journey> {
    let mut journeys = Vec::new();

    for (&hub, first_offers) in &legs.first {
        let Some(second_offers) = legs.last.get(&hub) else {
            continue;
        };

        for first in first_offers {
            for second in second_offers {
                if !feasible_connection(
                    first.arrival_instant(),
                    second.departure_instant(),
                    min_connection,
                ) {
                    continue;
                }

                match first.price().try_add(second.price()) {
                    Ok(price) => {
                        journeys.push(Journey::one_stop(origin, hub, destination, price));
                    }
                    Err(e) => {
                        warn!(%hub, error = %e, "dropping offer pair with mismatched currencies");
                    }
                }
            }
        }
    }

    journeys
}

/// Combine legs through each ordered pair of distinct hubs into
/// two-stop journeys for one direction of travel.
///
/// The feasibility rule applies at both connections. The first
/// connection is checked before iterating final legs so an infeasible
/// pair is rejected once, not once per final-leg offer.
pub fn combine_two_stop(
    origin: IataCode,
    destination: IataCode,
    legs: &DirectionLegs,
    min_connection: Duration,
) -> Vec<Journey> {
    let mut journeys = Vec::new();

    for (&(first_hub, second_hub), middle_offers) in &legs.middle {
        let Some(first_offers) = legs.first.get(&first_hub) else {
            continue;
        };
        let Some(last_offers) = legs.last.get(&second_hub) else {
            continue;
        };

        for first in first_offers {
            for middle in middle_offers {
                if !feasible_connection(
                    first.arrival_instant(),
                    middle.departure_instant(),
                    min_connection,
                ) {
                    continue;
                }

                for last in last_offers {
                    if !feasible_connection(
                        middle.arrival_instant(),
                        last.departure_instant(),
                        min_connection,
                    ) {
                        continue;
                    }

                    let price = first
                        .price()
                        .try_add(middle.price())
                        .and_then(|p| p.try_add(last.price()));
                    match price {
                        Ok(price) => journeys.push(Journey::two_stop(
                            origin, first_hub, second_hub, destination, price,
                        )),
                        Err(e) => {
                            warn!(%first_hub, %second_hub, error = %e, "dropping offer triple with mismatched currencies");
                        }
                    }
                }
            }
        }
    }

    journeys
}

/// Pair every outbound journey with every inbound journey.
///
/// The cross product is hub-independent: an outbound journey through
/// one hub may pair with an inbound journey through another. Each pair
/// is priced at the exact sum of the two journeys.
pub fn assemble_round_trips(outbound: &[Journey], inbound: &[Journey]) -> Vec<RoundTrip> {
    let mut trips = Vec::with_capacity(outbound.len() * inbound.len());

    for out in outbound {
        for in_ in inbound {
            match RoundTrip::new(out.clone(), in_.clone()) {
                Ok(trip) => trips.push(trip),
                Err(e) => {
                    warn!(error = %e, "dropping journey pair with mismatched currencies");
                }
            }
        }
    }

    trips
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{CurrencyCode, FlightSegment, Itinerary, Money};
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use std::collections::BTreeMap;

    fn iata(s: &str) -> IataCode {
        IataCode::parse(s).unwrap()
    }

    fn usd(cents: i64) -> Money {
        Money::new(
            Decimal::new(cents, 2),
            CurrencyCode::parse("USD").unwrap(),
        )
    }

    fn offer_at(
        from: &str,
        dep_mins: i64,
        to: &str,
        arr_mins: i64,
        price_cents: i64,
    ) -> Offer {
        let base = DateTime::parse_from_rfc3339("2025-10-31T00:00:00Z").unwrap();
        let segment = FlightSegment {
            origin: iata(from),
            departs_at: base + Duration::minutes(dep_mins),
            destination: iata(to),
            arrives_at: base + Duration::minutes(arr_mins),
        };
        Offer::new(
            vec![Itinerary::new(vec![segment]).unwrap()],
            usd(price_cents),
        )
        .unwrap()
    }

    proptest! {
        /// When every pair is feasible, the combiner yields exactly
        /// m x n journeys, each priced at the exact sum of its pair.
        #[test]
        fn feasible_cross_product_yields_m_times_n(
            first_prices in prop::collection::vec(1i64..1_000_000, 1..6),
            second_prices in prop::collection::vec(1i64..1_000_000, 1..6),
        ) {
            // All first legs arrive by minute 300; all second legs
            // depart at minute 600, comfortably past any buffer.
            let first: Vec<_> = first_prices
                .iter()
                .map(|&p| offer_at("AAA", 0, "HHH", 300, p))
                .collect();
            let second: Vec<_> = second_prices
                .iter()
                .map(|&p| offer_at("HHH", 600, "BBB", 900, p))
                .collect();

            let mut first_map = BTreeMap::new();
            first_map.insert(iata("HHH"), first);
            let mut last_map = BTreeMap::new();
            last_map.insert(iata("HHH"), second);
            let legs = DirectionLegs {
                first: first_map,
                middle: BTreeMap::new(),
                last: last_map,
            };

            let journeys =
                combine_one_stop(iata("AAA"), iata("BBB"), &legs, Duration::minutes(90));

            prop_assert_eq!(journeys.len(), first_prices.len() * second_prices.len());

            // Price additivity: journeys appear in (first, second) order
            let mut idx = 0;
            for &f in &first_prices {
                for &s in &second_prices {
                    prop_assert_eq!(
                        journeys[idx].price().amount(),
                        Decimal::new(f, 2) + Decimal::new(s, 2)
                    );
                    idx += 1;
                }
            }
        }

        /// The feasibility boundary is strict: a connection of exactly
        /// the buffer is rejected, anything later is accepted.
        #[test]
        fn feasibility_boundary_is_strict(
            buffer_mins in 1i64..360,
            slack_secs in -300i64..300,
        ) {
            let base = DateTime::parse_from_rfc3339("2025-10-31T00:00:00Z").unwrap();
            let arrival = base;
            let departure = base
                + Duration::minutes(buffer_mins)
                + Duration::seconds(slack_secs);

            let feasible =
                feasible_connection(arrival, departure, Duration::minutes(buffer_mins));
            prop_assert_eq!(feasible, slack_secs > 0);
        }

        /// Round trips are the full cross product, with exact totals.
        #[test]
        fn assembly_totals_are_exact_sums(
            out_prices in prop::collection::vec(1i64..1_000_000, 0..5),
            in_prices in prop::collection::vec(1i64..1_000_000, 0..5),
        ) {
            let outbound: Vec<_> = out_prices
                .iter()
                .map(|&p| Journey::one_stop(iata("AAA"), iata("HHH"), iata("BBB"), usd(p)))
                .collect();
            let inbound: Vec<_> = in_prices
                .iter()
                .map(|&p| Journey::one_stop(iata("BBB"), iata("KKK"), iata("AAA"), usd(p)))
                .collect();

            let trips = assemble_round_trips(&outbound, &inbound);

            prop_assert_eq!(trips.len(), outbound.len() * inbound.len());
            for trip in &trips {
                let expected = trip
                    .outbound()
                    .price()
                    .try_add(trip.inbound().price())
                    .unwrap();
                prop_assert_eq!(trip.total(), &expected);
            }
        }
    }
}
