//! Plain-text rendering of search results.

use std::fmt::Write;

use crate::engine::{SearchOutcome, TripQuery};

/// Render a search outcome as a plain-text report.
///
/// Trips come out numbered and cheapest first, one block per round
/// trip; empty outcomes render a one-line explanation instead.
pub fn render_outcome(outcome: &SearchOutcome, query: &TripQuery) -> String {
    match outcome {
        SearchOutcome::Trips(trips) => {
            let mut out = String::new();
            let _ = writeln!(
                out,
                "Round trips {} <-> {} ({} out, {} back):",
                query.origin, query.destination, query.departure_date, query.return_date,
            );
            for (i, trip) in trips.iter().enumerate() {
                let _ = writeln!(out, "\n{}. Total {}", i + 1, trip.total());
                let _ = writeln!(
                    out,
                    "   Out:  {}  ({})",
                    trip.outbound(),
                    trip.outbound().price()
                );
                let _ = writeln!(
                    out,
                    "   Back: {}  ({})",
                    trip.inbound(),
                    trip.inbound().price()
                );
            }
            out
        }
        SearchOutcome::NoHubs => format!(
            "No connecting hubs found between {} and {}; nothing to search.\n",
            query.origin, query.destination,
        ),
        SearchOutcome::NoJourneys { outbound, inbound } => format!(
            "No round trips possible: {outbound} feasible outbound journey(s), \
             {inbound} feasible inbound journey(s).\n",
        ),
        SearchOutcome::NoRoundTrips => {
            "Journeys were found in both directions but none combined into a round trip.\n"
                .to_string()
        }
    }
}
