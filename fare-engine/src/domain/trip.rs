//! Derived trip types.
//!
//! A `Journey` is the engine's own construct, never received from the
//! provider: two (or three) one-way legs joined through connecting
//! hubs, price-combined. A `RoundTrip` pairs an outbound journey with
//! an inbound one.

use std::fmt;

use super::{IataCode, Money};

/// A one-directional trip through one or two connecting hubs.
///
/// Created only by the journey combiner, after the connection-time
/// feasibility rule has been applied; immutable thereafter. Outbound
/// and inbound journeys share this structure; the pipeline keeps the
/// two roles apart and never cross-combines them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Journey {
    origin: IataCode,
    hubs: Vec<IataCode>,
    destination: IataCode,
    price: Money,
}

impl Journey {
    /// A journey through a single hub.
    pub fn one_stop(origin: IataCode, hub: IataCode, destination: IataCode, price: Money) -> Self {
        Self {
            origin,
            hubs: vec![hub],
            destination,
            price,
        }
    }

    /// A journey through two hubs in order.
    pub fn two_stop(
        origin: IataCode,
        first_hub: IataCode,
        second_hub: IataCode,
        destination: IataCode,
        price: Money,
    ) -> Self {
        Self {
            origin,
            hubs: vec![first_hub, second_hub],
            destination,
            price,
        }
    }

    /// Returns the origin airport.
    pub fn origin(&self) -> IataCode {
        self.origin
    }

    /// Returns the connecting hubs in travel order (one or two).
    pub fn hubs(&self) -> &[IataCode] {
        &self.hubs
    }

    /// Returns the destination airport.
    pub fn destination(&self) -> IataCode {
        self.destination
    }

    /// Returns the combined price of the constituent legs.
    pub fn price(&self) -> &Money {
        &self.price
    }
}

impl fmt::Display for Journey {
    /// The human-readable route, e.g. `PHX -> JFK -> ISB`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.origin)?;
        for hub in &self.hubs {
            write!(f, " -> {hub}")?;
        }
        write!(f, " -> {}", self.destination)
    }
}

/// A complete round trip: one outbound journey plus one inbound one.
///
/// The two journeys need not share a hub. Terminal entity, consumed by
/// the ranker and then handed to the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundTrip {
    outbound: Journey,
    inbound: Journey,
    total: Money,
}

impl RoundTrip {
    /// Pairs an outbound journey with an inbound journey.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the two journey prices are in different
    /// currencies.
    pub fn new(outbound: Journey, inbound: Journey) -> Result<Self, super::DomainError> {
        let total = outbound.price().try_add(inbound.price())?;
        Ok(Self {
            outbound,
            inbound,
            total,
        })
    }

    /// Returns the outbound journey.
    pub fn outbound(&self) -> &Journey {
        &self.outbound
    }

    /// Returns the inbound journey.
    pub fn inbound(&self) -> &Journey {
        &self.inbound
    }

    /// Returns the exact total price (outbound + inbound).
    pub fn total(&self) -> &Money {
        &self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CurrencyCode, DomainError};

    fn iata(s: &str) -> IataCode {
        IataCode::parse(s).unwrap()
    }

    fn usd(s: &str) -> Money {
        Money::new(s.parse().unwrap(), CurrencyCode::parse("USD").unwrap())
    }

    #[test]
    fn one_stop_route() {
        let journey = Journey::one_stop(iata("PHX"), iata("JFK"), iata("ISB"), usd("500"));
        assert_eq!(journey.to_string(), "PHX -> JFK -> ISB");
        assert_eq!(journey.hubs(), &[iata("JFK")]);
    }

    #[test]
    fn two_stop_route() {
        let journey =
            Journey::two_stop(iata("PHX"), iata("DFW"), iata("LHR"), iata("ISB"), usd("700"));
        assert_eq!(journey.to_string(), "PHX -> DFW -> LHR -> ISB");
        assert_eq!(journey.hubs(), &[iata("DFW"), iata("LHR")]);
    }

    #[test]
    fn round_trip_total_is_exact_sum() {
        let outbound = Journey::one_stop(iata("PHX"), iata("JFK"), iata("ISB"), usd("523.45"));
        let inbound = Journey::one_stop(iata("ISB"), iata("ORD"), iata("PHX"), usd("611.55"));

        let trip = RoundTrip::new(outbound, inbound).unwrap();
        assert_eq!(trip.total(), &usd("1135.00"));
        assert_eq!(trip.outbound().to_string(), "PHX -> JFK -> ISB");
        assert_eq!(trip.inbound().to_string(), "ISB -> ORD -> PHX");
    }

    #[test]
    fn round_trip_rejects_mixed_currencies() {
        let eur = Money::new("300".parse().unwrap(), CurrencyCode::parse("EUR").unwrap());
        let outbound = Journey::one_stop(iata("PHX"), iata("JFK"), iata("ISB"), usd("500"));
        let inbound = Journey::one_stop(iata("ISB"), iata("ORD"), iata("PHX"), eur);

        assert!(matches!(
            RoundTrip::new(outbound, inbound),
            Err(DomainError::CurrencyMismatch(_, _))
        ));
    }
}
