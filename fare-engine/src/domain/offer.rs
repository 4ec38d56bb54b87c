//! Priced flight offers as received from the provider.
//!
//! An `Offer` is one bookable search result: a sequence of itineraries
//! (one per direction of travel) and a total price. The engine only
//! ever consumes the first itinerary of a one-way offer.

use chrono::{DateTime, FixedOffset};

use super::{DomainError, IataCode, Money};

/// One flown leg of an itinerary.
///
/// Timestamps are timezone-aware instants as reported by the provider.
/// Immutable once received.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlightSegment {
    /// Departure airport
    pub origin: IataCode,
    /// Departure instant
    pub departs_at: DateTime<FixedOffset>,
    /// Arrival airport
    pub destination: IataCode,
    /// Arrival instant
    pub arrives_at: DateTime<FixedOffset>,
}

/// One direction of travel for an offer: a non-empty, ordered sequence
/// of segments.
///
/// The provider guarantees that consecutive segments connect (arrival
/// airport equals the next departure airport); that invariant is
/// trusted, not re-validated here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Itinerary {
    segments: Vec<FlightSegment>,
}

impl Itinerary {
    /// Constructs an itinerary from its segments.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the segment list is empty.
    pub fn new(segments: Vec<FlightSegment>) -> Result<Self, DomainError> {
        if segments.is_empty() {
            return Err(DomainError::EmptyItinerary);
        }
        Ok(Itinerary { segments })
    }

    /// Returns all segments in order.
    pub fn segments(&self) -> &[FlightSegment] {
        &self.segments
    }

    /// Returns the departure instant of the first segment.
    pub fn first_departure(&self) -> DateTime<FixedOffset> {
        // Safe: validated non-empty at construction
        self.segments.first().unwrap().departs_at
    }

    /// Returns the arrival instant of the last segment.
    pub fn final_arrival(&self) -> DateTime<FixedOffset> {
        // Safe: validated non-empty at construction
        self.segments.last().unwrap().arrives_at
    }

    /// Returns true if the itinerary is a single nonstop segment.
    pub fn is_direct(&self) -> bool {
        self.segments.len() == 1
    }

    /// Intermediate airports: the arrival airport of every non-final
    /// segment. Empty for a direct itinerary.
    pub fn connection_points(&self) -> impl Iterator<Item = IataCode> + '_ {
        let last = self.segments.len() - 1;
        self.segments[..last].iter().map(|s| s.destination)
    }
}

/// One priced, bookable result from the provider.
///
/// Offers carry no identity and are never deduplicated: two offers with
/// identical contents are two distinct combinable legs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Offer {
    itineraries: Vec<Itinerary>,
    price: Money,
}

impl Offer {
    /// Constructs an offer from its itineraries and total price.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the itinerary list is empty.
    pub fn new(itineraries: Vec<Itinerary>, price: Money) -> Result<Self, DomainError> {
        if itineraries.is_empty() {
            return Err(DomainError::EmptyOffer);
        }
        Ok(Offer { itineraries, price })
    }

    /// Returns all itineraries in order.
    pub fn itineraries(&self) -> &[Itinerary] {
        &self.itineraries
    }

    /// The itinerary the engine combines on: the first one.
    pub fn primary_itinerary(&self) -> &Itinerary {
        // Safe: validated non-empty at construction
        self.itineraries.first().unwrap()
    }

    /// Returns the total price.
    pub fn price(&self) -> &Money {
        &self.price
    }

    /// Departure instant of the primary itinerary.
    pub fn departure_instant(&self) -> DateTime<FixedOffset> {
        self.primary_itinerary().first_departure()
    }

    /// Arrival instant of the primary itinerary.
    pub fn arrival_instant(&self) -> DateTime<FixedOffset> {
        self.primary_itinerary().final_arrival()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CurrencyCode;

    fn iata(s: &str) -> IataCode {
        IataCode::parse(s).unwrap()
    }

    fn instant(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    fn usd(s: &str) -> Money {
        Money::new(s.parse().unwrap(), CurrencyCode::parse("USD").unwrap())
    }

    fn segment(from: &str, dep: &str, to: &str, arr: &str) -> FlightSegment {
        FlightSegment {
            origin: iata(from),
            departs_at: instant(dep),
            destination: iata(to),
            arrives_at: instant(arr),
        }
    }

    #[test]
    fn itinerary_must_be_non_empty() {
        assert!(matches!(
            Itinerary::new(vec![]),
            Err(DomainError::EmptyItinerary)
        ));
    }

    #[test]
    fn itinerary_endpoints() {
        let itin = Itinerary::new(vec![
            segment(
                "PHX",
                "2025-10-31T06:00:00Z",
                "DFW",
                "2025-10-31T09:00:00Z",
            ),
            segment(
                "DFW",
                "2025-10-31T11:00:00Z",
                "ISB",
                "2025-11-01T05:00:00Z",
            ),
        ])
        .unwrap();

        assert_eq!(itin.first_departure(), instant("2025-10-31T06:00:00Z"));
        assert_eq!(itin.final_arrival(), instant("2025-11-01T05:00:00Z"));
        assert!(!itin.is_direct());
    }

    #[test]
    fn connection_points_skip_final_segment() {
        let itin = Itinerary::new(vec![
            segment(
                "PHX",
                "2025-10-31T06:00:00Z",
                "DFW",
                "2025-10-31T09:00:00Z",
            ),
            segment(
                "DFW",
                "2025-10-31T11:00:00Z",
                "JFK",
                "2025-10-31T15:00:00Z",
            ),
            segment(
                "JFK",
                "2025-10-31T18:00:00Z",
                "ISB",
                "2025-11-01T10:00:00Z",
            ),
        ])
        .unwrap();

        let points: Vec<_> = itin.connection_points().collect();
        assert_eq!(points, vec![iata("DFW"), iata("JFK")]);
    }

    #[test]
    fn direct_itinerary_has_no_connection_points() {
        let itin = Itinerary::new(vec![segment(
            "PHX",
            "2025-10-31T06:00:00Z",
            "JFK",
            "2025-10-31T11:00:00Z",
        )])
        .unwrap();

        assert!(itin.is_direct());
        assert_eq!(itin.connection_points().count(), 0);
    }

    #[test]
    fn offer_must_have_an_itinerary() {
        assert!(matches!(
            Offer::new(vec![], usd("100")),
            Err(DomainError::EmptyOffer)
        ));
    }

    #[test]
    fn offer_instants_come_from_primary_itinerary() {
        let out = Itinerary::new(vec![segment(
            "PHX",
            "2025-10-31T06:00:00Z",
            "JFK",
            "2025-10-31T11:00:00Z",
        )])
        .unwrap();
        let back = Itinerary::new(vec![segment(
            "JFK",
            "2025-11-30T08:00:00Z",
            "PHX",
            "2025-11-30T13:00:00Z",
        )])
        .unwrap();

        let offer = Offer::new(vec![out, back], usd("450.10")).unwrap();

        assert_eq!(offer.departure_instant(), instant("2025-10-31T06:00:00Z"));
        assert_eq!(offer.arrival_instant(), instant("2025-10-31T11:00:00Z"));
        assert_eq!(offer.price(), &usd("450.10"));
    }
}
