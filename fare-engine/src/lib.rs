//! Hidden round-trip fare discovery engine.
//!
//! Searches one-way flight legs through connecting hub airports and
//! recombines them into priced round trips that are never offered as a
//! single bookable product.

pub mod amadeus;
pub mod domain;
pub mod engine;
pub mod report;
