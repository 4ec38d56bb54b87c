//! Airport code types.

use std::collections::BTreeSet;
use std::fmt;

/// Error returned when parsing an invalid IATA airport code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid IATA code: {reason}")]
pub struct InvalidIata {
    reason: &'static str,
}

/// A valid 3-letter IATA airport code.
///
/// IATA location codes are always 3 ASCII letters. Lowercase input is
/// accepted and normalised to uppercase, so any `IataCode` value holds
/// the canonical uppercase form by construction.
///
/// # Examples
///
/// ```
/// use fare_engine::domain::IataCode;
///
/// let jfk = IataCode::parse("JFK").unwrap();
/// assert_eq!(jfk.as_str(), "JFK");
///
/// // Lowercase is normalised
/// assert_eq!(IataCode::parse("jfk").unwrap(), jfk);
///
/// // Wrong length is rejected
/// assert!(IataCode::parse("JF").is_err());
/// assert!(IataCode::parse("JFKX").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IataCode([u8; 3]);

impl IataCode {
    /// Parse an IATA code from a string.
    ///
    /// The input must be exactly 3 ASCII letters; case is normalised.
    pub fn parse(s: &str) -> Result<Self, InvalidIata> {
        let bytes = s.as_bytes();

        if bytes.len() != 3 {
            return Err(InvalidIata {
                reason: "must be exactly 3 characters",
            });
        }

        let mut code = [0u8; 3];
        for (i, &b) in bytes.iter().enumerate() {
            if !b.is_ascii_alphabetic() {
                return Err(InvalidIata {
                    reason: "must be ASCII letters A-Z",
                });
            }
            code[i] = b.to_ascii_uppercase();
        }

        Ok(IataCode(code))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: we only store ASCII uppercase letters
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Debug for IataCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IataCode({})", self.as_str())
    }
}

impl fmt::Display for IataCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A set of candidate connecting airports.
///
/// Ordered so that iteration (and therefore downstream tie ordering in
/// ranked results) is deterministic. Duplicates collapse.
pub type HubSet = BTreeSet<IataCode>;


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any 3-letter string parses, regardless of case
        #[test]
        fn letters_always_parse(s in "[A-Za-z]{3}") {
            prop_assert!(IataCode::parse(&s).is_ok());
        }

        /// Parsing is case-insensitive and canonicalises to uppercase
        #[test]
        fn parse_normalises_case(s in "[A-Za-z]{3}") {
            let code = IataCode::parse(&s).unwrap();
            let upper = s.to_ascii_uppercase();
            prop_assert_eq!(code.as_str(), upper.as_str());
        }

        /// Wrong-length strings are always rejected
        #[test]
        fn wrong_length_rejected(s in "[A-Z]{0,2}|[A-Z]{4,10}") {
            prop_assert!(IataCode::parse(&s).is_err());
        }

        /// Strings containing digits are rejected
        #[test]
        fn digits_rejected(s in "[A-Z0-9]{3}".prop_filter("has digit", |s| s.chars().any(|c| c.is_ascii_digit()))) {
            prop_assert!(IataCode::parse(&s).is_err());
        }
    }
}
