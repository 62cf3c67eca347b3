//! Human-readable order references.
//!
//! An order reference doubles as the customer's payment reference, so it has
//! to be short enough to type into a bank-transfer narration and unique
//! enough that two orders placed the same day never share one. This is a
//! plain date + random suffix scheme, not a cryptographic identifier.

use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Fixed prefix for every reference.
const PREFIX: &str = "ORD";

/// Length of the random suffix.
const SUFFIX_LEN: usize = 7;

const SUFFIX_CHARSET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A generated order reference, e.g. `ORD-20260830-K3F9Q1Z`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderRef(String);

impl OrderRef {
    /// Generate a reference from the current UTC date and the thread RNG.
    ///
    /// Never fails. With a degenerate random source the suffix is dropped
    /// and the date-only form `ORD-YYYYMMDD` is returned.
    #[must_use]
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::rng())
    }

    /// Generate a reference using the supplied random source.
    #[must_use]
    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let date = Utc::now().format("%Y%m%d").to_string();
        Self::from_parts(&date, &random_suffix(rng))
    }

    /// Assemble a reference from a date part and suffix.
    ///
    /// An empty suffix yields the date-only fallback form.
    #[must_use]
    pub fn from_parts(date: &str, suffix: &str) -> Self {
        if suffix.is_empty() {
            Self(format!("{PREFIX}-{date}"))
        } else {
            Self(format!("{PREFIX}-{date}-{suffix}"))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the reference and return its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for OrderRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Sample an uppercase base-36 suffix of [`SUFFIX_LEN`] characters.
fn random_suffix<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..SUFFIX_LEN)
        .filter_map(|_| {
            let idx = rng.random_range(0..SUFFIX_CHARSET.len());
            SUFFIX_CHARSET.get(idx).map(|&b| char::from(b))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_format() {
        let reference = OrderRef::generate();
        let parts: Vec<&str> = reference.as_str().split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "ORD");
        assert_eq!(parts[1].len(), 8);
        assert!(parts[1].chars().all(|c| c.is_ascii_digit()));
        assert_eq!(parts[2].len(), 7);
        assert!(
            parts[2]
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        );
    }

    #[test]
    fn test_no_duplicates_in_rapid_succession() {
        // Statistical, not guaranteed: 36^7 possible suffixes make 1000
        // collisions vanishingly unlikely.
        let refs: HashSet<String> = (0..1000)
            .map(|_| OrderRef::generate().into_inner())
            .collect();
        assert_eq!(refs.len(), 1000);
    }

    #[test]
    fn test_empty_suffix_falls_back_to_date_only() {
        let reference = OrderRef::from_parts("20260830", "");
        assert_eq!(reference.as_str(), "ORD-20260830");
    }
}
