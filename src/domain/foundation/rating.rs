//! Overall rating value object.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Qualitative overall rating for a QA report.
///
/// Computed from unchecked-item and critical-issue counts by the rating
/// engine in `domain::report::scoring`; never set directly by users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverallRating {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl OverallRating {
    /// Returns the lowercase wire/storage representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            OverallRating::Excellent => "excellent",
            OverallRating::Good => "good",
            OverallRating::Fair => "fair",
            OverallRating::Poor => "poor",
        }
    }
}

impl fmt::Display for OverallRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OverallRating {
    type Err = UnknownRating;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "excellent" => Ok(OverallRating::Excellent),
            "good" => Ok(OverallRating::Good),
            "fair" => Ok(OverallRating::Fair),
            "poor" => Ok(OverallRating::Poor),
            other => Err(UnknownRating(other.to_string())),
        }
    }
}

/// Error for unrecognized rating strings from storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRating(pub String);

impl fmt::Display for UnknownRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown rating: {}", self.0)
    }
}

impl std::error::Error for UnknownRating {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_str() {
        for rating in [
            OverallRating::Excellent,
            OverallRating::Good,
            OverallRating::Fair,
            OverallRating::Poor,
        ] {
            assert_eq!(rating.as_str().parse::<OverallRating>().unwrap(), rating);
        }
    }

    #[test]
    fn rejects_unknown_value() {
        assert!("great".parse::<OverallRating>().is_err());
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&OverallRating::Excellent).unwrap();
        assert_eq!(json, "\"excellent\"");
    }
}
