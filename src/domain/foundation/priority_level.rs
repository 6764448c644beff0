//! User-declared urgency for a QA report.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Urgency the reviewer assigns when creating a report.
///
/// Independent of the computed [`OverallRating`](super::OverallRating):
/// this expresses how urgently the review itself matters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl PriorityLevel {
    /// Returns the lowercase wire/storage representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            PriorityLevel::Low => "low",
            PriorityLevel::Medium => "medium",
            PriorityLevel::High => "high",
        }
    }
}

impl fmt::Display for PriorityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PriorityLevel {
    type Err = UnknownPriority;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(PriorityLevel::Low),
            "medium" => Ok(PriorityLevel::Medium),
            "high" => Ok(PriorityLevel::High),
            other => Err(UnknownPriority(other.to_string())),
        }
    }
}

/// Error for unrecognized priority strings from storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPriority(pub String);

impl fmt::Display for UnknownPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown priority level: {}", self.0)
    }
}

impl std::error::Error for UnknownPriority {}
