//! Report lifecycle status.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a QA report.
///
/// The only transition is `Draft -> Completed`; there is no way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Draft,
    Completed,
}

impl ReportStatus {
    /// Returns the lowercase wire/storage representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Draft => "draft",
            ReportStatus::Completed => "completed",
        }
    }

    /// Returns true while the report can still be edited through the wizard.
    pub fn is_draft(&self) -> bool {
        matches!(self, ReportStatus::Draft)
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReportStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(ReportStatus::Draft),
            "completed" => Ok(ReportStatus::Completed),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// Error for unrecognized status strings from storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown report status: {}", self.0)
    }
}

impl std::error::Error for UnknownStatus {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_str() {
        assert_eq!("draft".parse::<ReportStatus>().unwrap(), ReportStatus::Draft);
        assert_eq!(
            "completed".parse::<ReportStatus>().unwrap(),
            ReportStatus::Completed
        );
    }

    #[test]
    fn draft_is_editable() {
        assert!(ReportStatus::Draft.is_draft());
        assert!(!ReportStatus::Completed.is_draft());
    }
}
