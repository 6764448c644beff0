//! Priority summary value object.

use serde::{Deserialize, Serialize};

/// User-curated issue lists, bucketed by severity.
///
/// Purely manual: nothing here is derived from checklist state. The
/// critical bucket feeds the rating engine; all four feed the
/// next-steps generator and the export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrioritySummary {
    pub critical: Vec<String>,
    pub high: Vec<String>,
    pub medium: Vec<String>,
    pub low: Vec<String>,
}

impl PrioritySummary {
    /// Returns true when every bucket is empty.
    pub fn is_empty(&self) -> bool {
        self.critical.is_empty()
            && self.high.is_empty()
            && self.medium.is_empty()
            && self.low.is_empty()
    }

    /// Number of critical issues; the input the rating engine cares about.
    pub fn critical_count(&self) -> usize {
        self.critical.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        let summary = PrioritySummary::default();
        assert!(summary.is_empty());
        assert_eq!(summary.critical_count(), 0);
    }

    #[test]
    fn any_bucket_makes_it_non_empty() {
        let summary = PrioritySummary {
            low: vec!["favicon missing".to_string()],
            ..Default::default()
        };
        assert!(!summary.is_empty());
    }

    #[test]
    fn deserializes_from_stored_shape() {
        let json = r#"{"critical":["site down"],"high":[],"medium":["alt text"],"low":[]}"#;
        let summary: PrioritySummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.critical_count(), 1);
        assert_eq!(summary.medium.len(), 1);
    }
}
