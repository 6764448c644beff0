//! Rating engine.
//!
//! Pure, deterministic scoring of a report from two inputs: how many
//! checklist items remain unchecked and how many critical issues the
//! reviewer recorded. First matching rule wins.

use crate::domain::checklist::Checklist;
use crate::domain::foundation::OverallRating;

use super::priority_summary::PrioritySummary;

/// Computes the overall rating from checklist state and the priority summary.
///
/// Rules, in order:
/// 1. no unchecked items and no critical issues -> excellent
/// 2. at most 3 unchecked and no critical issues -> good
/// 3. at most 10 unchecked and at most 2 critical -> fair
/// 4. otherwise -> poor
///
/// Total over any well-formed input; an empty checklist with an empty
/// summary rates excellent.
pub fn calculate_overall_rating(
    checklist: &Checklist,
    priority_summary: &PrioritySummary,
) -> OverallRating {
    let unchecked = checklist.unchecked_count();
    let critical = priority_summary.critical_count();

    if unchecked == 0 && critical == 0 {
        return OverallRating::Excellent;
    }
    if unchecked <= 3 && critical == 0 {
        return OverallRating::Good;
    }
    if unchecked <= 10 && critical <= 2 {
        return OverallRating::Fair;
    }
    OverallRating::Poor
}

/// Human-readable rationale for a rating, shown next to the rating badge.
pub fn rating_explanation(
    rating: OverallRating,
    unchecked_count: usize,
    critical_count: usize,
) -> String {
    match rating {
        OverallRating::Excellent => {
            "All checklist items passed with no critical issues. Site is ready for launch."
                .to_string()
        }
        OverallRating::Good => format!(
            "{} minor issue(s) found. Site is in good shape with minor improvements needed.",
            unchecked_count
        ),
        OverallRating::Fair => format!(
            "{} issue(s) found{}. Several improvements recommended before launch.",
            unchecked_count,
            critical_suffix(critical_count)
        ),
        OverallRating::Poor => format!(
            "{} issue(s) found{}. Significant work needed before launch.",
            unchecked_count,
            critical_suffix(critical_count)
        ),
    }
}

fn critical_suffix(critical_count: usize) -> String {
    if critical_count > 0 {
        format!(" including {} critical issue(s)", critical_count)
    } else {
        String::new()
    }
}
