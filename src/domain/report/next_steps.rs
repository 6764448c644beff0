//! Next-steps generator.
//!
//! Builds the ordered list of recommended actions shown on the summary
//! page and in exports. The output is a user-facing checklist, so step
//! order is part of the contract: reordering changes perceived priority.

use crate::domain::foundation::OverallRating;

use super::priority_summary::PrioritySummary;

/// Generates recommended next steps from the rating and priority summary.
///
/// Steps are appended in a fixed order: critical, high, rating-specific,
/// medium, low (suppressed for poor ratings, where backlog grooming is
/// premature), then two unconditional closing steps, and a launch-ready
/// note for excellent reports.
pub fn generate_next_steps(
    rating: OverallRating,
    priority_summary: &PrioritySummary,
) -> Vec<String> {
    let mut steps = Vec::new();

    if !priority_summary.critical.is_empty() {
        steps.push(format!(
            "🚨 Immediately address {} critical issue(s) before site launch or promotion",
            priority_summary.critical.len()
        ));
    }

    if !priority_summary.high.is_empty() {
        steps.push(format!(
            "⚠️ Schedule fixes for {} high-priority item(s) within one week",
            priority_summary.high.len()
        ));
    }

    match rating {
        OverallRating::Poor => {
            steps.push("📋 Conduct comprehensive site review with development team".to_string());
            steps.push("📅 Create detailed remediation timeline with milestones".to_string());
        }
        OverallRating::Fair => {
            steps.push("🔍 Prioritize and assign issues to development team".to_string());
        }
        _ => {}
    }

    if !priority_summary.medium.is_empty() {
        steps.push(format!(
            "📌 Plan sprint for {} medium-priority improvement(s)",
            priority_summary.medium.len()
        ));
    }

    if !priority_summary.low.is_empty() && rating != OverallRating::Poor {
        steps.push(format!(
            "💡 Add {} low-priority item(s) to backlog for future iterations",
            priority_summary.low.len()
        ));
    }

    steps.push("👥 Assign tasks to team members with clear completion dates".to_string());
    steps.push("🔄 Schedule follow-up QA review after fixes are implemented".to_string());

    if rating == OverallRating::Excellent {
        steps.push("🚀 Site is ready for launch - proceed with deployment plan".to_string());
    }

    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_summary() -> PrioritySummary {
        PrioritySummary {
            critical: vec!["payment broken".to_string(), "login broken".to_string()],
            high: vec!["mobile menu overlaps".to_string()],
            medium: vec!["slow images".to_string(), "no sitemap".to_string()],
            low: vec!["favicon missing".to_string()],
        }
    }

    #[test]
    fn excellent_with_empty_summary_is_exactly_three_steps() {
        let steps = generate_next_steps(OverallRating::Excellent, &PrioritySummary::default());
        assert_eq!(
            steps,
            vec![
                "👥 Assign tasks to team members with clear completion dates",
                "🔄 Schedule follow-up QA review after fixes are implemented",
                "🚀 Site is ready for launch - proceed with deployment plan",
            ]
        );
    }

    #[test]
    fn poor_rating_suppresses_low_priority_backlog_step() {
        let steps = generate_next_steps(OverallRating::Poor, &full_summary());

        assert!(!steps.iter().any(|s| s.contains("backlog")));
        assert_eq!(
            steps,
            vec![
                "🚨 Immediately address 2 critical issue(s) before site launch or promotion",
                "⚠️ Schedule fixes for 1 high-priority item(s) within one week",
                "📋 Conduct comprehensive site review with development team",
                "📅 Create detailed remediation timeline with milestones",
                "📌 Plan sprint for 2 medium-priority improvement(s)",
                "👥 Assign tasks to team members with clear completion dates",
                "🔄 Schedule follow-up QA review after fixes are implemented",
            ]
        );
    }

    #[test]
    fn fair_rating_includes_low_priority_backlog_step() {
        let steps = generate_next_steps(OverallRating::Fair, &full_summary());
        assert!(steps
            .iter()
            .any(|s| s == "💡 Add 1 low-priority item(s) to backlog for future iterations"));
        assert!(steps
            .iter()
            .any(|s| s == "🔍 Prioritize and assign issues to development team"));
    }

    #[test]
    fn good_rating_has_no_rating_specific_step() {
        let steps = generate_next_steps(OverallRating::Good, &PrioritySummary::default());
        assert_eq!(
            steps,
            vec![
                "👥 Assign tasks to team members with clear completion dates",
                "🔄 Schedule follow-up QA review after fixes are implemented",
            ]
        );
    }

    #[test]
    fn closing_steps_always_present_and_last_before_launch_note() {
        for rating in [
            OverallRating::Excellent,
            OverallRating::Good,
            OverallRating::Fair,
            OverallRating::Poor,
        ] {
            let steps = generate_next_steps(rating, &full_summary());
            let assign_pos = steps
                .iter()
                .position(|s| s.starts_with("👥"))
                .expect("assign step present");
            let follow_up_pos = steps
                .iter()
                .position(|s| s.starts_with("🔄"))
                .expect("follow-up step present");
            assert_eq!(follow_up_pos, assign_pos + 1);
        }
    }

    #[test]
    fn generation_is_idempotent() {
        let summary = full_summary();
        let first = generate_next_steps(OverallRating::Fair, &summary);
        let second = generate_next_steps(OverallRating::Fair, &summary);
        assert_eq!(first, second);
    }
}
