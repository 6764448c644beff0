//! Plain-text report renderer.
//!
//! Produces the downloadable report document. The structure is a
//! compatibility contract: exact labels, underline characters repeated to
//! label length, `•` bullets, and `✓`/`✗` check glyphs. Deterministic for
//! a fixed report.

use std::fmt::Write;

use super::aggregate::QaReport;

/// Renders a report as a human-readable plain-text document.
pub fn render_report_text(report: &QaReport) -> String {
    let mut text = String::new();
    let details = report.details();

    text.push_str("QA REPORT\n");
    text.push_str("==========\n\n");
    let _ = writeln!(text, "Website Name: {}", details.website_name);
    let _ = writeln!(text, "URL: {}", details.url);
    let _ = writeln!(
        text,
        "Date Reviewed: {}",
        details.date_reviewed.format("%b %-d, %Y")
    );
    let _ = writeln!(text, "Reviewer: {}", details.reviewer_name);
    let _ = writeln!(
        text,
        "Priority Level: {}",
        report.priority_level().as_str().to_uppercase()
    );
    if let Some(rating) = report.overall_rating() {
        let _ = writeln!(text, "Overall Rating: {}", rating.as_str().to_uppercase());
    }
    text.push('\n');

    for category in report.checklist().categories() {
        let _ = writeln!(text, "{}", category.category);
        let _ = writeln!(text, "{}", "=".repeat(category.category.chars().count()));
        text.push('\n');

        for section in &category.sections {
            let _ = writeln!(text, "{}", section.section_title);
            let _ = writeln!(
                text,
                "{}",
                "-".repeat(section.section_title.chars().count())
            );
            text.push('\n');

            for item in &section.items {
                let glyph = if item.checked { '✓' } else { '✗' };
                let _ = writeln!(text, "{} {}", glyph, item.text);
            }

            let issues = &section.issues_found;
            if !issues.text.is_empty() || !issues.images.is_empty() {
                text.push_str("\nIssues Found:\n");
                if !issues.text.is_empty() {
                    let _ = writeln!(text, "{}", issues.text);
                }
                if !issues.images.is_empty() {
                    let _ = writeln!(text, "Images: {} image(s)", issues.images.len());
                }
            }
            text.push('\n');
        }
    }

    let summary = report.priority_summary();
    text.push_str("PRIORITY SUMMARY\n");
    let _ = writeln!(text, "{}", "=".repeat(15));
    text.push('\n');
    let tiers: [(&str, &[String]); 4] = [
        ("Critical Issues:", &summary.critical),
        ("High Priority:", &summary.high),
        ("Medium Priority:", &summary.medium),
        ("Low Priority:", &summary.low),
    ];
    for (label, issues) in tiers {
        if !issues.is_empty() {
            let _ = writeln!(text, "{}", label);
            for issue in issues {
                let _ = writeln!(text, "  • {}", issue);
            }
            text.push('\n');
        }
    }

    if !report.next_steps().is_empty() {
        text.push_str("NEXT STEPS\n");
        let _ = writeln!(text, "{}", "=".repeat(10));
        text.push('\n');
        for step in report.next_steps() {
            let _ = writeln!(text, "  • {}", step);
        }
    }

    text
}
