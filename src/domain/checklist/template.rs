//! The fixed QA checklist template.
//!
//! Every new report gets its own clone of this template with all items
//! unchecked. Items keep stable ids so comments and screenshots attached
//! to a section stay meaningful across reports.

use once_cell::sync::Lazy;

use super::model::{Checklist, ChecklistCategory, ChecklistItem, ChecklistSection, IssuesFound};

/// Returns a fresh, fully-unchecked clone of the checklist template.
pub fn checklist_template() -> Checklist {
    TEMPLATE.clone()
}

static TEMPLATE: Lazy<Checklist> = Lazy::new(|| {
    Checklist(vec![
        category(
            "Functionality",
            vec![
                section(
                    "func-navigation",
                    "Navigation & Links",
                    &[
                        "All internal links resolve without 404s",
                        "External links open in a new tab",
                        "Primary navigation works on every page",
                        "Breadcrumbs reflect the actual page hierarchy",
                    ],
                ),
                section(
                    "func-forms",
                    "Forms & Validation",
                    &[
                        "All forms submit successfully",
                        "Required-field validation shows clear messages",
                        "Confirmation or thank-you state appears after submit",
                        "Invalid input never results in a blank page or crash",
                    ],
                ),
                section(
                    "func-search",
                    "Search & Interactive Features",
                    &[
                        "Site search returns relevant results",
                        "Interactive widgets (carousels, accordions, modals) work",
                        "Error pages (404/500) are branded and link back home",
                    ],
                ),
            ],
        ),
        category(
            "Design & Responsiveness",
            vec![
                section(
                    "design-layout",
                    "Layout & Consistency",
                    &[
                        "Layout matches the approved design",
                        "Fonts, colors, and spacing are consistent across pages",
                        "No broken or stretched images",
                    ],
                ),
                section(
                    "design-responsive",
                    "Responsive Behavior",
                    &[
                        "Pages render correctly at mobile widths (375px)",
                        "Pages render correctly at tablet widths (768px)",
                        "No horizontal scrolling at any breakpoint",
                        "Tap targets are comfortably sized on touch devices",
                    ],
                ),
            ],
        ),
        category(
            "Content",
            vec![
                section(
                    "content-copy",
                    "Copy & Accuracy",
                    &[
                        "No spelling or grammar errors",
                        "No placeholder text (lorem ipsum) remains",
                        "Contact details and business hours are correct",
                        "Legal pages (privacy policy, terms) are present",
                    ],
                ),
                section(
                    "content-media",
                    "Media",
                    &[
                        "Images are optimized and load correctly",
                        "Videos play with controls and do not autoplay with sound",
                        "All media has appropriate licensing",
                    ],
                ),
            ],
        ),
        category(
            "Performance",
            vec![
                section(
                    "perf-loading",
                    "Load Times",
                    &[
                        "Key landing pages load in under 3 seconds",
                        "Images are served in modern formats with lazy loading",
                        "No render-blocking scripts on the critical path",
                        "Caching headers are configured",
                    ],
                ),
            ],
        ),
        category(
            "SEO",
            vec![
                section(
                    "seo-meta",
                    "Metadata",
                    &[
                        "Every page has a unique title and meta description",
                        "Open Graph tags produce correct social previews",
                        "Canonical URLs are set",
                    ],
                ),
                section(
                    "seo-indexing",
                    "Indexing",
                    &[
                        "robots.txt allows intended crawling",
                        "XML sitemap is present and submitted",
                        "Redirects from old URLs are in place (no chains)",
                    ],
                ),
            ],
        ),
        category(
            "Accessibility",
            vec![
                section(
                    "a11y-structure",
                    "Structure & Semantics",
                    &[
                        "Headings are hierarchical (single h1 per page)",
                        "All images have meaningful alt text",
                        "Form inputs have associated labels",
                    ],
                ),
                section(
                    "a11y-interaction",
                    "Interaction",
                    &[
                        "Full keyboard navigation works with visible focus",
                        "Color contrast meets WCAG AA",
                        "No content flashes or auto-moves without controls",
                    ],
                ),
            ],
        ),
        category(
            "Security",
            vec![
                section(
                    "sec-transport",
                    "Transport & Headers",
                    &[
                        "HTTPS is enforced with a valid certificate",
                        "HTTP requests redirect to HTTPS",
                        "Security headers (CSP, HSTS) are configured",
                        "Admin and staging URLs are not publicly accessible",
                    ],
                ),
            ],
        ),
    ])
});

fn category(name: &str, sections: Vec<ChecklistSection>) -> ChecklistCategory {
    ChecklistCategory {
        category: name.to_string(),
        sections,
    }
}

fn section(id: &str, title: &str, items: &[&str]) -> ChecklistSection {
    ChecklistSection {
        section_id: id.to_string(),
        section_title: title.to_string(),
        items: items
            .iter()
            .enumerate()
            .map(|(i, text)| ChecklistItem {
                id: format!("{}-{}", id, i + 1),
                text: text.to_string(),
                checked: false,
            })
            .collect(),
        issues_found: IssuesFound::default(),
        completed: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn template_starts_fully_unchecked() {
        let template = checklist_template();
        assert!(template
            .sections()
            .flat_map(|s| s.items.iter())
            .all(|item| !item.checked));
        assert!(template.sections().all(|s| !s.completed));
    }

    #[test]
    fn template_clones_are_independent() {
        let mut a = checklist_template();
        let b = checklist_template();
        a.set_item_checked("func-navigation", "func-navigation-1", true);
        assert_ne!(a, b);
    }

    #[test]
    fn section_ids_are_unique() {
        let template = checklist_template();
        let mut seen = HashSet::new();
        for section in template.sections() {
            assert!(seen.insert(section.section_id.clone()));
        }
    }

    #[test]
    fn item_ids_are_unique() {
        let template = checklist_template();
        let mut seen = HashSet::new();
        for item in template.sections().flat_map(|s| s.items.iter()) {
            assert!(seen.insert(item.id.clone()));
        }
    }

    #[test]
    fn template_has_no_empty_sections() {
        let template = checklist_template();
        assert!(!template.categories().is_empty());
        for category in template.categories() {
            assert!(!category.sections.is_empty());
            for section in &category.sections {
                assert!(!section.items.is_empty());
            }
        }
    }
}
