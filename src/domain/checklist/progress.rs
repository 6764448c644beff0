//! Progress and unchecked-item helpers.
//!
//! Read-only derivations over a checklist, used by the wizard progress bar,
//! the rating engine, and the summary view.

use super::model::{Checklist, IssuesFound};

/// A section that still has unchecked items, grouped for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UncheckedSection {
    pub category: String,
    pub section: String,
    /// Text of each unchecked item, in checklist order.
    pub items: Vec<String>,
    pub issues_found: IssuesFound,
}

impl Checklist {
    /// Counts unchecked items across all categories and sections.
    pub fn unchecked_count(&self) -> usize {
        self.sections()
            .flat_map(|s| s.items.iter())
            .filter(|item| !item.checked)
            .count()
    }

    /// Completion percentage, 0-100, rounded to the nearest integer.
    ///
    /// An empty checklist reports 0 rather than dividing by zero.
    pub fn progress_percent(&self) -> u8 {
        let total = self.total_items();
        if total == 0 {
            return 0;
        }
        let checked = total - self.unchecked_count();
        ((checked * 100 + total / 2) / total) as u8
    }

    /// Groups unchecked item text by section, preserving wizard order.
    ///
    /// Sections with every item checked are omitted. Each group carries the
    /// section's issue notes so the summary can show them alongside.
    pub fn unchecked_items(&self) -> Vec<UncheckedSection> {
        let mut groups = Vec::new();
        for category in self.categories() {
            for section in &category.sections {
                let unchecked: Vec<String> = section
                    .items
                    .iter()
                    .filter(|item| !item.checked)
                    .map(|item| item.text.clone())
                    .collect();
                if !unchecked.is_empty() {
                    groups.push(UncheckedSection {
                        category: category.category.clone(),
                        section: section.section_title.clone(),
                        items: unchecked,
                        issues_found: section.issues_found.clone(),
                    });
                }
            }
        }
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::checklist::{checklist_template, ChecklistCategory};

    fn check_first_n(checklist: &mut Checklist, n: usize) {
        let targets: Vec<(String, String)> = checklist
            .sections()
            .flat_map(|s| {
                s.items
                    .iter()
                    .map(move |i| (s.section_id.clone(), i.id.clone()))
            })
            .take(n)
            .collect();
        for (section_id, item_id) in targets {
            checklist.set_item_checked(&section_id, &item_id, true);
        }
    }

    fn check_all(checklist: &mut Checklist) {
        let total = checklist.total_items();
        check_first_n(checklist, total);
    }

    #[test]
    fn empty_checklist_has_zero_progress() {
        let checklist = Checklist(Vec::<ChecklistCategory>::new());
        assert_eq!(checklist.progress_percent(), 0);
        assert_eq!(checklist.unchecked_count(), 0);
        assert!(checklist.unchecked_items().is_empty());
    }

    #[test]
    fn fresh_template_is_zero_percent() {
        let checklist = checklist_template();
        assert_eq!(checklist.progress_percent(), 0);
        assert_eq!(checklist.unchecked_count(), checklist.total_items());
    }

    #[test]
    fn fully_checked_is_one_hundred_percent() {
        let mut checklist = checklist_template();
        check_all(&mut checklist);
        assert_eq!(checklist.progress_percent(), 100);
        assert_eq!(checklist.unchecked_count(), 0);
        assert!(checklist.unchecked_items().is_empty());
    }

    #[test]
    fn progress_rounds_to_nearest() {
        // 3 of 4 checked -> 75
        let mut checklist = Checklist(vec![ChecklistCategory {
            category: "C".to_string(),
            sections: checklist_template().categories()[0].sections.clone(),
        }]);
        // Trim to exactly 4 items in one section
        checklist.0[0].sections.truncate(1);
        checklist.0[0].sections[0].items.truncate(4);
        check_first_n(&mut checklist, 3);
        assert_eq!(checklist.progress_percent(), 75);
    }

    #[test]
    fn unchecked_groups_sum_to_unchecked_count() {
        let mut checklist = checklist_template();
        check_first_n(&mut checklist, 7);

        let groups = checklist.unchecked_items();
        let grouped: usize = groups.iter().map(|g| g.items.len()).sum();
        assert_eq!(grouped, checklist.unchecked_count());
    }

    #[test]
    fn fully_checked_sections_are_omitted_from_groups() {
        let mut checklist = checklist_template();
        // Check every item in the first section only
        let first: Vec<(String, String)> = {
            let section = checklist.sections().next().unwrap();
            section
                .items
                .iter()
                .map(|i| (section.section_id.clone(), i.id.clone()))
                .collect()
        };
        let first_title = checklist.sections().next().unwrap().section_title.clone();
        for (section_id, item_id) in first {
            checklist.set_item_checked(&section_id, &item_id, true);
        }

        let groups = checklist.unchecked_items();
        assert!(groups.iter().all(|g| g.section != first_title));
    }

    #[test]
    fn groups_preserve_wizard_order() {
        let checklist = checklist_template();
        let groups = checklist.unchecked_items();

        let expected: Vec<String> = checklist
            .sections()
            .map(|s| s.section_title.clone())
            .collect();
        let actual: Vec<String> = groups.iter().map(|g| g.section.clone()).collect();
        assert_eq!(actual, expected);
    }
}
