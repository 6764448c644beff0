//! Checklist data structures.
//!
//! Field names follow the stored JSON shape (`sectionId`, `sectionTitle`,
//! `issuesFound`), which is also the shape the web client reads and writes.

use serde::{Deserialize, Serialize};

/// A single checkable item within a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: String,
    pub text: String,
    pub checked: bool,
}

/// Issue notes attached to a section: free text plus screenshot URLs.
///
/// Images are opaque URLs into the object store, never embedded data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuesFound {
    pub text: String,
    pub images: Vec<String>,
}

impl IssuesFound {
    /// Returns true when there is neither text nor any image.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.images.is_empty()
    }
}

/// An ordered group of items reviewed together in one wizard step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistSection {
    pub section_id: String,
    pub section_title: String,
    pub items: Vec<ChecklistItem>,
    pub issues_found: IssuesFound,
    /// Cached derivation: true iff every item is checked. Not a source of
    /// truth; recomputed via [`Checklist::recompute_completion`].
    pub completed: bool,
}

impl ChecklistSection {
    /// Returns true iff every item in the section is checked.
    pub fn all_checked(&self) -> bool {
        self.items.iter().all(|item| item.checked)
    }
}

/// A titled group of sections. Order is significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistCategory {
    pub category: String,
    pub sections: Vec<ChecklistSection>,
}

/// The full checklist of a report: ordered categories of ordered sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Checklist(pub Vec<ChecklistCategory>);

impl Checklist {
    /// Returns the categories in wizard order.
    pub fn categories(&self) -> &[ChecklistCategory] {
        &self.0
    }

    /// Iterates over all sections across categories, in wizard order.
    pub fn sections(&self) -> impl Iterator<Item = &ChecklistSection> {
        self.0.iter().flat_map(|c| c.sections.iter())
    }

    /// Total number of items across the whole checklist.
    pub fn total_items(&self) -> usize {
        self.sections().map(|s| s.items.len()).sum()
    }

    /// Recomputes every section's cached `completed` flag from item state.
    ///
    /// Must be called after any mutation of item `checked` flags; the flag
    /// is stored redundantly and would otherwise go stale.
    pub fn recompute_completion(&mut self) {
        for category in &mut self.0 {
            for section in &mut category.sections {
                section.completed = section.all_checked();
            }
        }
    }

    /// Sets the checked state of one item, identified by section and item id.
    ///
    /// Returns false if no such item exists. Recomputes the owning
    /// section's completion flag.
    pub fn set_item_checked(&mut self, section_id: &str, item_id: &str, checked: bool) -> bool {
        for category in &mut self.0 {
            for section in &mut category.sections {
                if section.section_id != section_id {
                    continue;
                }
                if let Some(item) = section.items.iter_mut().find(|i| i.id == item_id) {
                    item.checked = checked;
                    section.completed = section.all_checked();
                    return true;
                }
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(id: &str, checked: &[bool]) -> ChecklistSection {
        ChecklistSection {
            section_id: id.to_string(),
            section_title: id.to_string(),
            items: checked
                .iter()
                .enumerate()
                .map(|(i, &c)| ChecklistItem {
                    id: format!("{id}-{i}"),
                    text: format!("item {i}"),
                    checked: c,
                })
                .collect(),
            issues_found: IssuesFound::default(),
            completed: false,
        }
    }

    #[test]
    fn recompute_completion_marks_fully_checked_sections() {
        let mut checklist = Checklist(vec![ChecklistCategory {
            category: "Functionality".to_string(),
            sections: vec![section("a", &[true, true]), section("b", &[true, false])],
        }]);

        checklist.recompute_completion();

        let sections: Vec<_> = checklist.sections().collect();
        assert!(sections[0].completed);
        assert!(!sections[1].completed);
    }

    #[test]
    fn set_item_checked_updates_completion() {
        let mut checklist = Checklist(vec![ChecklistCategory {
            category: "Functionality".to_string(),
            sections: vec![section("a", &[true, false])],
        }]);

        assert!(checklist.set_item_checked("a", "a-1", true));
        assert!(checklist.sections().next().unwrap().completed);
    }

    #[test]
    fn set_item_checked_unknown_item_is_noop() {
        let mut checklist = Checklist(vec![ChecklistCategory {
            category: "Functionality".to_string(),
            sections: vec![section("a", &[true])],
        }]);

        assert!(!checklist.set_item_checked("a", "missing", false));
        assert!(!checklist.set_item_checked("missing", "a-0", false));
    }

    #[test]
    fn serde_uses_stored_json_shape() {
        let checklist = Checklist(vec![ChecklistCategory {
            category: "Content".to_string(),
            sections: vec![section("a", &[false])],
        }]);

        let json = serde_json::to_value(&checklist).unwrap();
        let section = &json[0]["sections"][0];
        assert!(section.get("sectionId").is_some());
        assert!(section.get("sectionTitle").is_some());
        assert!(section.get("issuesFound").is_some());
    }
}
