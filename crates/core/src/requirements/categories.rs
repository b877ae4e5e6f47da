use serde::Serialize;

use super::types::Bucket;
use crate::issue::Issue;

/// A requirement category: issues whose rule id contains any keyword belong to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    pub label: &'static str,
    pub keywords: &'static [&'static str],
    pub bucket: Bucket,
}

/// Category table in emission order. One issue may match several rows.
pub const CATEGORIES: &[Category] = &[
    Category {
        label: "keyboard",
        keywords: &["keyboard", "tabindex", "focus"],
        bucket: Bucket::Functional,
    },
    Category {
        label: "color-contrast",
        keywords: &["color-contrast"],
        bucket: Bucket::Functional,
    },
    Category {
        label: "images",
        keywords: &["image-alt", "alt-text"],
        bucket: Bucket::Functional,
    },
    Category {
        label: "forms",
        keywords: &["label", "form"],
        bucket: Bucket::Functional,
    },
    Category {
        label: "focus-order",
        keywords: &["focus-order", "focus-visible"],
        bucket: Bucket::Technical,
    },
    Category {
        label: "headings",
        keywords: &["heading", "h1", "h2"],
        bucket: Bucket::Technical,
    },
    Category {
        label: "aria",
        keywords: &["aria", "role"],
        bucket: Bucket::Technical,
    },
    Category {
        label: "landmarks",
        keywords: &["landmark", "region"],
        bucket: Bucket::Technical,
    },
];

impl Category {
    pub fn matches(&self, issue_id: &str) -> bool {
        let id = issue_id.to_lowercase();
        self.keywords.iter().any(|k| id.contains(k))
    }
}

/// Every category an issue id falls into, in table order.
pub fn categorize(issue_id: &str) -> Vec<&'static Category> {
    CATEGORIES.iter().filter(|c| c.matches(issue_id)).collect()
}

/// Issues grouped per category, table order, empty categories included.
pub fn group_by_category(issues: &[Issue]) -> Vec<(&'static Category, Vec<&Issue>)> {
    let mut groups: Vec<(&'static Category, Vec<&Issue>)> =
        CATEGORIES.iter().map(|c| (c, Vec::new())).collect();
    for issue in issues {
        for category in categorize(&issue.id) {
            if let Some((_, members)) = groups.iter_mut().find(|(c, _)| c.label == category.label) {
                members.push(issue);
            }
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(id: &str) -> Vec<&'static str> {
        categorize(id).iter().map(|c| c.label).collect()
    }

    #[test]
    fn test_single_category() {
        assert_eq!(labels("color-contrast"), vec!["color-contrast"]);
        assert_eq!(labels("image-alt"), vec!["images"]);
        assert_eq!(labels("landmark-one-main"), vec!["landmarks"]);
    }

    #[test]
    fn test_multi_label() {
        // "focus" hits keyboard, "focus-order" hits focus-order
        assert_eq!(labels("focus-order-semantics"), vec!["keyboard", "focus-order"]);
        // "aria" and "label"
        assert_eq!(labels("aria-input-field-name-label"), vec!["forms", "aria"]);
        assert_eq!(labels("page-has-heading-one"), vec!["headings"]);
    }

    #[test]
    fn test_no_category() {
        assert!(labels("duplicate-id").is_empty());
        assert!(labels("meta-viewport").is_empty());
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(labels("Color-Contrast"), vec!["color-contrast"]);
    }
}
