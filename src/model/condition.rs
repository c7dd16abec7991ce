use serde::{Deserialize, Serialize};

use super::class::{CLASS_CATEGORIES, ClassCategory, ClassName};

/// A quota rule attached to a party: at least `min_count` occupied slots
/// whose class is one of `classes`.
///
/// Conditions are replaced wholesale via
/// [`Roster::set_conditions`](crate::model::Roster::set_conditions); there is
/// no in-place mutation of an existing rule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Condition {
    pub classes: Vec<ClassName>,
    pub min_count: u32,
}

impl Condition {
    pub fn new(classes: impl Into<Vec<ClassName>>, min_count: u32) -> Self {
        Self {
            classes: classes.into(),
            min_count,
        }
    }

    /// A condition over every class of one category line, the common case
    /// when a picker selects a whole line at once.
    pub fn for_category(category: ClassCategory, min_count: u32) -> Self {
        let classes = CLASS_CATEGORIES
            .iter()
            .find(|cat| cat.category == category)
            .expect("every category has a class line")
            .classes
            .to_vec();
        Self { classes, min_count }
    }

    pub fn matches(&self, class: ClassName) -> bool {
        self.classes.contains(&class)
    }
}
