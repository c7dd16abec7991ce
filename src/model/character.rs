use serde::{Deserialize, Serialize};

use super::class::ClassName;

/// A placeable roster member.
///
/// `account` is the owner key: one player may register several characters
/// under the same account, and at most one of them may occupy a slot in any
/// given party. `power` is the sort weight for automatic assignment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Character {
    pub id: u64,
    pub account: String,
    pub name: String,
    pub class: ClassName,
    pub power: f64,
}
