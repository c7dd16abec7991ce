pub mod character;
pub mod class;
pub mod condition;
pub mod party;
pub mod roster;
pub mod time;

pub use character::Character;
pub use class::{CLASS_CATEGORIES, CLASS_LIST, ClassCategory, ClassName};
pub use condition::Condition;
pub use party::Party;
pub use roster::Roster;
pub use time::TimeSlot;
