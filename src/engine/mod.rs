pub mod assign;
pub mod placement;

pub use assign::{AssignmentOutcome, auto_assign_all, auto_assign_unplaced};
pub use placement::{place, remove_everywhere, remove_from_slot};
