pub mod config;
pub mod engine;
pub mod error;
pub mod export;
pub mod id;
pub mod model;
pub mod parse;
pub mod scenario;
pub mod testutil;

pub use config::{DEFAULT_PARTY_SIZE, TimeWindow};
pub use engine::{
    AssignmentOutcome, auto_assign_all, auto_assign_unplaced, place, remove_everywhere,
    remove_from_slot,
};
pub use error::Error;
pub use id::IdGenerator;
pub use model::{Character, ClassName, Condition, Party, Roster, TimeSlot};
