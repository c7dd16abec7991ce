use thiserror::Error as ThisError;

use crate::model::TimeSlot;

/// Recoverable failures surfaced to callers.
///
/// Every variant is a normal, user-correctable condition; operations that
/// return one leave the roster untouched. Invariant breaks (a duplicate
/// placement outside time mode, a slot index past the party capacity) are
/// bugs, not errors, and panic instead.
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum Error {
    #[error("character already registered: {account} - {name}")]
    DuplicateCharacter { account: String, name: String },

    #[error("party {0} not found")]
    PartyNotFound(u64),

    #[error("character {0} not found")]
    CharacterNotFound(u64),

    #[error("account {account} already has a member in this party")]
    OwnerConflict { account: String },

    #[error("account {account} is not available at {slot}")]
    AvailabilityConflict { account: String, slot: TimeSlot },

    #[error("no parties to assign into")]
    NoParties,

    #[error("no characters eligible for assignment")]
    NoCandidates,
}
