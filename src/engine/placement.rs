use crate::error::Error;
use crate::model::Roster;

/// Put a character into a specific party slot.
///
/// One operation covers all three gestures: drop from the pool (character
/// has no current slot), move (target slot empty), and swap (target slot
/// occupied, where the displaced occupant takes the mover's old slot, or
/// returns to the pool when the mover had none). Validation runs entirely
/// against
/// the current state and the roster is only mutated on success.
///
/// Fails with [`Error::OwnerConflict`] when the resulting layout would put
/// two characters of one account into the same party, and with
/// [`Error::AvailabilityConflict`] when a time-tagged party would receive an
/// account that cannot attend its tag (the displaced occupant's destination
/// is checked the same way). On a roster whose parties carry time tags, the
/// slot vacated is the character's seat under the target party's tag; seats
/// under other tags are untouched.
///
/// # Panics
/// Panics if `slot_index` is outside the party's capacity.
pub fn place(
    roster: &mut Roster,
    party_id: u64,
    slot_index: usize,
    character_id: u64,
) -> Result<(), Error> {
    let account = roster
        .character(character_id)
        .ok_or(Error::CharacterNotFound(character_id))?
        .account
        .clone();
    let target_index = roster
        .parties
        .iter()
        .position(|p| p.id == party_id)
        .ok_or(Error::PartyNotFound(party_id))?;
    assert!(
        slot_index < roster.parties[target_index].slots.len(),
        "place: slot {slot_index} out of range"
    );

    if let Some(tag) = roster.parties[target_index].time_slot
        && !roster.is_available_at(&account, tag)
    {
        return Err(Error::AvailabilityConflict {
            account,
            slot: tag,
        });
    }

    // The placement being moved is the one under the target's time tag;
    // seats the character holds under other tags are left alone, so a
    // tagged roster keeps its one-slot-per-tag shape. Untagged rosters have
    // a single placement and this is simply it.
    let target_tag = roster.parties[target_index].time_slot;
    let source = roster.parties.iter().enumerate().find_map(|(index, party)| {
        (party.time_slot == target_tag)
            .then(|| party.slot_of(character_id).map(|slot| (index, slot)))
            .flatten()
    });

    let occupant = roster.parties[target_index].slots[slot_index];
    if occupant == Some(character_id) {
        return Ok(());
    }

    match occupant {
        Some(occupant_id) => {
            let occupant_account = roster
                .character(occupant_id)
                .expect("occupied slot references a registered character")
                .account
                .clone();
            match source {
                // Cross-party swap: both sides must stay collision-free.
                Some((source_index, source_slot)) if source_index != target_index => {
                    if roster.account_in_party(
                        &roster.parties[target_index],
                        &account,
                        Some(slot_index),
                    ) {
                        return Err(Error::OwnerConflict { account });
                    }
                    if roster.account_in_party(
                        &roster.parties[source_index],
                        &occupant_account,
                        Some(source_slot),
                    ) {
                        return Err(Error::OwnerConflict {
                            account: occupant_account,
                        });
                    }
                    if let Some(tag) = roster.parties[source_index].time_slot
                        && !roster.is_available_at(&occupant_account, tag)
                    {
                        return Err(Error::AvailabilityConflict {
                            account: occupant_account,
                            slot: tag,
                        });
                    }
                }
                // Swap within one party only reorders its members.
                Some(_) => {}
                // Drop from the pool onto an occupied slot: the occupant
                // returns to the pool, only the mover's side needs checking.
                None => {
                    if roster.account_in_party(
                        &roster.parties[target_index],
                        &account,
                        Some(slot_index),
                    ) {
                        return Err(Error::OwnerConflict { account });
                    }
                }
            }
        }
        None => {
            let exclude = match source {
                Some((source_index, source_slot)) if source_index == target_index => {
                    Some(source_slot)
                }
                _ => None,
            };
            if roster.account_in_party(&roster.parties[target_index], &account, exclude) {
                return Err(Error::OwnerConflict { account });
            }
        }
    }

    // All checks passed; apply.
    if let Some((source_index, source_slot)) = source {
        roster.parties[source_index].slots[source_slot] = occupant;
    }
    roster.parties[target_index].slots[slot_index] = Some(character_id);
    Ok(())
}

/// Vacate a single slot unconditionally.
///
/// # Panics
/// Panics if `slot_index` is outside the party's capacity.
pub fn remove_from_slot(
    roster: &mut Roster,
    party_id: u64,
    slot_index: usize,
) -> Result<(), Error> {
    let party = roster
        .party_mut(party_id)
        .ok_or(Error::PartyNotFound(party_id))?;
    assert!(
        slot_index < party.slots.len(),
        "remove_from_slot: slot {slot_index} out of range"
    );
    party.slots[slot_index] = None;
    Ok(())
}

/// Vacate every slot referencing the character, across all parties.
///
/// Idempotent; safe to call for ids that were never placed or no longer
/// exist. Returns the number of slots cleared.
pub fn remove_everywhere(roster: &mut Roster, character_id: u64) -> usize {
    let mut cleared = 0;
    for party in &mut roster.parties {
        for slot in &mut party.slots {
            if *slot == Some(character_id) {
                *slot = None;
                cleared += 1;
            }
        }
    }
    cleared
}
