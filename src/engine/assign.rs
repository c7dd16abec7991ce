use std::collections::HashSet;

use crate::error::Error;
use crate::model::{Character, Party, Roster, TimeSlot};

/// Result of one auto-assignment pass.
///
/// `placed` counts slot assignments made by the pass. Without time tags that
/// equals the number of distinct characters placed; with tags a character
/// that received slots under two different tags counts once per slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssignmentOutcome {
    pub placed: usize,
}

/// Discard every existing placement and reassign the whole registry.
///
/// Deterministic: the same characters, parties, conditions, and availability
/// produce the same layout on every run.
pub fn auto_assign_all(roster: &mut Roster) -> Result<AssignmentOutcome, Error> {
    run_pass(roster, true)
}

/// Keep existing placements and assign only currently-unplaced characters.
pub fn auto_assign_unplaced(roster: &mut Roster) -> Result<AssignmentOutcome, Error> {
    run_pass(roster, false)
}

/// Shared two-phase greedy pass: satisfy quota conditions first, then fill
/// remaining capacity by descending power. Works on a scratch copy of the
/// party list and commits by replacement, so a failed precondition leaves
/// the roster untouched.
fn run_pass(roster: &mut Roster, reset: bool) -> Result<AssignmentOutcome, Error> {
    if roster.parties.is_empty() {
        return Err(Error::NoParties);
    }

    let mut candidates: Vec<Character> = if reset {
        roster.characters.clone()
    } else {
        roster
            .characters
            .iter()
            .filter(|c| !roster.is_placed(c.id))
            .cloned()
            .collect()
    };
    if candidates.is_empty() {
        return Err(Error::NoCandidates);
    }
    // Power descending; the stable sort keeps registration order for ties.
    candidates.sort_by(|a, b| b.power.total_cmp(&a.power));

    let mut parties = roster.parties.clone();
    if reset {
        for party in &mut parties {
            party.slots.fill(None);
        }
    }

    // A character is "used" per usage key: the key carries the party's time
    // tag, so untagged rosters track globally while tagged rosters track per
    // tag. One slot per character per distinct tag, whatever tags exist.
    let mut used: HashSet<(Option<TimeSlot>, u64)> = HashSet::new();
    let mut placed = 0usize;

    // Quota phase: parties in registry order, conditions in declared order.
    for party in &mut parties {
        if party.conditions.is_empty() {
            continue;
        }
        let conditions = party.conditions.clone();
        for condition in &conditions {
            let current = roster.condition_count(party, condition);
            let mut needed = condition.min_count.saturating_sub(current);
            for candidate in &candidates {
                if needed == 0 {
                    break;
                }
                if !eligible(roster, &used, party, candidate, condition.matches(candidate.class))
                {
                    continue;
                }
                let Some(slot) = party.first_empty_slot() else {
                    break;
                };
                party.slots[slot] = Some(candidate.id);
                used.insert((party.time_slot, candidate.id));
                placed += 1;
                needed -= 1;
            }
        }
    }

    // Fill phase: remaining candidates by power, first party that takes them.
    for candidate in &candidates {
        for party in &mut parties {
            if !eligible(roster, &used, party, candidate, true) {
                continue;
            }
            let Some(slot) = party.first_empty_slot() else {
                continue;
            };
            party.slots[slot] = Some(candidate.id);
            used.insert((party.time_slot, candidate.id));
            placed += 1;
            break;
        }
    }

    tracing::debug!(
        candidates = candidates.len(),
        placed,
        reset,
        "auto-assignment pass finished"
    );
    roster.parties = parties;
    Ok(AssignmentOutcome { placed })
}

/// Whether a candidate may take a slot of `party` right now: class filter
/// already decided by the caller, not yet used under the party's usage key,
/// no account collision, and (for time-tagged parties) available at the
/// tag.
fn eligible(
    roster: &Roster,
    used: &HashSet<(Option<TimeSlot>, u64)>,
    party: &Party,
    candidate: &Character,
    class_matches: bool,
) -> bool {
    if !class_matches {
        return false;
    }
    if used.contains(&(party.time_slot, candidate.id)) {
        return false;
    }
    if roster.account_in_party(party, &candidate.account, None) {
        return false;
    }
    if let Some(tag) = party.time_slot
        && !roster.is_available_at(&candidate.account, tag)
    {
        return false;
    }
    true
}
