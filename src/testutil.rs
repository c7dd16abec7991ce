use std::collections::HashMap;

use crate::model::{Character, Roster, TimeSlot};

// ---------------------------------------------------------------------------
// Layout snapshots
// ---------------------------------------------------------------------------

/// Snapshot of every party's slots, for before/after comparisons around
/// operations that must not mutate on failure.
pub fn layout(roster: &Roster) -> Vec<Vec<Option<u64>>> {
    roster.parties.iter().map(|p| p.slots.clone()).collect()
}

/// Total occupied slots across all parties.
pub fn placed_count(roster: &Roster) -> usize {
    roster.parties.iter().map(|p| p.occupied().count()).sum()
}

/// Occupants of a party in slot order.
pub fn party_members<'a>(roster: &'a Roster, party_id: u64) -> Vec<&'a Character> {
    roster
        .party(party_id)
        .expect("party_members: party not found")
        .occupied()
        .filter_map(|(_, id)| roster.character(id))
        .collect()
}

// ---------------------------------------------------------------------------
// Invariant assertions
// ---------------------------------------------------------------------------

/// Assert every structural invariant of a roster layout:
/// - every occupied slot references a registered character
/// - no two occupied slots of one party share an account
/// - a character holds at most one slot per time tag ("no tag" counts as
///   one more tag value), so untagged rosters allow one slot total
pub fn assert_layout_valid(roster: &Roster) {
    let mut tags_by_character: HashMap<u64, Vec<Option<TimeSlot>>> = HashMap::new();

    for party in &roster.parties {
        let mut accounts: Vec<&str> = Vec::new();
        for (slot, id) in party.occupied() {
            let character = roster.character(id).unwrap_or_else(|| {
                panic!(
                    "party {} slot {slot} references unknown character {id}",
                    party.name
                )
            });
            assert!(
                !accounts.contains(&character.account.as_str()),
                "party {} holds two characters of account {}",
                party.name,
                character.account
            );
            accounts.push(&character.account);
            tags_by_character.entry(id).or_default().push(party.time_slot);
        }
    }

    for (id, tags) in tags_by_character {
        let mut seen = Vec::new();
        for tag in tags {
            assert!(
                !seen.contains(&tag),
                "character {id} is double-booked within one time tag"
            );
            seen.push(tag);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ClassName;
    use crate::scenario::Scenario;

    #[test]
    fn valid_layout_passes() {
        let mut s = Scenario::new();
        let a = s.add_character("acc1", "A", ClassName::Mage, 1.0);
        let b = s.add_character("acc2", "B", ClassName::Mage, 1.0);
        let party = s.add_party("P");
        s.place(party, 0, a).place(party, 1, b);
        let roster = s.build();
        assert_layout_valid(&roster);
        assert_eq!(placed_count(&roster), 2);
        assert_eq!(layout(&roster)[0][0], Some(a));
        assert_eq!(party_members(&roster, party).len(), 2);
    }

    #[test]
    #[should_panic(expected = "two characters of account")]
    fn owner_collision_fails_the_check() {
        let mut s = Scenario::new();
        let a = s.add_character("shared", "A", ClassName::Mage, 1.0);
        let _b = s.add_character("shared", "B", ClassName::Mage, 1.0);
        let party = s.add_party("P");
        s.place(party, 0, a);
        let mut roster = s.build();
        // Corrupt the layout directly, bypassing the engine.
        let b = roster.characters[1].id;
        roster.party_mut(party).unwrap().slots[1] = Some(b);
        assert_layout_valid(&roster);
    }

    #[test]
    #[should_panic(expected = "double-booked")]
    fn untagged_double_booking_fails_the_check() {
        let mut s = Scenario::new();
        let a = s.add_character("acc1", "A", ClassName::Mage, 1.0);
        let p1 = s.add_party("P1");
        let p2 = s.add_party("P2");
        s.place(p1, 0, a);
        let mut roster = s.build();
        roster.party_mut(p2).unwrap().slots[0] = Some(a);
        assert_layout_valid(&roster);
    }

    #[test]
    fn distinct_tags_may_share_a_character() {
        let mut s = Scenario::new();
        let a = s.add_character("acc1", "A", ClassName::Mage, 1.0);
        let p1 = s.party("Eight").time_slot(8).id();
        let p2 = s.party("Nine").time_slot(9).id();
        s.place(p1, 0, a);
        let mut roster = s.build();
        roster.party_mut(p2).unwrap().slots[0] = Some(a);
        assert_layout_valid(&roster);
    }

    #[test]
    #[should_panic(expected = "unknown character")]
    fn dangling_reference_fails_the_check() {
        let mut s = Scenario::new();
        let party = s.add_party("P");
        let mut roster = s.build();
        roster.party_mut(party).unwrap().slots[0] = Some(404);
        assert_layout_valid(&roster);
    }
}
