use serde::{Deserialize, Serialize};

use super::condition::Condition;
use super::time::TimeSlot;

/// A fixed-capacity group of character references.
///
/// Slots are ordered and fixed-length; each holds at most one character id.
/// Characters stay owned by the roster registry, a slot only references
/// them. An optional `time_slot` tag activates availability constraints for
/// this party alone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Party {
    pub id: u64,
    pub name: String,
    pub slots: Vec<Option<u64>>,
    pub conditions: Vec<Condition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_slot: Option<TimeSlot>,
}

impl Party {
    pub fn new(id: u64, name: String, size: usize) -> Self {
        Self {
            id,
            name,
            slots: vec![None; size],
            conditions: Vec::new(),
            time_slot: None,
        }
    }

    /// Occupied slots as `(slot_index, character_id)`, in slot order.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.map(|id| (index, id)))
    }

    /// Lowest-index empty slot, if any.
    pub fn first_empty_slot(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    pub fn is_full(&self) -> bool {
        self.first_empty_slot().is_none()
    }

    /// Slot index currently holding the given character, if any.
    pub fn slot_of(&self, character_id: u64) -> Option<usize> {
        self.slots.iter().position(|slot| *slot == Some(character_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_party_is_all_empty() {
        let party = Party::new(1, "Party 1".to_string(), 8);
        assert_eq!(party.slots.len(), 8);
        assert_eq!(party.occupied().count(), 0);
        assert_eq!(party.first_empty_slot(), Some(0));
        assert!(!party.is_full());
    }

    #[test]
    fn occupied_preserves_slot_order() {
        let mut party = Party::new(1, "P".to_string(), 4);
        party.slots[2] = Some(30);
        party.slots[0] = Some(10);
        let occupied: Vec<_> = party.occupied().collect();
        assert_eq!(occupied, vec![(0, 10), (2, 30)]);
    }

    #[test]
    fn first_empty_slot_skips_occupied() {
        let mut party = Party::new(1, "P".to_string(), 3);
        party.slots[0] = Some(10);
        assert_eq!(party.first_empty_slot(), Some(1));
        party.slots[1] = Some(20);
        party.slots[2] = Some(30);
        assert_eq!(party.first_empty_slot(), None);
        assert!(party.is_full());
    }

    #[test]
    fn slot_of_finds_member() {
        let mut party = Party::new(1, "P".to_string(), 3);
        party.slots[1] = Some(20);
        assert_eq!(party.slot_of(20), Some(1));
        assert_eq!(party.slot_of(99), None);
    }

    #[test]
    fn time_slot_omitted_from_json_when_unset() {
        let party = Party::new(1, "P".to_string(), 2);
        let json = serde_json::to_value(&party).unwrap();
        assert!(json.get("time_slot").is_none());
    }

    #[test]
    fn time_slot_round_trips() {
        let mut party = Party::new(1, "P".to_string(), 2);
        party.time_slot = Some(TimeSlot::new(9));
        let json = serde_json::to_string(&party).unwrap();
        let back: Party = serde_json::from_str(&json).unwrap();
        assert_eq!(back, party);
    }
}
