use std::collections::BTreeSet;

use indexmap::IndexMap;

use super::character::Character;
use super::class::ClassName;
use super::condition::Condition;
use super::party::Party;
use super::time::TimeSlot;
use crate::config::DEFAULT_PARTY_SIZE;
use crate::error::Error;
use crate::id::IdGenerator;

/// The single owned application state: character registry, party registry,
/// and per-account availability.
///
/// Registration order of `characters` and `parties` is semantic: it drives
/// the account grouping order, the auto-assign tie-break, and the party
/// iteration order of every engine pass. Placement lives only in party
/// slots; membership queries are recomputed from them on demand.
#[derive(Debug, Clone)]
pub struct Roster {
    pub characters: Vec<Character>,
    pub parties: Vec<Party>,
    pub availability: IndexMap<String, BTreeSet<TimeSlot>>,
    pub id_gen: IdGenerator,
    pub party_size: usize,
}

impl Roster {
    pub fn new() -> Self {
        Self::with_party_size(DEFAULT_PARTY_SIZE)
    }

    pub fn with_party_size(party_size: usize) -> Self {
        assert!(party_size > 0, "party size must be positive");
        Self {
            characters: Vec::new(),
            parties: Vec::new(),
            availability: IndexMap::new(),
            id_gen: IdGenerator::new(),
            party_size,
        }
    }

    // -----------------------------------------------------------------------
    // Character registry
    // -----------------------------------------------------------------------

    /// Register a character, assigning it a unique ID.
    ///
    /// Inputs are trimmed before storage. Fails with
    /// [`Error::DuplicateCharacter`] when a character with the same trimmed
    /// `(account, name)` pair already exists (case-sensitive).
    pub fn register(
        &mut self,
        account: &str,
        name: &str,
        class: ClassName,
        power: f64,
    ) -> Result<&Character, Error> {
        let account = account.trim();
        let name = name.trim();
        if self
            .characters
            .iter()
            .any(|c| c.account == account && c.name == name)
        {
            return Err(Error::DuplicateCharacter {
                account: account.to_string(),
                name: name.to_string(),
            });
        }
        let id = self.id_gen.next_id();
        tracing::debug!(id, account, name, "registered character");
        self.characters.push(Character {
            id,
            account: account.to_string(),
            name: name.to_string(),
            class,
            power,
        });
        Ok(self.characters.last().expect("just pushed"))
    }

    /// Remove a character from the registry and return it.
    ///
    /// Does not touch party slots; callers pair this with
    /// [`remove_everywhere`](crate::engine::remove_everywhere) so no slot is
    /// left referencing the removed id.
    pub fn unregister(&mut self, character_id: u64) -> Result<Character, Error> {
        let index = self
            .characters
            .iter()
            .position(|c| c.id == character_id)
            .ok_or(Error::CharacterNotFound(character_id))?;
        Ok(self.characters.remove(index))
    }

    pub fn character(&self, character_id: u64) -> Option<&Character> {
        self.characters.iter().find(|c| c.id == character_id)
    }

    /// Characters grouped by account, both keys and members in registration
    /// order.
    pub fn characters_by_account(&self) -> IndexMap<&str, Vec<&Character>> {
        let mut grouped: IndexMap<&str, Vec<&Character>> = IndexMap::new();
        for character in &self.characters {
            grouped
                .entry(character.account.as_str())
                .or_default()
                .push(character);
        }
        grouped
    }

    /// Characters not currently placed in any party, in registration order.
    pub fn unplaced_characters(&self) -> Vec<&Character> {
        self.characters
            .iter()
            .filter(|c| !self.is_placed(c.id))
            .collect()
    }

    // -----------------------------------------------------------------------
    // Party registry
    // -----------------------------------------------------------------------

    /// Create an empty party and return its ID.
    pub fn create_party(&mut self, name: &str) -> u64 {
        let id = self.id_gen.next_id();
        self.parties
            .push(Party::new(id, name.to_string(), self.party_size));
        id
    }

    /// Create an empty party carrying a time tag.
    pub fn create_party_at(&mut self, name: &str, time_slot: TimeSlot) -> u64 {
        let id = self.create_party(name);
        self.party_mut(id).expect("just created").time_slot = Some(time_slot);
        id
    }

    pub fn rename_party(&mut self, party_id: u64, name: &str) -> Result<(), Error> {
        let party = self
            .party_mut(party_id)
            .ok_or(Error::PartyNotFound(party_id))?;
        party.name = name.to_string();
        Ok(())
    }

    /// Remove a party; its slot contents are simply discarded.
    pub fn remove_party(&mut self, party_id: u64) -> Result<Party, Error> {
        let index = self
            .parties
            .iter()
            .position(|p| p.id == party_id)
            .ok_or(Error::PartyNotFound(party_id))?;
        Ok(self.parties.remove(index))
    }

    /// Replace a party's conditions wholesale.
    ///
    /// # Panics
    /// Panics on a condition with an empty class list or a zero minimum;
    /// pickers never produce either, so such a rule is a caller bug.
    pub fn set_conditions(
        &mut self,
        party_id: u64,
        conditions: Vec<Condition>,
    ) -> Result<(), Error> {
        for condition in &conditions {
            assert!(
                !condition.classes.is_empty(),
                "set_conditions: empty class list"
            );
            assert!(condition.min_count >= 1, "set_conditions: zero min_count");
        }
        let party = self
            .party_mut(party_id)
            .ok_or(Error::PartyNotFound(party_id))?;
        party.conditions = conditions;
        Ok(())
    }

    pub fn party(&self, party_id: u64) -> Option<&Party> {
        self.parties.iter().find(|p| p.id == party_id)
    }

    pub fn party_mut(&mut self, party_id: u64) -> Option<&mut Party> {
        self.parties.iter_mut().find(|p| p.id == party_id)
    }

    // -----------------------------------------------------------------------
    // Membership (derived from slots, never stored)
    // -----------------------------------------------------------------------

    pub fn is_placed(&self, character_id: u64) -> bool {
        self.parties
            .iter()
            .any(|p| p.slot_of(character_id).is_some())
    }

    /// First placement of a character in party registry order.
    pub fn locate(&self, character_id: u64) -> Option<(u64, usize)> {
        self.parties
            .iter()
            .find_map(|p| p.slot_of(character_id).map(|slot| (p.id, slot)))
    }

    /// Every placement of a character. More than one entry can only occur
    /// through time-mode auto-assignment, where each entry's party carries a
    /// distinct time tag.
    pub fn locate_all(&self, character_id: u64) -> Vec<(u64, usize)> {
        self.parties
            .iter()
            .filter_map(|p| p.slot_of(character_id).map(|slot| (p.id, slot)))
            .collect()
    }

    /// Whether every character registered under the account is placed.
    pub fn is_fully_placed(&self, account: &str) -> bool {
        self.characters
            .iter()
            .filter(|c| c.account == account)
            .all(|c| self.is_placed(c.id))
    }

    /// Whether an account already occupies a slot of `party`, ignoring
    /// `exclude_slot` (the slot being vacated during a move or swap).
    ///
    /// Takes the party by value reference rather than by id so engine passes
    /// can run it against a scratch copy of the party list.
    pub fn account_in_party(
        &self,
        party: &Party,
        account: &str,
        exclude_slot: Option<usize>,
    ) -> bool {
        party.occupied().any(|(slot, id)| {
            Some(slot) != exclude_slot
                && self.character(id).is_some_and(|c| c.account == account)
        })
    }

    /// Count of occupied slots satisfying the condition's class set.
    pub fn condition_count(&self, party: &Party, condition: &Condition) -> u32 {
        party
            .occupied()
            .filter(|(_, id)| {
                self.character(*id)
                    .is_some_and(|c| condition.matches(c.class))
            })
            .count() as u32
    }

    pub fn is_condition_met(&self, party: &Party, condition: &Condition) -> bool {
        self.condition_count(party, condition) >= condition.min_count
    }

    /// Mean power of a party's occupants, 0.0 when empty.
    pub fn average_power(&self, party: &Party) -> f64 {
        let powers: Vec<f64> = party
            .occupied()
            .filter_map(|(_, id)| self.character(id).map(|c| c.power))
            .collect();
        if powers.is_empty() {
            return 0.0;
        }
        powers.iter().sum::<f64>() / powers.len() as f64
    }

    // -----------------------------------------------------------------------
    // Availability
    // -----------------------------------------------------------------------

    /// Replace an account's availability set. An empty set means the account
    /// is available at all times, same as never having been set.
    pub fn set_availability(
        &mut self,
        account: &str,
        slots: impl IntoIterator<Item = TimeSlot>,
    ) {
        self.availability
            .insert(account.to_string(), slots.into_iter().collect());
    }

    pub fn availability(&self, account: &str) -> Option<&BTreeSet<TimeSlot>> {
        self.availability.get(account)
    }

    pub fn is_available_at(&self, account: &str, slot: TimeSlot) -> bool {
        match self.availability.get(account) {
            Some(slots) => slots.is_empty() || slots.contains(&slot),
            None => true,
        }
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}
