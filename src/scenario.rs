use crate::engine;
use crate::model::{ClassName, Condition, Roster, TimeSlot};

/// Builder for test rosters. Panics on any setup failure so fixtures stay
/// terse; production callers use the fallible [`Roster`] API directly.
pub struct Scenario {
    roster: Roster,
}

/// Typed reference to a party in a [`Scenario`], enabling chained setup.
///
/// Created by [`Scenario::party`]. Call [`.id()`](PartyRef::id) to terminate
/// the chain and extract the party ID.
pub struct PartyRef<'a> {
    scenario: &'a mut Scenario,
    id: u64,
}

impl<'a> PartyRef<'a> {
    /// Append a quota condition.
    pub fn condition(self, classes: impl Into<Vec<ClassName>>, min_count: u32) -> Self {
        let party = self.scenario.roster.party(self.id).expect("live party");
        let mut conditions = party.conditions.clone();
        conditions.push(Condition::new(classes, min_count));
        self.scenario
            .roster
            .set_conditions(self.id, conditions)
            .expect("live party");
        self
    }

    /// Tag the party with an hour.
    pub fn time_slot(self, hour: u8) -> Self {
        self.scenario
            .roster
            .party_mut(self.id)
            .expect("live party")
            .time_slot = Some(TimeSlot::new(hour));
        self
    }

    /// Terminate the chain and return the party ID.
    pub fn id(self) -> u64 {
        self.id
    }
}

impl Scenario {
    pub fn new() -> Self {
        Self {
            roster: Roster::new(),
        }
    }

    pub fn with_party_size(party_size: usize) -> Self {
        Self {
            roster: Roster::with_party_size(party_size),
        }
    }

    /// Register a character, panicking on a duplicate.
    pub fn add_character(
        &mut self,
        account: &str,
        name: &str,
        class: ClassName,
        power: f64,
    ) -> u64 {
        self.roster
            .register(account, name, class, power)
            .expect("scenario character is unique")
            .id
    }

    /// Create a party and return a chainable reference to it.
    pub fn party(&mut self, name: &str) -> PartyRef<'_> {
        let id = self.roster.create_party(name);
        PartyRef { scenario: self, id }
    }

    /// Create a plain party and return its ID.
    pub fn add_party(&mut self, name: &str) -> u64 {
        self.roster.create_party(name)
    }

    /// Restrict an account to the given hours.
    pub fn set_available(&mut self, account: &str, hours: impl IntoIterator<Item = u8>) {
        self.roster
            .set_availability(account, hours.into_iter().map(TimeSlot::new));
    }

    /// Place a character, panicking on any conflict.
    pub fn place(&mut self, party_id: u64, slot_index: usize, character_id: u64) -> &mut Self {
        engine::place(&mut self.roster, party_id, slot_index, character_id)
            .expect("scenario placement is conflict-free");
        self
    }

    pub fn build(self) -> Roster {
        self.roster
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Self::new()
    }
}
