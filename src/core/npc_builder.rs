/// NPC population — fills one location with a handful of residents.

use std::ops::RangeInclusive;
use std::sync::Arc;

use crate::core::random::RandomSource;
use crate::core::vocabulary::Vocabulary;
use crate::schema::location::{Location, LocationType};
use crate::schema::npc::{Npc, NpcId, Race};

/// Default chance, in percent, that an NPC takes its location's primary race.
pub const DEFAULT_PRIMARY_RACE_CHANCE: u32 = 80;
/// Default number of NPCs per location.
pub const DEFAULT_NPC_RANGE: RangeInclusive<usize> = 3..=5;
/// Upper bound on residents of one location; larger ranges are clamped.
pub const MAX_NPCS_PER_LOCATION: usize = 64;

const UNKNOWN_NAME: &str = "Nameless";

/// Generates NPCs for a location from the vocabulary's race pools.
#[derive(Debug, Clone)]
pub struct NpcBuilder {
    vocabulary: Arc<Vocabulary>,
    primary_race_chance: u32,
    npc_range: RangeInclusive<usize>,
}

impl NpcBuilder {
    pub fn new(vocabulary: Arc<Vocabulary>) -> Self {
        Self {
            vocabulary,
            primary_race_chance: DEFAULT_PRIMARY_RACE_CHANCE,
            npc_range: DEFAULT_NPC_RANGE,
        }
    }

    pub fn with_primary_race_chance(mut self, percent: u32) -> Self {
        self.primary_race_chance = percent;
        self
    }

    pub fn with_npc_range(mut self, range: RangeInclusive<usize>) -> Self {
        self.npc_range = range;
        self
    }

    /// Generate the residents of `location`.
    ///
    /// Each NPC id is appended to `location.npc_ids`; the returned NPCs are
    /// for the caller to store in the world.
    pub fn populate(&self, location: &mut Location, rng: &mut RandomSource) -> Vec<Npc> {
        let max = (*self.npc_range.end()).min(MAX_NPCS_PER_LOCATION);
        let min = (*self.npc_range.start()).min(max);
        let count = min + rng.next_int(max - min + 1);

        let mut npcs = Vec::with_capacity(count);
        for index in 1..=count {
            let npc = self.generate_single(location, index, rng);
            location.npc_ids.push(npc.id.clone());
            npcs.push(npc);
        }

        tracing::debug!(
            location = %location.id,
            location_type = %location.location_type,
            count,
            "populated location"
        );
        npcs
    }

    fn generate_single(&self, location: &Location, index: usize, rng: &mut RandomSource) -> Npc {
        let race = self.select_race(location.location_type, rng);
        let name = self.select_name(race, rng);
        let description = self.select_description(race, rng);

        Npc {
            id: NpcId::for_location(&location.id, index),
            name,
            race,
            location_id: location.id.clone(),
            description,
        }
    }

    /// Primary race with the configured chance, otherwise a uniform draw
    /// over all races. Types without a primary race always draw uniformly.
    pub fn select_race(&self, location_type: LocationType, rng: &mut RandomSource) -> Race {
        if let Some(primary) = self.vocabulary.primary_race(location_type) {
            if rng.percent() < self.primary_race_chance {
                return primary;
            }
        }
        Race::ALL[rng.next_int(Race::ALL.len())]
    }

    fn select_name(&self, race: Race, rng: &mut RandomSource) -> String {
        rng.pick(self.vocabulary.race_names(race))
            .cloned()
            .unwrap_or_else(|| UNKNOWN_NAME.to_string())
    }

    fn select_description(&self, race: Race, rng: &mut RandomSource) -> String {
        rng.pick(self.vocabulary.race_descriptions(race))
            .cloned()
            .unwrap_or_else(|| format!("A mysterious member of the {} race", race))
    }
}
