/// Location graph construction — a start node ringed by satellites.

use std::sync::Arc;

use crate::core::npc_builder::NpcBuilder;
use crate::core::random::RandomSource;
use crate::core::vocabulary::Vocabulary;
use crate::schema::direction::Direction;
use crate::schema::location::{Location, LocationId, LocationType};
use crate::schema::world::WorldBuilder;

/// Builds the location graph and has every location populated.
#[derive(Debug, Clone)]
pub struct LocationBuilder {
    vocabulary: Arc<Vocabulary>,
    name_pool: Vec<String>,
    npc_builder: NpcBuilder,
    populate_start: bool,
}

impl LocationBuilder {
    pub fn new(vocabulary: Arc<Vocabulary>, npc_builder: NpcBuilder) -> Self {
        let name_pool = vocabulary.name_pool();
        Self {
            vocabulary,
            name_pool,
            npc_builder,
            populate_start: true,
        }
    }

    /// Whether the start location gets NPCs too. On by default.
    pub fn with_populate_start(mut self, populate_start: bool) -> Self {
        self.populate_start = populate_start;
        self
    }

    /// The most satellites one run can name uniquely.
    pub fn name_capacity(&self) -> usize {
        self.name_pool.len()
    }

    /// Id of the `index`-th (0-based) satellite.
    pub fn satellite_id(index: usize) -> LocationId {
        LocationId(format!("location_{}", index + 1))
    }

    /// Generate the start location plus `count` satellites into `world`.
    ///
    /// Satellite `i` hangs off the start through `Direction::ORDER[i]`; past
    /// the eighth there is no direction left and the satellite stays
    /// unconnected. Names are dealt from a shuffled copy of the pool, so a
    /// run never repeats a name and always terminates. Asking for more
    /// satellites than [`name_capacity`](Self::name_capacity) yields only
    /// that many.
    pub fn generate(&self, world: &mut WorldBuilder, rng: &mut RandomSource, count: usize) {
        let mut start = self.build_start();
        if self.populate_start {
            let npcs = self.npc_builder.populate(&mut start, rng);
            world.extend_npcs(npcs);
        }

        let mut deal: Vec<usize> = (0..self.name_pool.len()).collect();
        rng.shuffle(&mut deal);

        if count > deal.len() {
            tracing::warn!(
                requested = count,
                available = deal.len(),
                "name pool too small, generating fewer satellites"
            );
        }

        for (i, &name_index) in deal.iter().take(count).enumerate() {
            let mut location = self.build_satellite(i, &self.name_pool[name_index], rng);

            match Direction::ORDER.get(i) {
                Some(&direction) => start.link(direction, &mut location),
                None => tracing::warn!(
                    location = %location.id,
                    "no direction left, satellite is unreachable"
                ),
            }

            let npcs = self.npc_builder.populate(&mut location, rng);
            tracing::debug!(
                location = %location.id,
                name = %location.name,
                location_type = %location.location_type,
                "generated location"
            );
            world.insert_location(location);
            world.extend_npcs(npcs);
        }

        world.insert_location(start);
    }

    fn build_start(&self) -> Location {
        Location::new(
            LocationId::start(),
            self.vocabulary.start_name(),
            self.vocabulary.start_description(),
            LocationType::Start,
        )
    }

    fn build_satellite(&self, index: usize, name: &str, rng: &mut RandomSource) -> Location {
        let location_type = LocationType::GENERATED[rng.next_int(LocationType::GENERATED.len())];
        let description = rng
            .pick(self.vocabulary.location_descriptions(location_type))
            .cloned()
            .unwrap_or_else(|| format!("A mysterious place of the {} kind", location_type));

        Location::new(Self::satellite_id(index), name, description, location_type)
    }
}
