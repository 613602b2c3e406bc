use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

use super::direction::Direction;
use super::location::{Location, LocationId};
use super::npc::{Npc, NpcId};

/// The generated game map: every location and NPC, keyed by id.
///
/// A `World` is read-only once built. Entries are inserted only through a
/// [`WorldBuilder`] during generation, and cross links are plain ids so the
/// value stays flat and serializable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct World {
    name: String,
    seed: i64,
    locations: BTreeMap<LocationId, Location>,
    npcs: BTreeMap<NpcId, Npc>,
}

impl World {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The seed that produced this world. For worlds requested with seed
    /// zero this is the time-derived substitute, so it always reproduces.
    pub fn seed(&self) -> i64 {
        self.seed
    }

    pub fn location(&self, id: &LocationId) -> Option<&Location> {
        self.locations.get(id)
    }

    pub fn npc(&self, id: &NpcId) -> Option<&Npc> {
        self.npcs.get(id)
    }

    pub fn start_location(&self) -> Option<&Location> {
        self.locations.get(&LocationId::start())
    }

    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.values()
    }

    pub fn npcs(&self) -> impl Iterator<Item = &Npc> {
        self.npcs.values()
    }

    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    pub fn npc_count(&self) -> usize {
        self.npcs.len()
    }

    /// NPCs listed at a location, in the location's order. Unknown
    /// locations yield an empty list.
    pub fn npcs_in(&self, location_id: &LocationId) -> Vec<&Npc> {
        self.locations
            .get(location_id)
            .map(|loc| loc.npc_ids.iter().filter_map(|id| self.npcs.get(id)).collect())
            .unwrap_or_default()
    }

    /// Re-check the structural invariants of the world graph.
    ///
    /// A world produced by generation always returns an empty list.
    pub fn integrity_issues(&self) -> Vec<IntegrityIssue> {
        let mut issues = Vec::new();

        if self.start_location().is_none() {
            issues.push(IntegrityIssue::MissingStart);
        }

        let mut names: FxHashMap<&str, &LocationId> = FxHashMap::default();
        for location in self.locations.values() {
            if let Some(first) = names.insert(location.name.as_str(), &location.id) {
                issues.push(IntegrityIssue::DuplicateName {
                    name: location.name.clone(),
                    first: first.clone(),
                    second: location.id.clone(),
                });
            }

            for (&direction, target) in &location.exits {
                match self.locations.get(target) {
                    None => issues.push(IntegrityIssue::DanglingExit {
                        from: location.id.clone(),
                        direction,
                        to: target.clone(),
                    }),
                    Some(other) if other.exit(direction.reverse()) != Some(&location.id) => {
                        issues.push(IntegrityIssue::AsymmetricExit {
                            from: location.id.clone(),
                            direction,
                            to: target.clone(),
                        })
                    }
                    Some(_) => {}
                }
            }

            for npc_id in &location.npc_ids {
                if !self.npcs.contains_key(npc_id) {
                    issues.push(IntegrityIssue::UnknownResident {
                        location: location.id.clone(),
                        npc: npc_id.clone(),
                    });
                }
            }
        }

        for npc in self.npcs.values() {
            let listed = self
                .locations
                .get(&npc.location_id)
                .is_some_and(|loc| loc.npc_ids.contains(&npc.id));
            if !listed {
                issues.push(IntegrityIssue::UnlistedNpc {
                    npc: npc.id.clone(),
                    location: npc.location_id.clone(),
                });
            }
        }

        issues
    }
}

/// A violated world invariant, as reported by [`World::integrity_issues`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntegrityIssue {
    #[error("world has no start location")]
    MissingStart,
    #[error("locations '{first}' and '{second}' share the name '{name}'")]
    DuplicateName {
        name: String,
        first: LocationId,
        second: LocationId,
    },
    #[error("exit {direction} of '{from}' targets missing location '{to}'")]
    DanglingExit {
        from: LocationId,
        direction: Direction,
        to: LocationId,
    },
    #[error("exit {direction} of '{from}' to '{to}' has no way back")]
    AsymmetricExit {
        from: LocationId,
        direction: Direction,
        to: LocationId,
    },
    #[error("location '{location}' lists unknown npc '{npc}'")]
    UnknownResident { location: LocationId, npc: NpcId },
    #[error("npc '{npc}' is not listed at its location '{location}'")]
    UnlistedNpc { npc: NpcId, location: LocationId },
}

/// Write access to a [`World`] under construction.
///
/// Only generation code holds one; [`WorldBuilder::build`] hands back the
/// read-only aggregate.
#[derive(Debug)]
pub struct WorldBuilder {
    world: World,
}

impl WorldBuilder {
    pub fn new(name: impl Into<String>, seed: i64) -> Self {
        Self {
            world: World {
                name: name.into(),
                seed,
                locations: BTreeMap::new(),
                npcs: BTreeMap::new(),
            },
        }
    }

    pub fn insert_location(&mut self, location: Location) {
        self.world.locations.insert(location.id.clone(), location);
    }

    pub fn insert_npc(&mut self, npc: Npc) {
        self.world.npcs.insert(npc.id.clone(), npc);
    }

    pub fn extend_npcs(&mut self, npcs: impl IntoIterator<Item = Npc>) {
        for npc in npcs {
            self.insert_npc(npc);
        }
    }

    pub fn location_count(&self) -> usize {
        self.world.locations.len()
    }

    pub fn build(self) -> World {
        self.world
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::location::LocationType;
    use crate::schema::npc::Race;

    fn npc_at(location: &mut Location, index: usize) -> Npc {
        let id = NpcId::for_location(&location.id, index);
        location.npc_ids.push(id.clone());
        Npc {
            id,
            name: "Torin".to_string(),
            race: Race::Dwarf,
            location_id: location.id.clone(),
            description: "A stout dwarf".to_string(),
        }
    }

    fn two_room_world() -> World {
        let mut builder = WorldBuilder::new("Test", 7);
        let mut start = Location::new(LocationId::start(), "Crossroads", "", LocationType::Start);
        let mut peak = Location::new(LocationId::new("location_1"), "Rocky Cliff", "", LocationType::Mountain);
        start.link(Direction::North, &mut peak);
        let npc = npc_at(&mut peak, 1);
        builder.insert_location(start);
        builder.insert_location(peak);
        builder.insert_npc(npc);
        builder.build()
    }

    #[test]
    fn builder_produces_readable_world() {
        let world = two_room_world();
        assert_eq!(world.name(), "Test");
        assert_eq!(world.seed(), 7);
        assert_eq!(world.location_count(), 2);
        assert_eq!(world.npc_count(), 1);
        assert_eq!(world.start_location().map(|l| l.name.as_str()), Some("Crossroads"));
    }

    #[test]
    fn npcs_in_resolves_ids() {
        let world = two_room_world();
        let npcs = world.npcs_in(&LocationId::new("location_1"));
        assert_eq!(npcs.len(), 1);
        assert_eq!(npcs[0].name, "Torin");
        assert!(world.npcs_in(&LocationId::new("nowhere")).is_empty());
    }

    #[test]
    fn consistent_world_has_no_issues() {
        assert!(two_room_world().integrity_issues().is_empty());
    }

    #[test]
    fn detects_one_way_and_dangling_exits() {
        let mut builder = WorldBuilder::new("Broken", 1);
        let mut start = Location::new(LocationId::start(), "Crossroads", "", LocationType::Start);
        let cave = Location::new(LocationId::new("location_1"), "Old Cave", "", LocationType::Cave);
        start.exits.insert(Direction::East, cave.id.clone());
        start.exits.insert(Direction::West, LocationId::new("location_9"));
        builder.insert_location(start);
        builder.insert_location(cave);

        let issues = builder.build().integrity_issues();
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().any(|i| matches!(i, IntegrityIssue::AsymmetricExit { direction: Direction::East, .. })));
        assert!(issues.iter().any(|i| matches!(i, IntegrityIssue::DanglingExit { direction: Direction::West, .. })));
    }

    #[test]
    fn detects_duplicate_names_and_unlisted_npcs() {
        let mut builder = WorldBuilder::new("Broken", 1);
        let start = Location::new(LocationId::start(), "Crossroads", "", LocationType::Start);
        let twin = Location::new(LocationId::new("location_1"), "Crossroads", "", LocationType::Forest);
        builder.insert_location(start);
        builder.insert_location(twin);
        builder.insert_npc(Npc {
            id: NpcId::new("start_npc_1"),
            name: "Arthur".to_string(),
            race: Race::Human,
            location_id: LocationId::start(),
            description: String::new(),
        });

        let issues = builder.build().integrity_issues();
        assert!(issues.iter().any(|i| matches!(i, IntegrityIssue::DuplicateName { name, .. } if name == "Crossroads")));
        assert!(issues.iter().any(|i| matches!(i, IntegrityIssue::UnlistedNpc { .. })));
    }

    #[test]
    fn empty_world_misses_start() {
        let issues = WorldBuilder::new("Empty", 1).build().integrity_issues();
        assert_eq!(issues, vec![IntegrityIssue::MissingStart]);
    }
}
