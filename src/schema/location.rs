use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::direction::Direction;
use super::npc::NpcId;

/// Newtype wrapper for location IDs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationId(pub String);

impl LocationId {
    /// Reserved id of the synthetic start location.
    pub const START: &'static str = "start";

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn start() -> Self {
        Self(Self::START.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The kind of place a location is. Drives description and NPC race choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LocationType {
    /// Synthetic type of the start location; never drawn at random.
    Start,
    Forest,
    Cave,
    Village,
    Ruins,
    Swamp,
    Mountain,
}

impl LocationType {
    /// Types drawn for generated satellite locations, in draw order.
    pub const GENERATED: [LocationType; 6] = [
        LocationType::Forest,
        LocationType::Cave,
        LocationType::Village,
        LocationType::Ruins,
        LocationType::Swamp,
        LocationType::Mountain,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Forest => "forest",
            Self::Cave => "cave",
            Self::Village => "village",
            Self::Ruins => "ruins",
            Self::Swamp => "swamp",
            Self::Mountain => "mountain",
        }
    }
}

impl fmt::Display for LocationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A node of the world graph.
///
/// Links to neighbours and residents are plain ids; resolve them through
/// the owning [`World`](super::world::World).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    pub description: String,
    pub location_type: LocationType,
    pub exits: BTreeMap<Direction, LocationId>,
    pub npc_ids: Vec<NpcId>,
}

impl Location {
    pub fn new(
        id: LocationId,
        name: impl Into<String>,
        description: impl Into<String>,
        location_type: LocationType,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            location_type,
            exits: BTreeMap::new(),
            npc_ids: Vec::new(),
        }
    }

    /// Target of the exit in `direction`, if any.
    pub fn exit(&self, direction: Direction) -> Option<&LocationId> {
        self.exits.get(&direction)
    }

    /// Connect `self` to `other` through `direction`, and `other` back
    /// through the reverse direction.
    pub fn link(&mut self, direction: Direction, other: &mut Location) {
        self.exits.insert(direction, other.id.clone());
        other.exits.insert(direction.reverse(), self.id.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_id_is_reserved() {
        assert_eq!(LocationId::start().as_str(), "start");
        assert_eq!(LocationId::start().to_string(), LocationId::START);
    }

    #[test]
    fn generated_types_exclude_start() {
        assert_eq!(LocationType::GENERATED.len(), 6);
        assert!(!LocationType::GENERATED.contains(&LocationType::Start));
    }

    #[test]
    fn link_sets_both_exits() {
        let mut start = Location::new(LocationId::start(), "Crossroads", "", LocationType::Start);
        let mut cave = Location::new(LocationId::new("location_1"), "Old Cave", "", LocationType::Cave);

        start.link(Direction::Northeast, &mut cave);

        assert_eq!(start.exit(Direction::Northeast), Some(&cave.id));
        assert_eq!(cave.exit(Direction::Southwest), Some(&start.id));
        assert_eq!(start.exits.len(), 1);
        assert_eq!(cave.exits.len(), 1);
    }

    #[test]
    fn missing_exit_is_none() {
        let start = Location::new(LocationId::start(), "Crossroads", "", LocationType::Start);
        assert!(start.exit(Direction::West).is_none());
    }
}
