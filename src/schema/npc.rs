use serde::{Deserialize, Serialize};
use std::fmt;

use super::location::LocationId;

/// Newtype wrapper for NPC IDs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NpcId(pub String);

impl NpcId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Id of the `index`-th (1-based) NPC generated for `location`.
    pub fn for_location(location: &LocationId, index: usize) -> Self {
        Self(format!("{}_npc_{}", location, index))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NpcId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Race {
    Human,
    Dwarf,
    Skaven,
}

impl Race {
    pub const ALL: [Race; 3] = [Race::Human, Race::Dwarf, Race::Skaven];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Human => "human",
            Self::Dwarf => "dwarf",
            Self::Skaven => "skaven",
        }
    }
}

impl fmt::Display for Race {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A non-player character bound to exactly one location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Npc {
    pub id: NpcId,
    pub name: String,
    pub race: Race,
    pub location_id: LocationId,
    pub description: String,
}

/// The player character. Its position is tracked by the session, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub race: Race,
    pub description: String,
    pub level: u32,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: format!("player_{}", name),
            name,
            race: Race::Human,
            description: "This is you, the hero of this story".to_string(),
            level: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn npc_id_format() {
        let id = NpcId::for_location(&LocationId::new("location_2"), 3);
        assert_eq!(id.as_str(), "location_2_npc_3");
    }

    #[test]
    fn race_names() {
        let names: Vec<&str> = Race::ALL.iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["human", "dwarf", "skaven"]);
    }

    #[test]
    fn new_player_defaults() {
        let player = Player::new("Aria");
        assert_eq!(player.id, "player_Aria");
        assert_eq!(player.race, Race::Human);
        assert_eq!(player.level, 1);
    }
}
