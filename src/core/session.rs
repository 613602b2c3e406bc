/// Game session — one read-only world plus the player's position in it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::schema::direction::Direction;
use crate::schema::location::{Location, LocationId};
use crate::schema::npc::{Npc, NpcId, Player};
use crate::schema::world::World;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("current location '{0}' does not exist")]
    LocationNotFound(LocationId),
    #[error("cannot go {0} from here")]
    NoExit(Direction),
    #[error("location '{0}' does not exist")]
    MissingTarget(LocationId),
}

/// Display projection of the current location, for front ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationInfo {
    pub id: LocationId,
    pub name: String,
    pub description: String,
    pub exits: Vec<Direction>,
    pub npcs: Vec<NpcInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NpcInfo {
    pub id: NpcId,
    pub name: String,
    pub race: String,
    pub description: String,
}

impl From<&Npc> for NpcInfo {
    fn from(npc: &Npc) -> Self {
        Self {
            id: npc.id.clone(),
            name: npc.name.clone(),
            race: npc.race.name().to_string(),
            description: npc.description.clone(),
        }
    }
}

/// Holds a generated world and the only mutable state on top of it: the
/// current location.
#[derive(Debug, Clone)]
pub struct GameSession {
    world: World,
    current_location: LocationId,
    player: Option<Player>,
}

impl GameSession {
    /// Start a session at the world's start location.
    pub fn new(world: World) -> Self {
        Self {
            world,
            current_location: LocationId::start(),
            player: None,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn current_location_id(&self) -> &LocationId {
        &self.current_location
    }

    pub fn current_location(&self) -> Option<&Location> {
        self.world.location(&self.current_location)
    }

    pub fn current_location_info(&self) -> Result<LocationInfo, SessionError> {
        let location = self
            .current_location()
            .ok_or_else(|| SessionError::LocationNotFound(self.current_location.clone()))?;

        Ok(LocationInfo {
            id: location.id.clone(),
            name: location.name.clone(),
            description: location.description.clone(),
            exits: location.exits.keys().copied().collect(),
            npcs: self
                .world
                .npcs_in(&location.id)
                .into_iter()
                .map(NpcInfo::from)
                .collect(),
        })
    }

    /// Follow the exit in `direction`.
    ///
    /// The position only changes once the target is known to exist; on
    /// error the session is untouched.
    pub fn move_player(&mut self, direction: Direction) -> Result<&Location, SessionError> {
        let current = self
            .world
            .location(&self.current_location)
            .ok_or_else(|| SessionError::LocationNotFound(self.current_location.clone()))?;
        let target_id = current
            .exit(direction)
            .ok_or(SessionError::NoExit(direction))?;
        let target = self
            .world
            .location(target_id)
            .ok_or_else(|| SessionError::MissingTarget(target_id.clone()))?;

        tracing::debug!(from = %current.id, to = %target.id, %direction, "player moved");
        self.current_location = target.id.clone();
        Ok(target)
    }

    /// Ids of the NPCs at a location; empty for unknown locations.
    pub fn npcs_in_location(&self, location_id: &LocationId) -> &[NpcId] {
        self.world
            .location(location_id)
            .map(|loc| loc.npc_ids.as_slice())
            .unwrap_or(&[])
    }

    /// Create the player character, replacing any previous one.
    pub fn create_player(&mut self, name: &str) -> &Player {
        self.player.insert(Player::new(name))
    }

    pub fn player(&self) -> Option<&Player> {
        self.player.as_ref()
    }
}
