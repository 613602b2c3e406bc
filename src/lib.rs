//! Adventure Forge — seeded procedural worlds for small text adventures.
//!
//! Builds a graph of named locations joined by symmetric compass exits,
//! populates each with a few NPCs drawn from weighted race pools, and hands
//! the result to a game session as a read-only snapshot.

pub mod core;
pub mod schema;

pub use crate::core::generation::{ConfigError, WorldGenerationService};
pub use crate::core::session::{GameSession, LocationInfo, NpcInfo, SessionError};
pub use crate::schema::direction::Direction;
pub use crate::schema::world::World;
