pub mod direction;
pub mod location;
pub mod npc;
pub mod world;
