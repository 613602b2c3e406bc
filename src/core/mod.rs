pub mod generation;
pub mod location_builder;
pub mod npc_builder;
pub mod random;
pub mod session;
pub mod vocabulary;
