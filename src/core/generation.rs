/// World generation entry point: (name, seed) → World orchestration.
///
/// Configuration problems are rejected once, when the service is built, so
/// generating a world afterwards cannot fail.

use std::ops::RangeInclusive;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

use crate::core::location_builder::LocationBuilder;
use crate::core::npc_builder::{
    NpcBuilder, DEFAULT_NPC_RANGE, DEFAULT_PRIMARY_RACE_CHANCE, MAX_NPCS_PER_LOCATION,
};
use crate::core::random::RandomSource;
use crate::core::vocabulary::{Vocabulary, VocabularyError};
use crate::schema::location::LocationType;
use crate::schema::npc::Race;
use crate::schema::world::{World, WorldBuilder};

/// Satellite locations generated around the start by default.
pub const DEFAULT_SATELLITE_COUNT: usize = 3;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("vocabulary error: {0}")]
    Vocabulary(#[from] VocabularyError),
    #[error("name pool has {available} unique names but {requested} satellites were requested")]
    NamePoolTooSmall { available: usize, requested: usize },
    #[error("no location names available for {requested} satellites")]
    EmptyPool { requested: usize },
    #[error("invalid NPC range {min}..={max} (at most {MAX_NPCS_PER_LOCATION} per location)")]
    InvalidNpcRange { min: usize, max: usize },
    #[error("primary race chance must be at most 100, got {0}")]
    InvalidChance(u32),
}

/// Generates worlds from a validated configuration.
#[derive(Debug, Clone)]
pub struct WorldGenerationService {
    location_builder: LocationBuilder,
    satellite_count: usize,
}

/// Builder for constructing a `WorldGenerationService`.
pub struct WorldGenerationServiceBuilder {
    satellite_count: usize,
    populate_start: bool,
    primary_race_chance: u32,
    npc_range: RangeInclusive<usize>,
    vocabulary_paths: Vec<String>,
    /// Directly provided vocabulary (for testing without files).
    vocabulary: Option<Vocabulary>,
}

impl WorldGenerationService {
    pub fn builder() -> WorldGenerationServiceBuilder {
        WorldGenerationServiceBuilder {
            satellite_count: DEFAULT_SATELLITE_COUNT,
            populate_start: true,
            primary_race_chance: DEFAULT_PRIMARY_RACE_CHANCE,
            npc_range: DEFAULT_NPC_RANGE,
            vocabulary_paths: Vec::new(),
            vocabulary: None,
        }
    }

    pub fn satellite_count(&self) -> usize {
        self.satellite_count
    }

    /// Generate a world.
    ///
    /// Any non-zero seed reproduces the same world for the same
    /// configuration. Seed zero draws a time-based seed; the world records
    /// it in [`World::seed`].
    pub fn generate_world(&self, name: &str, seed: i64) -> World {
        let mut rng = RandomSource::from_seed(seed);
        let mut world = WorldBuilder::new(name, rng.seed());

        self.location_builder
            .generate(&mut world, &mut rng, self.satellite_count);

        let world = world.build();
        tracing::info!(
            world = %world.name(),
            seed = world.seed(),
            locations = world.location_count(),
            npcs = world.npc_count(),
            "generated world"
        );
        world
    }
}

impl WorldGenerationServiceBuilder {
    pub fn satellite_count(mut self, count: usize) -> Self {
        self.satellite_count = count;
        self
    }

    pub fn populate_start(mut self, populate: bool) -> Self {
        self.populate_start = populate;
        self
    }

    pub fn primary_race_chance(mut self, percent: u32) -> Self {
        self.primary_race_chance = percent;
        self
    }

    pub fn npc_range(mut self, range: RangeInclusive<usize>) -> Self {
        self.npc_range = range;
        self
    }

    /// Merge a vocabulary file over the base vocabulary. Later files win.
    pub fn vocabulary_file(mut self, path: &str) -> Self {
        self.vocabulary_paths.push(path.to_string());
        self
    }

    /// Use this vocabulary as the base instead of the built-in one.
    pub fn with_vocabulary(mut self, vocabulary: Vocabulary) -> Self {
        self.vocabulary = Some(vocabulary);
        self
    }

    pub fn build(self) -> Result<WorldGenerationService, ConfigError> {
        let mut vocabulary = match self.vocabulary {
            Some(vocabulary) => vocabulary,
            None => Vocabulary::builtin()?,
        };
        for path in &self.vocabulary_paths {
            vocabulary.merge(Vocabulary::load_from_ron(Path::new(path))?);
        }

        let (min, max) = (*self.npc_range.start(), *self.npc_range.end());
        if min > max || max > MAX_NPCS_PER_LOCATION {
            return Err(ConfigError::InvalidNpcRange { min, max });
        }
        if self.primary_race_chance > 100 {
            return Err(ConfigError::InvalidChance(self.primary_race_chance));
        }

        let available = vocabulary.name_pool().len();
        if available == 0 && self.satellite_count > 0 {
            return Err(ConfigError::EmptyPool {
                requested: self.satellite_count,
            });
        }
        if available < self.satellite_count {
            return Err(ConfigError::NamePoolTooSmall {
                available,
                requested: self.satellite_count,
            });
        }

        for location_type in LocationType::GENERATED {
            if vocabulary.location_descriptions(location_type).is_empty() {
                tracing::warn!(%location_type, "no descriptions, placeholder text will be used");
            }
        }
        for race in Race::ALL {
            if vocabulary.race_names(race).is_empty() {
                tracing::warn!(%race, "no names, placeholder name will be used");
            }
        }

        let vocabulary = Arc::new(vocabulary);
        let npc_builder = NpcBuilder::new(vocabulary.clone())
            .with_primary_race_chance(self.primary_race_chance)
            .with_npc_range(self.npc_range);
        let location_builder =
            LocationBuilder::new(vocabulary, npc_builder).with_populate_start(self.populate_start);

        Ok(WorldGenerationService {
            location_builder,
            satellite_count: self.satellite_count,
        })
    }
}
