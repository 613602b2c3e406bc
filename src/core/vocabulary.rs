/// Content vocabularies — the name and description pools generation draws from.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use crate::schema::location::LocationType;
use crate::schema::npc::Race;

const BUILTIN_VOCABULARY: &str = include_str!("../../world_data/vocabulary.ron");

const DEFAULT_START_NAME: &str = "Crossroads";
const DEFAULT_START_DESCRIPTION: &str = "A crossroads where every journey begins";

#[derive(Debug, Error)]
pub enum VocabularyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// Fixed name and description of the synthetic start location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartLocation {
    pub name: String,
    pub description: String,
}

/// Every pool generation draws from.
///
/// Map lookups are by key only; draw order never depends on map iteration,
/// which keeps generation deterministic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Vocabulary {
    #[serde(default)]
    pub start: Option<StartLocation>,
    #[serde(default)]
    pub location_names: Vec<String>,
    #[serde(default)]
    pub location_descriptions: HashMap<LocationType, Vec<String>>,
    #[serde(default)]
    pub race_names: HashMap<Race, Vec<String>>,
    #[serde(default)]
    pub race_descriptions: HashMap<Race, Vec<String>>,
    /// Race favoured for NPCs of a location type.
    #[serde(default)]
    pub primary_races: HashMap<LocationType, Race>,
}

impl Vocabulary {
    /// The vocabulary compiled into the library.
    pub fn builtin() -> Result<Vocabulary, VocabularyError> {
        Self::parse_ron(BUILTIN_VOCABULARY)
    }

    /// Load a vocabulary from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<Vocabulary, VocabularyError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    /// Parse a vocabulary from a RON string.
    pub fn parse_ron(input: &str) -> Result<Vocabulary, VocabularyError> {
        Ok(ron::from_str(input)?)
    }

    /// Merge another vocabulary into this one.
    ///
    /// Keyed pools and the primary-race table from `other` replace entries
    /// with the same key, location names are appended, and a start location
    /// in `other` replaces ours.
    pub fn merge(&mut self, other: Vocabulary) {
        if other.start.is_some() {
            self.start = other.start;
        }
        self.location_names.extend(other.location_names);
        self.location_descriptions.extend(other.location_descriptions);
        self.race_names.extend(other.race_names);
        self.race_descriptions.extend(other.race_descriptions);
        self.primary_races.extend(other.primary_races);
    }

    pub fn start_name(&self) -> &str {
        self.start
            .as_ref()
            .map(|s| s.name.as_str())
            .unwrap_or(DEFAULT_START_NAME)
    }

    pub fn start_description(&self) -> &str {
        self.start
            .as_ref()
            .map(|s| s.description.as_str())
            .unwrap_or(DEFAULT_START_DESCRIPTION)
    }

    /// Distinct location names available to satellites, in file order.
    /// The start location's name is excluded.
    pub fn name_pool(&self) -> Vec<String> {
        let mut seen = FxHashSet::default();
        seen.insert(self.start_name());
        let mut pool = Vec::new();
        for name in &self.location_names {
            if seen.insert(name.as_str()) {
                pool.push(name.clone());
            }
        }
        pool
    }

    pub fn location_descriptions(&self, location_type: LocationType) -> &[String] {
        self.location_descriptions
            .get(&location_type)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn race_names(&self, race: Race) -> &[String] {
        self.race_names.get(&race).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn race_descriptions(&self, race: Race) -> &[String] {
        self.race_descriptions
            .get(&race)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn primary_race(&self, location_type: LocationType) -> Option<Race> {
        self.primary_races.get(&location_type).copied()
    }
}
