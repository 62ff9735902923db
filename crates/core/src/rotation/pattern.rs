//! Rotation pattern lookup table
//!
//! A pattern is a `(cycle_length, working_offsets)` pair. Patterns are
//! resolved by name through [`PatternRegistry`] so new rotations can be added
//! from configuration without touching any caller.

use std::collections::{BTreeSet, HashMap};

use plantao_domain::constants::{PATTERN_12X36, PATTERN_24X48, PATTERN_24X72};
use plantao_domain::{PatternDefinition, PlantaoError, Result, RosterConfig};

/// Work on the offsets in `working_offsets`, rest on the others, repeat
/// every `cycle_length` days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationPattern {
    cycle_length: u32,
    working_offsets: BTreeSet<u32>,
}

impl RotationPattern {
    /// Build a pattern.
    ///
    /// Offset 0 must be a working offset: the anchor date is by definition
    /// the first shift.
    ///
    /// # Errors
    /// Returns `PlantaoError::Validation` when the cycle is empty, an offset
    /// falls outside the cycle, or offset 0 is missing.
    pub fn new(cycle_length: u32, working_offsets: impl IntoIterator<Item = u32>) -> Result<Self> {
        if cycle_length == 0 {
            return Err(PlantaoError::Validation("cycle_length must be at least 1".to_string()));
        }

        let working_offsets: BTreeSet<u32> = working_offsets.into_iter().collect();
        if let Some(bad) = working_offsets.iter().find(|offset| **offset >= cycle_length) {
            return Err(PlantaoError::Validation(format!(
                "working offset {bad} outside cycle of {cycle_length} days"
            )));
        }
        if !working_offsets.contains(&0) {
            return Err(PlantaoError::Validation(
                "working offsets must include offset 0".to_string(),
            ));
        }

        Ok(Self { cycle_length, working_offsets })
    }

    /// One working day followed by `rest_days` off.
    pub fn single_shift(rest_days: u32) -> Self {
        Self { cycle_length: rest_days + 1, working_offsets: BTreeSet::from([0]) }
    }

    pub fn cycle_length(&self) -> u32 {
        self.cycle_length
    }

    pub fn working_offsets(&self) -> impl Iterator<Item = u32> + '_ {
        self.working_offsets.iter().copied()
    }

    pub fn is_working_offset(&self, cycle_day: u32) -> bool {
        self.working_offsets.contains(&cycle_day)
    }
}

impl TryFrom<&PatternDefinition> for RotationPattern {
    type Error = PlantaoError;

    fn try_from(definition: &PatternDefinition) -> Result<Self> {
        Self::new(definition.cycle_length, definition.working_offsets.iter().copied()).map_err(
            |err| match err {
                PlantaoError::Validation(msg) => {
                    PlantaoError::Validation(format!("pattern '{}': {msg}", definition.name))
                }
                other => other,
            },
        )
    }
}

/// Name -> pattern table. Names are matched case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternRegistry {
    patterns: HashMap<String, RotationPattern>,
}

impl PatternRegistry {
    /// Registry with no patterns at all.
    pub fn empty() -> Self {
        Self { patterns: HashMap::new() }
    }

    /// Built-in rotations: `24x72`, `24x48` and `12x36`.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry.register(PATTERN_24X72, RotationPattern::single_shift(3));
        registry.register(PATTERN_24X48, RotationPattern::single_shift(2));
        registry.register(PATTERN_12X36, RotationPattern::single_shift(1));
        registry
    }

    /// Built-ins plus the patterns declared in configuration.
    ///
    /// # Errors
    /// Returns `PlantaoError::Validation` for the first invalid definition.
    pub fn from_config(config: &RosterConfig) -> Result<Self> {
        let mut registry = Self::builtin();
        for definition in &config.patterns {
            let pattern = RotationPattern::try_from(definition)?;
            registry.register(&definition.name, pattern);
        }
        Ok(registry)
    }

    /// Add or replace a pattern.
    pub fn register(&mut self, name: &str, pattern: RotationPattern) {
        self.patterns.insert(normalize(name), pattern);
    }

    pub fn get(&self, name: &str) -> Option<&RotationPattern> {
        self.patterns.get(&normalize(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.patterns.contains_key(&normalize(name))
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.patterns.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for PatternRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}
