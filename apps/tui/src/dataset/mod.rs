pub mod builtin;
pub mod models;

pub use models::{parse_hex_color, Cloud, Cost, Performance, Scalability, System};

use crate::domain::Category;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("dataset defines no systems")]
    Empty,

    #[error("system defined more than once: {0}")]
    DuplicateSystem(String),

    #[error("{system}: {category} score {score} is outside 0..=100")]
    ScoreOutOfRange {
        system: String,
        category: &'static str,
        score: u8,
    },

    #[error("{system}: invalid colour {value:?}, expected #RRGGBB")]
    InvalidColor { system: String, value: String },
}

/// Immutable collection of compared systems, in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    systems: Vec<System>,
}

impl Dataset {
    /// The storage comparison compiled into the binary
    pub fn builtin() -> Self {
        Self {
            systems: builtin::systems(),
        }
    }

    pub fn new(systems: Vec<System>) -> Result<Self, DatasetError> {
        let dataset = Self { systems };
        dataset.validate()?;
        Ok(dataset)
    }

    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        let dataset: Self = serde_json::from_str(json)?;
        dataset.validate()?;
        Ok(dataset)
    }

    pub fn to_json_pretty(&self) -> Result<String, DatasetError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), DatasetError> {
        if self.systems.is_empty() {
            return Err(DatasetError::Empty);
        }

        let mut seen = HashSet::new();
        for system in &self.systems {
            if !seen.insert(system.name.as_str()) {
                return Err(DatasetError::DuplicateSystem(system.name.clone()));
            }

            for value in [&system.color, &system.accent] {
                if parse_hex_color(value).is_none() {
                    return Err(DatasetError::InvalidColor {
                        system: system.name.clone(),
                        value: value.clone(),
                    });
                }
            }

            for category in Category::ALL {
                let score = system.score(category);
                if score > 100 {
                    return Err(DatasetError::ScoreOutOfRange {
                        system: system.name.clone(),
                        category: category.as_str(),
                        score,
                    });
                }
            }
        }

        Ok(())
    }

    pub fn systems(&self) -> &[System] {
        &self.systems
    }

    pub fn get(&self, name: &str) -> Option<&System> {
        self.systems.iter().find(|system| system.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> Vec<String> {
        self.systems.iter().map(|system| system.name.clone()).collect()
    }
}
