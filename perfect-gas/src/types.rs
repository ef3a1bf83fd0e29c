//! Core types for the perfect gas simulation
//!
//! This module defines the parameter set produced by the parser and the error
//! type shared by every stage of a simulation run.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::num::ParseFloatError;
use std::path::PathBuf;

/// Result type for simulation operations
pub type Result<T> = std::result::Result<T, SimulationError>;

/// Parameter key holding the temperature in kelvin
pub const TEMPERATURE_KEY: &str = "T_kelvin";

/// Parameter key holding the volume in cubic metres
pub const VOLUME_KEY: &str = "V_m3";

/// Parameter key holding the pressure in pascal
pub const PRESSURE_KEY: &str = "P_calculated";

/// Numeric parameters read from an input file
///
/// Keys are unique. Inserting an existing key replaces its value, so the last
/// occurrence in the input file wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterSet {
    values: HashMap<String, f64>,
}

impl ParameterSet {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning the value it replaced (if any)
    pub fn insert(&mut self, key: impl Into<String>, value: f64) -> Option<f64> {
        self.values.insert(key.into(), value)
    }

    /// Look up a parameter by name
    pub fn get(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    /// Look up a parameter, falling back to `default` when it is absent
    pub fn get_or(&self, key: &str, default: f64) -> f64 {
        self.get(key).unwrap_or(default)
    }

    /// True if the parameter was defined
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of distinct parameters
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if no parameter was defined
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(name, value)` pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl FromIterator<(String, f64)> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        let mut set = ParameterSet::new();
        for (key, value) in iter {
            set.insert(key, value);
        }
        set
    }
}

/// Errors that abort a simulation run
#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    #[error("Failed to read input file {path:?}")]
    InputAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid number {value:?} for parameter '{key}' on line {line}")]
    InvalidNumber {
        /// 1-based line number in the input
        line: usize,
        key: String,
        value: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("Failed to write output file {path:?}")]
    OutputAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
