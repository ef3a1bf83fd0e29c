//! Simulation configuration types
//!
//! The binary always runs with the default locations. Library callers (and
//! tests) can point the parser and reporter somewhere else.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default input file, relative to the working directory
pub const DEFAULT_INPUT: &str = "input.txt";

/// Default report file, relative to the working directory
pub const DEFAULT_OUTPUT: &str = "output.txt";

/// File locations used by a simulation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Parameter file to parse
    #[serde(default = "default_input")]
    pub input: PathBuf,

    /// Report file to create (overwritten if it exists)
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

fn default_input() -> PathBuf {
    PathBuf::from(DEFAULT_INPUT)
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
        }
    }
}

impl SimulationConfig {
    /// Create a configuration using `input.txt` and `output.txt`
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the input file
    pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = input.into();
        self
    }

    /// Builder method: set the output file
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }
}
