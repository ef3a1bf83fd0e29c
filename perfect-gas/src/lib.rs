//! Perfect Gas Simulation Library
//!
//! Reads a `key=value` parameter file describing a simulated ideal gas and
//! writes a plain text summary of its temperature, volume and pressure.
//!
//! # Architecture
//!
//! A run is two sequential steps:
//! - the parser turns the input file into a [`ParameterSet`]
//! - the reporter extracts the three reported values into a [`GasReport`]
//!   and writes it to the output file
//!
//! The output file is only created once parsing has succeeded, so a run that
//! fails on its input leaves an existing report untouched.
//!
//! The library does NOT check physical consistency of the values (e.g.
//! PV=nRT). Negative temperatures or zero volumes are reported as given.
//!
//! # Example Usage
//!
//! ```no_run
//! use perfect_gas::{run, SimulationConfig};
//!
//! let config = SimulationConfig::new()
//!     .with_input("case1/input.txt")
//!     .with_output("case1/output.txt");
//!
//! let report = run(&config).unwrap();
//! println!("T = {} K", report.temperature_k);
//! ```

// Public modules
pub mod config;
pub mod parser;
pub mod report;
pub mod types;

// Re-export main types for convenience
pub use config::SimulationConfig;
pub use parser::{parse_file, parse_reader, parse_str};
pub use report::GasReport;
pub use types::{
    ParameterSet, Result, SimulationError, PRESSURE_KEY, TEMPERATURE_KEY, VOLUME_KEY,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parse the configured input file and write its report
pub fn run(config: &SimulationConfig) -> Result<GasReport> {
    let params = parse_file(&config.input)?;

    if log::log_enabled!(log::Level::Debug) {
        match serde_json::to_string(&params) {
            Ok(json) => log::debug!("Parameters: {}", json),
            Err(e) => log::debug!("Parameters not serializable: {}", e),
        }
    }

    let report = GasReport::from_parameters(&params);
    report.write_to(&config.output)?;

    log::debug!("Report written:\n{}", report);
    Ok(report)
}
