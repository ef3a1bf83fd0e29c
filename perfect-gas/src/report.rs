//! Summary report generation
//!
//! Extracts temperature, volume and pressure from a [`ParameterSet`] and
//! renders the plain text report written to `output.txt`.

use crate::types::{
    ParameterSet, Result, SimulationError, PRESSURE_KEY, TEMPERATURE_KEY, VOLUME_KEY,
};
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Closing line of every report
pub const COMPLETION_LINE: &str = "Simulation completed successfully";

/// Values reported for one simulation run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasReport {
    /// Temperature in kelvin
    pub temperature_k: f64,
    /// Volume in cubic metres
    pub volume_m3: f64,
    /// Pressure in pascal
    pub pressure_pa: f64,
}

impl GasReport {
    /// Build a report, using `0.0` for any missing parameter
    pub fn from_parameters(params: &ParameterSet) -> Self {
        Self {
            temperature_k: lookup(params, TEMPERATURE_KEY),
            volume_m3: lookup(params, VOLUME_KEY),
            pressure_pa: lookup(params, PRESSURE_KEY),
        }
    }

    /// Render the full report text
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Write the report to `path`, replacing any existing content
    pub fn write_to(&self, path: &Path) -> Result<()> {
        log::info!("Writing report: {:?}", path);

        let output_error = |source| SimulationError::OutputAccess {
            path: path.to_path_buf(),
            source,
        };

        let file = File::create(path).map_err(output_error)?;
        let mut writer = BufWriter::new(file);
        write!(writer, "{}", self).map_err(output_error)?;
        writer.flush().map_err(output_error)?;

        Ok(())
    }
}

fn lookup(params: &ParameterSet, key: &str) -> f64 {
    if !params.contains(key) {
        log::info!("Parameter '{}' not found, reporting 0", key);
    }
    params.get_or(key, 0.0)
}

impl fmt::Display for GasReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Temperature: {:.2} K", self.temperature_k)?;
        writeln!(f, "Volume: {:.6} m³", self.volume_m3)?;
        writeln!(f, "Pressure: {:.2} Pa", self.pressure_pa)?;
        writeln!(f)?;
        writeln!(f, "{}", COMPLETION_LINE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn params(pairs: &[(&str, f64)]) -> ParameterSet {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_render_reference_values() {
        let report = GasReport::from_parameters(&params(&[
            ("T_kelvin", 300.5),
            ("V_m3", 0.0224),
            ("P_calculated", 101325.0),
        ]));

        assert_eq!(
            report.render(),
            "Temperature: 300.50 K\n\
             Volume: 0.022400 m³\n\
             Pressure: 101325.00 Pa\n\
             \n\
             Simulation completed successfully\n"
        );
    }

    #[test]
    fn test_missing_parameters_default_to_zero() {
        let report = GasReport::from_parameters(&ParameterSet::new());

        assert_eq!(report.temperature_k, 0.0);
        assert_eq!(report.volume_m3, 0.0);
        assert_eq!(report.pressure_pa, 0.0);

        let text = report.render();
        assert!(text.contains("Temperature: 0.00 K\n"));
        assert!(text.contains("Volume: 0.000000 m³\n"));
        assert!(text.contains("Pressure: 0.00 Pa\n"));
    }

    #[test]
    fn test_unrelated_parameters_ignored() {
        let report = GasReport::from_parameters(&params(&[
            ("T_celsius", 27.0),
            ("n_mol", 1.0),
            ("V_m3", 1.5),
        ]));

        assert_eq!(report.temperature_k, 0.0);
        assert_eq!(report.volume_m3, 1.5);
    }

    #[test]
    fn test_rounding() {
        let report = GasReport {
            temperature_k: 273.156,
            volume_m3: 0.12345678,
            pressure_pa: 99999.999,
        };
        let text = report.render();

        assert!(text.contains("Temperature: 273.16 K"));
        assert!(text.contains("Volume: 0.123457 m³"));
        assert!(text.contains("Pressure: 100000.00 Pa"));
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("output.txt");
        std::fs::write(&path, "stale content from a previous run\n".repeat(10)).unwrap();

        let report = GasReport {
            temperature_k: 1.0,
            volume_m3: 2.0,
            pressure_pa: 3.0,
        };
        report.write_to(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, report.render());
        assert_eq!(written.lines().count(), 5);
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no-such-dir").join("output.txt");

        let err = GasReport::from_parameters(&ParameterSet::new())
            .write_to(&path)
            .unwrap_err();
        assert!(matches!(err, SimulationError::OutputAccess { .. }));
    }
}
