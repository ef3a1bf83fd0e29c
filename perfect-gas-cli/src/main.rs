//! Perfect Gas Simulation CLI
//!
//! Reads `input.txt` from the working directory, writes the summary report to
//! `output.txt` and prints `Simulation complete`.
//!
//! No command-line arguments are read. Set `RUST_LOG` (e.g. `RUST_LOG=debug`)
//! to see diagnostics on stderr.

use anyhow::{Context, Result};
use perfect_gas::SimulationConfig;

fn main() -> Result<()> {
    init_logging();

    log::info!("Perfect gas simulation v{}", perfect_gas::VERSION);

    let config = SimulationConfig::default();
    perfect_gas::run(&config).with_context(|| {
        format!(
            "Simulation failed (input {:?}, output {:?})",
            config.input, config.output
        )
    })?;

    println!("Simulation complete");
    Ok(())
}

/// Initialize logging from `RUST_LOG`, warnings only by default
fn init_logging() {
    use env_logger::{Builder, Env};
    use std::io::Write;

    Builder::from_env(Env::default().default_filter_or("warn"))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
