use clap::Args;
use tracing::debug;
use varia_core::Lightbulb;

use crate::cli::CliConfig;
use crate::{CliError, Result};

/// Arguments for `varia bulb`.
#[derive(Debug, Args)]
pub struct BulbArgs {
    /// Ambient temperature; falls back to the configured default
    #[arg(long)]
    pub ambient: Option<f64>,
}

/// Report a lit bulb's surface temperature, toggle it, and report again.
pub fn bulb_command(args: &BulbArgs, config: &CliConfig) -> Result<String> {
    let ambient = args.ambient.unwrap_or(config.ambient_temperature);
    if !ambient.is_finite() {
        return Err(CliError::InvalidInput(format!(
            "ambient temperature must be finite, got {ambient}"
        )));
    }

    let mut bulb = Lightbulb::On;
    debug!(lit = bulb.is_on(), ambient, "initial bulb state");

    let before = bulb.surface_temperature(ambient);
    bulb.toggle();
    let after = bulb.surface_temperature(ambient);

    Ok(format!(
        "the bulb's temperature is {before}\nthe bulb's temperature is {after}"
    ))
}
