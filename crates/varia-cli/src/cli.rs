//! CLI configuration and settings management

use crate::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Settings shared by the demo commands, loaded from an optional JSON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// Ambient temperature used by `bulb` when none is given on the command
    /// line.
    pub ambient_temperature: f64,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            ambient_temperature: 77.0,
        }
    }
}

impl CliConfig {
    /// Load from `path`, or fall back to defaults when no file is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = fs::read_to_string(path)?;
        serde_json::from_str(&raw).map_err(|e| CliError::Config(format!("{}: {}", path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_path_falls_back_to_defaults() {
        let config = CliConfig::load(None).expect("defaults should always load");
        assert_eq!(config.ambient_temperature, 77.0);
    }
}
