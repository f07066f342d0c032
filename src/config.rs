//! Stitching configuration, loadable from a JSON file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PanoramaError, Result};
use crate::export::EncodeOptions;
use crate::synth::SynthOptions;

/// Combined synthesis and output settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StitchConfig {
    pub synth: SynthOptions,
    pub encode: EncodeOptions,
}

impl StitchConfig {
    /// Reads a config from JSON. Missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| PanoramaError::Config(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| PanoramaError::Config(e.to_string()))
    }
}
