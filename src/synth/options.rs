//! Panorama synthesis options.

use serde::{Deserialize, Serialize};

use super::SampleFilter;

/// Options for [`synthesize_with`](super::synthesize_with).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthOptions {
    /// Texel filter used when reading face images.
    pub filter: SampleFilter,
    /// Worker threads for the row loop. If None, uses rayon's global pool.
    pub threads: Option<usize>,
}

impl SynthOptions {
    pub fn with_filter(filter: SampleFilter) -> Self {
        Self {
            filter,
            ..Default::default()
        }
    }
}
