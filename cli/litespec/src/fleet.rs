//! Fleet file parsing.
//!
//! A fleet file is TOML with one `[[observation]]` table per observed
//! vehicle:
//!
//! ```toml
//! [[observation]]
//! name = "sedan"
//! wheels = 4
//! engine = true
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// A single observed vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Observation {
    /// Display name; a blank name is replaced by the position in the file.
    #[serde(default)]
    pub name: String,
    /// Number of wheels seen.
    pub wheels: u32,
    /// Whether an engine was seen.
    #[serde(default)]
    pub engine: bool,
}

/// The parsed contents of a fleet file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Fleet {
    #[serde(default, rename = "observation")]
    pub observations: Vec<Observation>,
}

impl Fleet {
    /// Read and parse a fleet file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let fleet = Self::parse(&content).with_context(|| format!("parsing {}", path.display()))?;
        tracing::debug!(
            path = %path.display(),
            observations = fleet.observations.len(),
            "loaded fleet"
        );
        Ok(fleet)
    }

    /// Parse a fleet from a TOML string.
    ///
    /// Unnamed observations are named after their 1-based position.
    pub fn parse(s: &str) -> Result<Self> {
        let mut fleet: Fleet = toml::from_str(s)?;
        for (i, observation) in fleet.observations.iter_mut().enumerate() {
            if observation.name.trim().is_empty() {
                observation.name = format!("#{}", i + 1);
            }
        }
        Ok(fleet)
    }
}
