use std::{fs::File, io::BufReader, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// The affiliation whose share orders the blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Affiliation {
    /// Score by the favorable count.
    #[default]
    Primary,
    /// Score by population minus the favorable count.
    Complement,
}

/// Whether a rebalancing move must touch the receiving district.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReceiverPolicy {
    /// The receiver must be empty or adjacent to the moved block.
    #[default]
    Contiguous,
    /// Only the donor side is checked.
    Unchecked,
}

/// Parameters of a districting run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    pub num_districts: usize,
    pub affiliation: Affiliation,
    /// Upper bound on rebalancing sweeps.
    pub max_sweeps: usize,
    pub receiver_policy: ReceiverPolicy,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            num_districts: 1,
            affiliation: Affiliation::Primary,
            max_sweeps: 100,
            receiver_policy: ReceiverPolicy::Contiguous,
        }
    }
}

impl Params {
    /// Default parameters for a given number of districts.
    pub fn new(num_districts: usize) -> Self {
        Self { num_districts, ..Self::default() }
    }

    /// Read parameters from a JSON file; missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("[redistrict::params] Failed to open params file: {}", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("[redistrict::params] Failed to parse params from {:?}", path))
    }

    /// Reject parameters the algorithm cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.num_districts == 0 {
            return Err(InputError::invalid("num_districts must be at least 1").into())
        }
        if self.max_sweeps == 0 {
            return Err(InputError::invalid("max_sweeps must be at least 1").into())
        }
        Ok(())
    }
}
