use anyhow::{ensure, Context};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// A signal source placed in the simulated universe.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SignalSource {
    /// Cell the signal is injected into.
    pub location: usize,
    /// BSON signal document to read.
    pub path: PathBuf,
}

/// The part of a 1D simulation config that refers to signal documents.
///
/// Keys this tool has no use for, such as `oscilloscopes`, are ignored.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SimulationConfig {
    pub dimensions: u8,
    pub size: u64,
    pub time: u64,
    #[serde(default)]
    pub signals: Vec<SignalSource>,
}

impl SimulationConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading simulation config {}", path_ref.display()))?;
        let config: SimulationConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing simulation config {}", path_ref.display()))?;
        ensure!(
            config.dimensions == 1,
            "only 1-dimensional simulations are supported, got {}",
            config.dimensions
        );
        Ok(config)
    }
}
