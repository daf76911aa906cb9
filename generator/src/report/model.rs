use serde::{Deserialize, Serialize};
use signalcore::math::StatsHelper;
use signalcore::SignalDocument;
use std::path::Path;

/// Printable summary of a signal document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SignalSummary {
    pub path: String,
    pub version: i32,
    pub samples: usize,
    pub peak_index: Option<usize>,
    pub peak: Option<f64>,
    pub rms: f64,
}

impl SignalSummary {
    pub fn from_document(path: &Path, document: &SignalDocument) -> Self {
        let peak = StatsHelper::peak(&document.ex);
        Self {
            path: path.display().to_string(),
            version: document.version,
            samples: document.len(),
            peak_index: peak.map(|(index, _)| index),
            peak: peak.map(|(_, value)| value),
            rms: StatsHelper::rms(&document.ex),
        }
    }
}

/// Outcome of checking one signal referenced by a simulation config.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SignalCheck {
    pub path: String,
    pub location: usize,
    pub samples: usize,
    pub injected_steps: u64,
    pub truncated: bool,
}

impl SignalCheck {
    pub fn line(&self) -> String {
        let mut line = format!(
            "{} @ cell {} -> {} samples, {} injected steps",
            self.path, self.location, self.samples, self.injected_steps
        );
        if self.truncated {
            line.push_str(" (truncated)");
        }
        line
    }
}
