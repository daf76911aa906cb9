use serde::{Deserialize, Serialize};

use crate::prelude::{SignalError, SignalResult};

/// Layout version the simulator accepts.
pub const DOCUMENT_VERSION: i32 = 0;

/// Schema of the BSON file a signal is stored in.
///
/// Field order matters on the wire: `ex` is written before `_version`, and the
/// version is a 32-bit integer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SignalDocument {
    /// Electric field value to inject on each time step.
    pub ex: Vec<f64>,
    #[serde(rename = "_version")]
    pub version: i32,
}

impl SignalDocument {
    pub fn new(ex: Vec<f64>) -> Self {
        Self {
            ex,
            version: DOCUMENT_VERSION,
        }
    }

    /// Value injected on simulation step `t`, or `None` once the signal has run out.
    pub fn sample_at(&self, t: u64) -> Option<f64> {
        usize::try_from(t)
            .ok()
            .and_then(|index| self.ex.get(index))
            .copied()
    }

    pub fn len(&self) -> usize {
        self.ex.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ex.is_empty()
    }

    pub(crate) fn validate(self) -> SignalResult<Self> {
        if self.version != DOCUMENT_VERSION {
            return Err(SignalError::UnsupportedVersion(self.version));
        }
        Ok(self)
    }
}
