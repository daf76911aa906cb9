//! Signal generation and signal documents for the 1D FDTD simulator.
//!
//! `waveform` builds the Gaussian-enveloped carrier that the simulator injects
//! into its electric field, and `document` persists it as the versioned BSON
//! record the simulator loads at startup.

pub mod document;
pub mod math;
pub mod prelude;
pub mod waveform;

pub use document::{read_document, write_document, SignalDocument};
pub use prelude::{SignalError, SignalResult};
pub use waveform::generate_signal;
