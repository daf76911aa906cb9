pub mod envelope;

pub use envelope::{
    carrier, envelope, generate_signal, sample, CARRIER_DIVISOR, ENVELOPE_CENTER, ENVELOPE_SCALE,
    SIGNAL_LENGTH,
};
