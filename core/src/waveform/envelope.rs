//! Gaussian-enveloped sinusoid injected by the 1D simulator.

use log::debug;

/// Number of samples in a generated signal, one per simulation time step.
pub const SIGNAL_LENGTH: usize = 4092;
/// Index at which the envelope peaks.
pub const ENVELOPE_CENTER: f64 = 2048.0;
/// Standard deviation of the envelope, in samples.
pub const ENVELOPE_SCALE: f64 = 512.0;
/// The carrier advances `1 / CARRIER_DIVISOR` radians per sample.
pub const CARRIER_DIVISOR: f64 = 100.0;

/// Gaussian amplitude at index `t`; exactly 1.0 at [`ENVELOPE_CENTER`].
pub fn envelope(t: f64) -> f64 {
    let offset = (ENVELOPE_CENTER - t) / ENVELOPE_SCALE;
    (-0.5 * offset * offset).exp()
}

pub fn carrier(t: f64) -> f64 {
    (t / CARRIER_DIVISOR).sin()
}

pub fn sample(t: usize) -> f64 {
    let t = t as f64;
    envelope(t) * carrier(t)
}

/// Builds the full signal, one sample per index in `[0, SIGNAL_LENGTH)`.
pub fn generate_signal() -> Vec<f64> {
    let signal: Vec<f64> = (0..SIGNAL_LENGTH).map(sample).collect();
    debug!("generated signal with {} samples", signal.len());
    signal
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference(t: usize) -> f64 {
        let t = t as f64;
        (-0.5 * ((2048.0 - t) / 512.0).powf(2.0)).exp() * (t / 100.0).sin()
    }

    #[test]
    fn signal_has_fixed_length() {
        assert_eq!(generate_signal().len(), 4092);
    }

    #[test]
    fn every_sample_matches_closed_form() {
        let signal = generate_signal();
        for (t, value) in signal.iter().enumerate() {
            let expected = reference(t);
            let tolerance = 1e-9 * expected.abs().max(1e-300);
            assert!(
                (value - expected).abs() <= tolerance,
                "sample {t}: {value} != {expected}"
            );
        }
    }

    #[test]
    fn envelope_peaks_at_center() {
        assert_eq!(envelope(ENVELOPE_CENTER), 1.0);
        let signal = generate_signal();
        assert_eq!(signal[2048], (20.48_f64).sin());
    }

    #[test]
    fn envelope_is_symmetric_and_small_at_edges() {
        assert!((envelope(2048.0 - 512.0) - envelope(2048.0 + 512.0)).abs() < 1e-15);
        assert!(envelope(0.0) < 1e-3);
        assert!(envelope(4091.0) < 1e-3);
    }

    #[test]
    fn generation_is_deterministic() {
        assert_eq!(generate_signal(), generate_signal());
    }

    #[test]
    fn first_sample_is_zero() {
        assert_eq!(generate_signal()[0], 0.0);
    }
}
