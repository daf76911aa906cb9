pub struct StatsHelper;

impl StatsHelper {
    pub fn rms(samples: &[f64]) -> f64 {
        if samples.is_empty() {
            return 0.0;
        }
        let sum_sq: f64 = samples.iter().map(|&v| v * v).sum();
        (sum_sq / samples.len() as f64).sqrt()
    }

    /// Index and value of the sample with the largest magnitude.
    pub fn peak(samples: &[f64]) -> Option<(usize, f64)> {
        samples
            .iter()
            .copied()
            .enumerate()
            .fold(None, |best, (index, value)| match best {
                Some((_, current)) if f64::abs(current) >= value.abs() => best,
                _ => Some((index, value)),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rms_zero_sequence_yields_zero() {
        assert_eq!(StatsHelper::rms(&[]), 0.0);
        assert_eq!(StatsHelper::rms(&[0.0, 0.0]), 0.0);
    }

    #[test]
    fn rms_handles_single_value() {
        assert_eq!(StatsHelper::rms(&[4.0]), 4.0);
    }

    #[test]
    fn peak_picks_largest_magnitude() {
        assert_eq!(StatsHelper::peak(&[0.5, -2.0, 1.5]), Some((1, -2.0)));
        assert_eq!(StatsHelper::peak(&[]), None);
    }

    #[test]
    fn peak_keeps_first_of_equal_magnitudes() {
        assert_eq!(StatsHelper::peak(&[1.0, -1.0]), Some((0, 1.0)));
    }
}
