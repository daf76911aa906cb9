use crate::report::model::{SignalCheck, SignalSummary};
use crate::workflow::config::SimulationConfig;
use anyhow::{ensure, Context};
use log::warn;
use signalcore::{generate_signal, read_document, write_document};
use std::path::Path;

/// Generates the signal and writes its document to `output`.
pub fn generate(output: &Path) -> anyhow::Result<usize> {
    let signal = generate_signal();
    write_document(&signal, output)
        .with_context(|| format!("writing signal document {}", output.display()))?;
    Ok(signal.len())
}

pub fn inspect(path: &Path) -> anyhow::Result<SignalSummary> {
    let document = read_document(path)
        .with_context(|| format!("reading signal document {}", path.display()))?;
    Ok(SignalSummary::from_document(path, &document))
}

/// Verifies every signal a simulation config refers to can be loaded and injected.
pub fn check(config: &SimulationConfig) -> anyhow::Result<Vec<SignalCheck>> {
    let mut checks = Vec::with_capacity(config.signals.len());
    for source in &config.signals {
        ensure!(
            (source.location as u64) < config.size,
            "signal {} is located at cell {}, outside a universe of {} cells",
            source.path.display(),
            source.location,
            config.size
        );
        let document = read_document(&source.path)
            .with_context(|| format!("reading signal document {}", source.path.display()))?;

        let samples = document.len();
        let injected_steps = (samples as u64).min(config.time);
        let truncated = samples as u64 > config.time;
        if truncated {
            warn!(
                "signal {} has {} samples but the simulation only runs {} steps",
                source.path.display(),
                samples,
                config.time
            );
        }

        checks.push(SignalCheck {
            path: source.path.display().to_string(),
            location: source.location,
            samples,
            injected_steps,
            truncated,
        });
    }
    Ok(checks)
}
