use clap::Parser;
use log::debug;
use std::path::{Path, PathBuf};
use workflow::config::SimulationConfig;
use workflow::runner;

mod report;
mod workflow;

/// File the signal document is written to when no `--output` is given.
const DEFAULT_DOCUMENT_NAME: &str = "1d_signal.bson";

#[derive(Parser)]
#[command(author, version, about = "Generates the 1D simulator's example signal document")]
struct Args {
    /// Write the signal document here instead of next to the generator
    #[arg(long)]
    output: Option<PathBuf>,
    /// Print a JSON summary of an existing signal document and exit
    #[arg(long, conflicts_with_all = ["output", "check"])]
    inspect: Option<PathBuf>,
    /// Verify the signal documents referenced by a simulation config and exit
    #[arg(long, conflicts_with = "output")]
    check: Option<PathBuf>,
}

fn default_output() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_DOCUMENT_NAME)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    if let Some(path) = args.inspect {
        let summary = runner::inspect(&path)?;
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    if let Some(path) = args.check {
        let config = SimulationConfig::load(&path)?;
        debug!("checking {} signals from {}", config.signals.len(), path.display());
        for check in runner::check(&config)? {
            println!("{}", check.line());
        }
        return Ok(());
    }

    let output = args.output.unwrap_or_else(default_output);
    let samples = runner::generate(&output)?;
    println!("Wrote {} samples to {}", samples, output.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_sits_next_to_generator() {
        let output = default_output();
        assert_eq!(output.file_name().unwrap(), DEFAULT_DOCUMENT_NAME);
        assert_eq!(output.parent().unwrap(), Path::new(env!("CARGO_MANIFEST_DIR")));
    }

    #[test]
    fn no_arguments_means_generate() {
        let args = Args::try_parse_from(["signalgen"]).unwrap();
        assert!(args.output.is_none());
        assert!(args.inspect.is_none());
        assert!(args.check.is_none());
    }

    #[test]
    fn inspect_conflicts_with_output() {
        assert!(Args::try_parse_from(["signalgen", "--inspect", "a", "--output", "b"]).is_err());
    }
}
