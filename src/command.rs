//! Detect command: runs a scan and writes the result line.
use std::{io::Write, process::ExitCode};

use crate::{
    cli::Args, detector::DotNetDetector, error::DetectError, output,
    reporter::Reporter, result::Result,
};

/// How the run ended, mapped onto the process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Detected,
    NotDetected,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Detected => ExitCode::SUCCESS,
            Outcome::NotDetected => ExitCode::FAILURE,
        }
    }
}

/// Scan the directory named in `args` and write the result line to `out`
/// when a project is detected. Nothing is written otherwise.
pub fn execute(
    args: &Args,
    reporter: &dyn Reporter,
    out: &mut dyn Write,
) -> Result<Outcome> {
    let Some(source_path) = &args.source_path else {
        reporter.warn(&DetectError::MissingSourcePath.to_string());
        return Ok(Outcome::NotDetected);
    };

    let detector = DotNetDetector::new(args.detect_options(), reporter);
    let detection = detector.detect(source_path)?;

    if !detection.detected {
        return Ok(Outcome::NotDetected);
    }

    let line = output::render(&detection.config, args.format)?;
    writeln!(out, "{line}")?;

    Ok(Outcome::Detected)
}
