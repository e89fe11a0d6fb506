//! CLI argument parsing.
use clap::Parser;
use std::path::PathBuf;

use crate::{
    detector::{DOTNET_CORE_5, DetectOptions, SelectionPolicy},
    output::OutputFormat,
    ports::PortExtraction,
};

/// Detects a .NET Core project in a source directory and prints its
/// project file, app name and HTTP ports.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Directory to scan.
    pub source_path: Option<PathBuf>,

    #[arg(long, default_value = DOTNET_CORE_5)]
    /// Target framework a project must declare to be detected.
    pub target_framework: String,

    #[arg(long, value_enum, default_value_t = SelectionPolicy::Last)]
    /// Project file to use when several are found.
    pub select: SelectionPolicy,

    #[arg(long, value_enum, default_value_t = OutputFormat::Legacy)]
    /// Format of the result line.
    pub format: OutputFormat,

    #[arg(long, default_value_t = false)]
    /// Read ports as the first number in each URL instead of parsing it.
    pub legacy_ports: bool,

    #[arg(long, default_value_t = false)]
    /// Enable debug logging.
    pub debug: bool,
}

impl Args {
    /// Detector settings selected on the command line.
    pub fn detect_options(&self) -> DetectOptions {
        let port_extraction = if self.legacy_ports {
            PortExtraction::FirstDigits
        } else {
            PortExtraction::Authority
        };

        DetectOptions {
            target_framework: self.target_framework.clone(),
            selection: self.select,
            port_extraction,
        }
    }
}
