use clap::Parser;
use std::{io, process::ExitCode};

use coreapp_detect::{
    cli::Args, command, reporter::LogReporter, result::Result,
};

// Log output goes to stderr; stdout only carries the result line.
fn initialize_logger(debug: bool) -> Result<()> {
    let filter = if debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    let config = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("coreapp_detect")
        .build();

    simplelog::TermLogger::init(
        filter,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    let args = Args::parse();

    initialize_logger(args.debug)?;

    let reporter = LogReporter::new();
    let mut stdout = io::stdout().lock();

    let outcome = command::execute(&args, &reporter, &mut stdout)?;

    Ok(outcome.into())
}
