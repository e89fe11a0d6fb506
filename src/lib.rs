//! Detection of .NET Core projects for container image generation.
//!
//! Given a source directory, finds the `*.csproj` project file, checks its
//! target framework and reads the HTTP ports declared for the project in
//! `launchSettings.json`.
pub mod cli;
pub mod command;
pub mod detector;
pub mod error;
pub mod launch;
pub mod output;
pub mod ports;
pub mod project;
pub mod reporter;
pub mod result;
pub mod scanner;

#[cfg(test)]
pub mod test_helpers;
