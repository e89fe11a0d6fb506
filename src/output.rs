//! Rendering of a successful detection for the calling pipeline.
use clap::ValueEnum;
use serde::Serialize;

use crate::{detector::ConfigInfo, error::Result, ports::Port};

/// Output format of the result line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The line consumed by the Dockerfile generator. Strings are written
    /// unescaped.
    #[default]
    Legacy,
    /// Escaped JSON, including the https port
    Json,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Report<'a> {
    csproj_path: &'a str,
    ports: &'a [Port],
    http_port: Port,
    https_port: Port,
    app_name: &'a str,
}

/// Render `config` as a single line without a trailing newline.
pub fn render(config: &ConfigInfo, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Legacy => Ok(render_legacy(config)),
        OutputFormat::Json => {
            let report = Report {
                csproj_path: &config.path,
                ports: &config.ports,
                http_port: config.http_port,
                https_port: config.https_port,
                app_name: &config.app_name,
            };
            Ok(serde_json::to_string(&report)?)
        }
    }
}

fn render_legacy(config: &ConfigInfo) -> String {
    let ports = config
        .ports
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<String>>()
        .join(",");

    format!(
        r#"{{"csprojPath":  "{}", "ports": [{}], "httpPort": {}, "appName": "{}"}}"#,
        config.path, ports, config.http_port, config.app_name
    )
}
