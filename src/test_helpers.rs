//! Common test helper functions shared across test modules.
//!
//! Fixture writers for project trees and a reporter that tolerates debug
//! output but fails the test on any warning.
use std::{fs, path::Path};

use crate::reporter::MockReporter;

/// Writes a minimal SDK-style project file targeting `framework`.
///
/// # Example
/// ```ignore
/// write_csproj(root, "src/Api/Api.csproj", "net5.0");
/// ```
pub fn write_csproj(root: &Path, rel_path: &str, framework: &str) {
    let content = format!(
        r#"<Project Sdk="Microsoft.NET.Sdk.Web">

  <PropertyGroup>
    <TargetFramework>{framework}</TargetFramework>
  </PropertyGroup>

</Project>
"#
    );
    write_file(root, rel_path, &content);
}

/// Writes a launch settings file with a single profile.
pub fn write_launch_settings(
    root: &Path,
    rel_path: &str,
    profile: &str,
    application_url: &str,
) {
    let content = format!(
        r#"{{
  "profiles": {{
    "{profile}": {{
      "commandName": "Project",
      "launchBrowser": true,
      "applicationUrl": "{application_url}",
      "environmentVariables": {{
        "ASPNETCORE_ENVIRONMENT": "Development"
      }}
    }}
  }}
}}"#
    );
    write_file(root, rel_path, &content);
}

/// Writes `content` to `root/rel_path`, creating parent directories.
pub fn write_file(root: &Path, rel_path: &str, content: &str) {
    let path = root.join(rel_path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// A reporter that accepts debug lines and rejects warnings.
pub fn quiet_reporter() -> MockReporter {
    let mut reporter = MockReporter::new();
    reporter.expect_warn().never();
    reporter.expect_debug().return_const(());
    reporter
}
