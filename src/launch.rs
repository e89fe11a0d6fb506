//! `launchSettings.json` parsing.
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

use crate::error::Result;

/// File name of the launch settings written by `dotnet new`.
pub const LAUNCH_SETTINGS_FILE: &str = "launchSettings.json";

/// Extension of the files searched for launch settings.
pub const JSON_EXT: &str = ".json";

const APPLICATION_URL: &str = "applicationUrl";

/// The parts of a launch settings document that are read.
///
/// Profiles are kept as raw JSON values: `dotnet` tooling writes many
/// shapes of profile, and only `applicationUrl` is of interest.
#[derive(Debug, Default, Deserialize)]
pub struct LaunchSettings {
    #[serde(default)]
    pub profiles: Option<HashMap<String, Value>>,
}

impl LaunchSettings {
    /// Parse a launch settings document, ignoring a leading byte order mark.
    pub fn parse(content: &str) -> Result<Self> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        Ok(serde_json::from_str(content)?)
    }

    /// URLs declared by the profile named `profile`.
    ///
    /// A missing profile, a profile that is not an object, and an
    /// `applicationUrl` that is missing or not a string all yield `None`.
    pub fn application_urls(&self, profile: &str) -> Option<Vec<&str>> {
        let urls = self
            .profiles
            .as_ref()?
            .get(profile)?
            .as_object()?
            .get(APPLICATION_URL)?
            .as_str()?;

        Some(urls.split(';').collect())
    }
}
