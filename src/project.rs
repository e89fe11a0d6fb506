//! .NET project descriptor (`*.csproj`) parsing.
use quick_xml::{Reader, events::Event};
use std::{fs, path::Path};

use crate::{
    error::{DetectError, Result},
    reporter::Reporter,
    scanner,
};

/// Extension of the project descriptor files searched for.
pub const CSPROJ_EXT: &str = ".csproj";

const PROJECT: &[u8] = b"Project";
const PROPERTY_GROUP: &[u8] = b"PropertyGroup";
const TARGET_FRAMEWORK: &[u8] = b"TargetFramework";

/// A single project descriptor found in the scanned tree.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProjectDescriptor {
    /// Target framework, empty when missing or unreadable
    pub version: String,
    /// Descriptor path relative to the scanned root
    pub path: String,
    /// Descriptor file name without its extension
    pub app_name: String,
}

impl ProjectDescriptor {
    /// Load the descriptor at `file`. Read and parse failures are reported
    /// at debug level and leave `version` empty; `path` and `app_name` are
    /// always derived from the file name.
    pub fn load(root: &Path, file: &Path, reporter: &dyn Reporter) -> Self {
        let version = match fs::read_to_string(file) {
            Ok(content) => match target_framework(&content) {
                Ok(version) => version,
                Err(e) => {
                    reporter.debug(&format!(
                        "Failed to parse {}: {e}",
                        file.display()
                    ));
                    String::new()
                }
            },
            Err(e) => {
                reporter.debug(&format!(
                    "Failed to read {}: {e}",
                    file.display()
                ));
                String::new()
            }
        };

        Self {
            version,
            path: scanner::relative_path(root, file),
            app_name: scanner::file_stem(file),
        }
    }
}

/// Extract `Project > PropertyGroup > TargetFramework` from a descriptor.
///
/// Only a direct child of a top-level `PropertyGroup` counts, and the last
/// one in document order wins. Returns an empty string when the project has
/// no target framework.
pub fn target_framework(content: &str) -> Result<String> {
    let mut reader = Reader::from_str(content);

    let mut version = String::new();
    let mut text = String::new();
    let mut depth = 0;
    let mut in_property_group = false;
    let mut in_target_framework = false;

    loop {
        match reader.read_event()? {
            Event::Start(ref e) => {
                depth += 1;
                let name = e.local_name();
                if depth == 1 && name.as_ref() != PROJECT {
                    return Err(DetectError::invalid_descriptor(format!(
                        "root element is {:?}",
                        String::from_utf8_lossy(name.as_ref())
                    )));
                }
                if depth == 2 && name.as_ref() == PROPERTY_GROUP {
                    in_property_group = true;
                }
                if depth == 3
                    && in_property_group
                    && name.as_ref() == TARGET_FRAMEWORK
                {
                    in_target_framework = true;
                    text.clear();
                }
            }
            Event::Empty(ref e) => {
                let name = e.local_name();
                if depth == 0 && name.as_ref() != PROJECT {
                    return Err(DetectError::invalid_descriptor(format!(
                        "root element is {:?}",
                        String::from_utf8_lossy(name.as_ref())
                    )));
                }
                if depth == 2
                    && in_property_group
                    && name.as_ref() == TARGET_FRAMEWORK
                {
                    version.clear();
                }
            }
            Event::Text(ref e) => {
                if in_target_framework {
                    text.push_str(&e.unescape()?);
                }
            }
            Event::CData(ref e) => {
                if in_target_framework {
                    text.push_str(&String::from_utf8_lossy(e));
                }
            }
            Event::End(_) => {
                if depth == 3 && in_target_framework {
                    in_target_framework = false;
                    version = std::mem::take(&mut text);
                }
                if depth == 2 {
                    in_property_group = false;
                }
                depth -= 1;
            }
            Event::Eof => {
                if depth > 0 {
                    return Err(DetectError::invalid_descriptor(
                        "unexpected end of document",
                    ));
                }
                break;
            }
            _ => {}
        }
    }

    Ok(version)
}
