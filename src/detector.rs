//! .NET Core project detection.
//!
//! Scans a source tree for `*.csproj` descriptors, decides whether the
//! selected descriptor targets the wanted framework and, when it does,
//! collects the HTTP ports declared for the project in every
//! `launchSettings.json` of the tree.
use clap::ValueEnum;
use std::{
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
};

use crate::{
    error::{DetectError, Result},
    launch::{JSON_EXT, LAUNCH_SETTINGS_FILE, LaunchSettings},
    ports::{self, Port, PortExtraction, Scheme},
    project::{CSPROJ_EXT, ProjectDescriptor},
    reporter::Reporter,
    scanner,
};

/// Target framework recognised by default.
pub const DOTNET_CORE_5: &str = "net5.0";

/// Accumulated detection result for one scan.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigInfo {
    /// Target framework of the selected descriptor
    pub version: String,
    /// Selected descriptor path relative to the scanned root
    pub path: String,
    /// Selected descriptor file name without extension
    pub app_name: String,
    /// HTTP port recorded for each launch profile matched
    pub ports: Vec<Port>,
    pub http_port: Port,
    pub https_port: Port,
}

/// Which descriptor to use when a tree contains more than one.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SelectionPolicy {
    /// First descriptor in walk order
    First,
    /// Last descriptor in walk order
    #[default]
    Last,
    /// Fail unless there is at most one descriptor
    Unique,
}

impl SelectionPolicy {
    pub fn select<'d>(
        &self,
        descriptors: &'d [ProjectDescriptor],
    ) -> Result<Option<&'d ProjectDescriptor>> {
        match self {
            SelectionPolicy::First => Ok(descriptors.first()),
            SelectionPolicy::Last => Ok(descriptors.last()),
            SelectionPolicy::Unique => {
                if descriptors.len() > 1 {
                    let paths = descriptors
                        .iter()
                        .map(|d| d.path.clone())
                        .collect::<Vec<String>>();
                    return Err(DetectError::ambiguous_project(&paths));
                }
                Ok(descriptors.first())
            }
        }
    }
}

/// Detector settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectOptions {
    /// Exact target framework value that counts as a match
    pub target_framework: String,
    pub selection: SelectionPolicy,
    pub port_extraction: PortExtraction,
}

impl Default for DetectOptions {
    fn default() -> Self {
        Self {
            target_framework: DOTNET_CORE_5.into(),
            selection: SelectionPolicy::default(),
            port_extraction: PortExtraction::default(),
        }
    }
}

/// Outcome of a scan.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Detection {
    /// Whether the selected descriptor targets the wanted framework
    pub detected: bool,
    pub config: ConfigInfo,
    /// Every descriptor found, in walk order
    pub descriptors: Vec<ProjectDescriptor>,
}

pub struct DotNetDetector<'a> {
    options: DetectOptions,
    reporter: &'a dyn Reporter,
}

impl<'a> DotNetDetector<'a> {
    pub fn new(options: DetectOptions, reporter: &'a dyn Reporter) -> Self {
        Self { options, reporter }
    }

    /// Scan `root` and report whether it holds a project targeting the
    /// configured framework.
    ///
    /// A missing or unreadable root is reported and treated as a tree with
    /// no descriptors. The only error returned is an ambiguous tree under
    /// [`SelectionPolicy::Unique`].
    pub fn detect(&self, root: &Path) -> Result<Detection> {
        let descriptors = self.find_descriptors(root);

        let mut config = ConfigInfo::default();

        if let Some(descriptor) = self.options.selection.select(&descriptors)? {
            config.version = descriptor.version.clone();
            config.path = descriptor.path.clone();
            config.app_name = descriptor.app_name.clone();
        }

        if config.version != self.options.target_framework {
            self.reporter.debug(&format!(
                "Target framework {:?} does not match {:?}",
                config.version, self.options.target_framework
            ));

            return Ok(Detection {
                detected: false,
                config,
                descriptors,
            });
        }

        self.read_launch_settings(root, &mut config);

        Ok(Detection {
            detected: true,
            config,
            descriptors,
        })
    }

    /// Load every project descriptor under `root` in walk order.
    pub fn find_descriptors(&self, root: &Path) -> Vec<ProjectDescriptor> {
        self.files(root, CSPROJ_EXT)
            .iter()
            .map(|file| ProjectDescriptor::load(root, file, self.reporter))
            .collect()
    }

    fn read_launch_settings(&self, root: &Path, config: &mut ConfigInfo) {
        let settings_file = Some(OsStr::new(LAUNCH_SETTINGS_FILE));
        let settings_files = self
            .files(root, JSON_EXT)
            .into_iter()
            .filter(|f| f.file_name() == settings_file);

        for file in settings_files {
            let content = match fs::read_to_string(&file) {
                Ok(content) => content,
                Err(e) => {
                    self.reporter.debug(&format!(
                        "Failed to read {}: {e}",
                        file.display()
                    ));
                    continue;
                }
            };

            let settings = match LaunchSettings::parse(&content) {
                Ok(settings) => settings,
                Err(e) => {
                    self.reporter.debug(&format!(
                        "Failed to parse {}: {e}",
                        file.display()
                    ));
                    continue;
                }
            };

            let Some(urls) = settings.application_urls(&config.app_name) else {
                self.reporter.debug(&format!(
                    "No applicationUrl for profile {:?} in {}",
                    config.app_name,
                    file.display()
                ));
                continue;
            };

            for url in urls {
                match ports::parse_port(url, self.options.port_extraction) {
                    Some((Scheme::Https, port)) => config.https_port = port,
                    Some((Scheme::Http, port)) => config.http_port = port,
                    None => {
                        self.reporter
                            .debug(&format!("No port read from url {url:?}"));
                    }
                }
            }

            config.ports.push(config.http_port);
        }
    }

    fn files(&self, root: &Path, ext: &str) -> Vec<PathBuf> {
        match scanner::files_by_ext(root, &[ext], self.reporter) {
            Ok(files) => files,
            Err(e) => {
                self.reporter.debug(&format!(
                    "Treating {} as empty: {e}",
                    root.display()
                ));
                vec![]
            }
        }
    }
}
