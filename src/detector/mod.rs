// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Discovery of JDKs installed on the local machine.

mod parse;
mod probe;

pub use parse::{FEATURES, ParsedInstallation, parse_installation, read_release_file};
pub use probe::{JavaProbe, PROBE_TIMEOUT, ProcessProbe};

use crate::models::{CanonicalValue, OperatingSystem, PackageType};
use crate::platform::{HostPlatform, java_executable_name};
use crate::version::VersionNumber;
use log::{debug, trace};
use std::collections::HashSet;
use std::env;
use std::ffi::OsStr;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A JDK found on disk, or described by an update-check descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedInstallation {
    /// Catalog token of the distribution, empty when unknown.
    pub distribution: String,
    pub version: VersionNumber,
    pub operating_system: Option<OperatingSystem>,
    pub architecture: String,
    pub package_type: Option<PackageType>,
    pub javafx_bundled: bool,
    pub feature: Option<String>,
    pub in_use: bool,
    pub path: PathBuf,
}

impl fmt::Display for DetectedInstallation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.in_use {
            write!(f, "*")?;
        }
        write!(
            f,
            "{},{},{},{}",
            self.distribution,
            self.version.reduced(),
            self.operating_system.map_or("", |os| os.api_string()),
            self.architecture
        )?;
        if self.javafx_bundled {
            write!(f, ",fx")?;
        }
        if let Some(feature) = &self.feature {
            write!(f, ",{feature}")?;
        }
        write!(f, " ({})", self.path.display())
    }
}

/// Walks search paths for `bin/java` and probes every hit.
pub struct Detector {
    search_paths: Vec<PathBuf>,
    host: HostPlatform,
    probe: Box<dyn JavaProbe>,
    active_paths: Vec<PathBuf>,
}

impl Detector {
    pub fn new(search_paths: Vec<PathBuf>, host: HostPlatform) -> Self {
        Self {
            search_paths,
            host,
            probe: Box::new(ProcessProbe::default()),
            active_paths: active_java_paths(),
        }
    }

    pub fn with_probe(mut self, probe: Box<dyn JavaProbe>) -> Self {
        self.probe = probe;
        self
    }

    /// Replaces the paths used to decide whether an installation is in use.
    pub fn with_active_paths(mut self, active_paths: Vec<PathBuf>) -> Self {
        self.active_paths = active_paths;
        self
    }

    /// Every installation that answered the probe, ordered by path.
    pub fn detect(&self) -> Vec<DetectedInstallation> {
        let mut installations: Vec<DetectedInstallation> = self
            .java_executables()
            .iter()
            .filter_map(|java| self.inspect(java))
            .collect();

        installations.sort_by(|a, b| a.path.cmp(&b.path));
        debug!("Detected {} installations", installations.len());
        installations
    }

    fn java_executables(&self) -> Vec<PathBuf> {
        let java_name = java_executable_name();
        let mut seen = HashSet::new();
        let mut executables = Vec::new();

        for root in &self.search_paths {
            if !root.is_dir() {
                debug!("Skipping missing search path {}", root.display());
                continue;
            }

            for entry in WalkDir::new(root)
                .follow_links(true)
                .into_iter()
                .filter_map(|entry| entry.ok())
            {
                let path = entry.path();
                if !entry.file_type().is_file() || entry.file_name() != java_name.as_str() {
                    continue;
                }
                if path.parent().and_then(Path::file_name) != Some(OsStr::new("bin")) {
                    continue;
                }
                let relative = path.strip_prefix(root).unwrap_or(path);
                if relative.to_string_lossy().contains("jre") {
                    trace!("Skipping runtime image {}", path.display());
                    continue;
                }

                // Symlinked homes lead to the same executable more than once
                let canonical = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
                if seen.insert(canonical) {
                    executables.push(path.to_path_buf());
                }
            }
        }

        executables
    }

    fn inspect(&self, java: &Path) -> Option<DetectedInstallation> {
        let home = java.parent()?.parent()?;
        let lines = self.probe.version_output(java)?;

        let parsed = match parse_installation(&lines, home) {
            Ok(parsed) => parsed,
            Err(e) => {
                debug!("Skipping {}: {e}", java.display());
                return None;
            }
        };

        let architecture = parsed.architecture.unwrap_or_else(|| {
            self.host
                .architecture
                .map(|arch| arch.api_string().to_string())
                .unwrap_or_default()
        });

        Some(DetectedInstallation {
            distribution: parsed.distribution,
            version: parsed.version,
            operating_system: self.host.operating_system,
            architecture,
            package_type: None,
            javafx_bundled: parsed.javafx_bundled,
            feature: parsed.feature,
            in_use: self.is_in_use(home),
            path: home.to_path_buf(),
        })
    }

    fn is_in_use(&self, home: &Path) -> bool {
        let home = fs::canonicalize(home).unwrap_or_else(|_| home.to_path_buf());
        self.active_paths.iter().any(|active| active.starts_with(&home))
    }
}

/// `JAVA_HOME` and the `java` executable found on `PATH`, resolved.
pub fn active_java_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(java_home) = env::var_os("JAVA_HOME").filter(|value| !value.is_empty()) {
        paths.push(PathBuf::from(java_home));
    }
    if let Ok(java) = which::which("java") {
        paths.push(java);
    }

    paths
        .into_iter()
        .map(|path| fs::canonicalize(&path).unwrap_or(path))
        .collect()
}
