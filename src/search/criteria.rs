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

use crate::config::DiscoConfig;
use crate::error::{DiscoError, Result};
use crate::models::{
    Architecture, ArchiveType, Distribution, FieldKind, LibCType, OperatingSystem, PackageType,
    normalize,
};
use crate::platform::HostPlatform;
use crate::version::VersionNumber;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Resolve exactly one package and download it.
    Download,
    /// List every package matching partial criteria.
    Find,
    /// List newer builds of an installed major version.
    UpdateCheck,
}

/// Criteria as typed by the user, before normalization.
#[derive(Debug, Clone, Default)]
pub struct RawCriteria {
    pub distribution: Option<String>,
    pub operating_system: Option<String>,
    pub lib_c_type: Option<String>,
    pub architecture: Option<String>,
    pub package_type: Option<String>,
    pub archive_type: Option<String>,
    pub version: Option<String>,
    pub include_ea: bool,
    pub javafx_bundled: bool,
    pub latest_for_version: bool,
}

/// Fallback values for fields the user leaves open.
#[derive(Debug, Clone, Copy)]
pub struct Defaults {
    pub distribution: Distribution,
    pub host: HostPlatform,
}

impl Defaults {
    pub fn new(distribution: Distribution, host: HostPlatform) -> Self {
        Self { distribution, host }
    }

    /// Takes the default distribution from the configuration. A configured
    /// name that is not recognized is an error, not a silent fallback.
    pub fn from_config(config: &DiscoConfig, host: HostPlatform) -> Result<Self> {
        let distribution = config.default_distribution.parse::<Distribution>()?;
        Ok(Self::new(distribution, host))
    }
}

/// Normalized criteria.
///
/// In [`Mode::Find`] a `None` field is unconstrained. In the other modes
/// every enumerated field is resolved, except the archive type of an
/// update check which stays open unless given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Criteria {
    pub mode: Mode,
    pub distribution: Option<Distribution>,
    pub operating_system: Option<OperatingSystem>,
    pub lib_c_type: Option<LibCType>,
    pub architecture: Option<Architecture>,
    pub package_type: Option<PackageType>,
    pub archive_type: Option<ArchiveType>,
    pub version: Option<VersionNumber>,
    pub include_ea: bool,
    pub javafx_bundled: bool,
    pub latest_for_version: bool,
}

impl Criteria {
    /// Early access builds are wanted either explicitly or by asking for an
    /// early access version.
    pub fn wants_early_access(&self) -> bool {
        self.include_ea || self.version.is_some_and(|v| v.is_early_access())
    }
}

impl RawCriteria {
    /// Normalizes every field and applies the defaults of `mode`.
    ///
    /// Text that matches no known value fails with
    /// [`DiscoError::FieldNotFound`] in every mode. Fields left open are
    /// defaulted unless `mode` is [`Mode::Find`].
    pub fn resolve(&self, mode: Mode, defaults: &Defaults) -> Result<Criteria> {
        let distribution = normalize::<Distribution>(self.distribution.as_deref())?;
        let operating_system = normalize::<OperatingSystem>(self.operating_system.as_deref())?;
        let lib_c_type = normalize::<LibCType>(self.lib_c_type.as_deref())?;
        let architecture = normalize::<Architecture>(self.architecture.as_deref())?;
        let package_type = normalize::<PackageType>(self.package_type.as_deref())?;
        let archive_type = normalize::<ArchiveType>(self.archive_type.as_deref())?;
        let version = self
            .version
            .as_deref()
            .map(str::parse::<VersionNumber>)
            .transpose()?;

        if self.latest_for_version && version.is_none() {
            return Err(DiscoError::InvalidModeCombination(
                "--latest requires --version".to_string(),
            ));
        }

        if mode == Mode::Find {
            if distribution.is_none() || version.is_none() {
                return Err(DiscoError::InvalidModeCombination(
                    "--find requires both --distribution and --version".to_string(),
                ));
            }

            return Ok(Criteria {
                mode,
                distribution,
                operating_system,
                lib_c_type,
                architecture,
                package_type,
                archive_type,
                version,
                include_ea: self.include_ea,
                javafx_bundled: self.javafx_bundled,
                latest_for_version: self.latest_for_version,
            });
        }

        let operating_system = operating_system
            .or(defaults.host.operating_system)
            .ok_or(DiscoError::FieldNotFound {
                kind: FieldKind::OperatingSystem,
                input: String::new(),
            })?;

        let criteria = Criteria {
            mode,
            distribution: Some(distribution.unwrap_or(defaults.distribution)),
            operating_system: Some(operating_system),
            lib_c_type: Some(lib_c_type.unwrap_or(operating_system.lib_c_type())),
            architecture: Some(architecture.unwrap_or(Architecture::DEFAULT)),
            package_type: Some(package_type.unwrap_or(PackageType::DEFAULT)),
            // Update checks accept a newer build in any archive format.
            archive_type: match mode {
                Mode::UpdateCheck => archive_type,
                _ => Some(archive_type.unwrap_or(operating_system.default_archive_type())),
            },
            version,
            include_ea: self.include_ea,
            javafx_bundled: self.javafx_bundled,
            latest_for_version: self.latest_for_version,
        };

        log::debug!("Resolved criteria: {criteria}");
        Ok(criteria)
    }
}

impl fmt::Display for Criteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.distribution {
            Some(distribution) => write!(f, "{distribution}")?,
            None => write!(f, "any distribution")?,
        }
        match self.version {
            Some(version) => write!(f, " {version}")?,
            None => write!(f, " (latest)")?,
        }

        let mut constraints: Vec<String> = Vec::new();
        if let Some(os) = self.operating_system {
            constraints.push(os.to_string());
        }
        if let Some(lib_c_type) = self.lib_c_type {
            constraints.push(lib_c_type.to_string());
        }
        if let Some(architecture) = self.architecture {
            constraints.push(architecture.to_string());
        }
        if let Some(package_type) = self.package_type {
            constraints.push(package_type.to_string());
        }
        if let Some(archive_type) = self.archive_type {
            constraints.push(archive_type.to_string());
        }
        if self.javafx_bundled {
            constraints.push("javafx".to_string());
        }
        if self.wants_early_access() {
            constraints.push("ea".to_string());
        }

        if !constraints.is_empty() {
            write!(f, " ({})", constraints.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linux_defaults() -> Defaults {
        Defaults::new(
            Distribution::Zulu,
            HostPlatform::new(Some(OperatingSystem::Linux), Some(Architecture::Aarch64)),
        )
    }

    #[test]
    fn test_download_defaults() {
        let criteria = RawCriteria::default()
            .resolve(Mode::Download, &linux_defaults())
            .unwrap();

        assert_eq!(criteria.distribution, Some(Distribution::Zulu));
        assert_eq!(criteria.operating_system, Some(OperatingSystem::Linux));
        assert_eq!(criteria.lib_c_type, Some(LibCType::Glibc));
        // the architecture default does not follow the host
        assert_eq!(criteria.architecture, Some(Architecture::X64));
        assert_eq!(criteria.package_type, Some(PackageType::Jdk));
        assert_eq!(criteria.archive_type, Some(ArchiveType::TarGz));
        assert_eq!(criteria.version, None);
        assert!(!criteria.wants_early_access());
    }

    #[test]
    fn test_default_archive_type_follows_operating_system() {
        let raw = RawCriteria {
            operating_system: Some("windows".to_string()),
            ..Default::default()
        };
        let criteria = raw.resolve(Mode::Download, &linux_defaults()).unwrap();
        assert_eq!(criteria.archive_type, Some(ArchiveType::Zip));
        assert_eq!(criteria.lib_c_type, Some(LibCType::CStdLib));

        let raw = RawCriteria {
            operating_system: Some("macos".to_string()),
            ..Default::default()
        };
        let criteria = raw.resolve(Mode::Download, &linux_defaults()).unwrap();
        assert_eq!(criteria.archive_type, Some(ArchiveType::TarGz));
    }

    #[test]
    fn test_explicit_values_win() {
        let raw = RawCriteria {
            distribution: Some("temurin".to_string()),
            architecture: Some("arm64".to_string()),
            package_type: Some("jre".to_string()),
            archive_type: Some("zip".to_string()),
            lib_c_type: Some("musl".to_string()),
            version: Some("17.0.2".to_string()),
            ..Default::default()
        };
        let criteria = raw.resolve(Mode::Download, &linux_defaults()).unwrap();

        assert_eq!(criteria.distribution, Some(Distribution::Temurin));
        assert_eq!(criteria.architecture, Some(Architecture::Aarch64));
        assert_eq!(criteria.package_type, Some(PackageType::Jre));
        assert_eq!(criteria.archive_type, Some(ArchiveType::Zip));
        assert_eq!(criteria.lib_c_type, Some(LibCType::Musl));
        assert_eq!(criteria.version, Some(VersionNumber::new(17, 0, 2, 0)));
    }

    #[test]
    fn test_update_check_leaves_archive_type_open() {
        let raw = RawCriteria {
            distribution: Some("zulu".to_string()),
            operating_system: Some("macos".to_string()),
            version: Some("17.0.1".to_string()),
            ..Default::default()
        };

        let criteria = raw.resolve(Mode::UpdateCheck, &linux_defaults()).unwrap();
        assert_eq!(criteria.archive_type, None);
        assert_eq!(criteria.package_type, Some(PackageType::Jdk));

        let criteria = raw.resolve(Mode::Download, &linux_defaults()).unwrap();
        assert_eq!(criteria.archive_type, Some(ArchiveType::TarGz));
    }

    #[test]
    fn test_unrecognized_input_fails_in_every_mode() {
        for mode in [Mode::Download, Mode::Find, Mode::UpdateCheck] {
            let raw = RawCriteria {
                distribution: Some("definitely-not-a-jdk".to_string()),
                version: Some("17".to_string()),
                ..Default::default()
            };
            let err = raw.resolve(mode, &linux_defaults()).unwrap_err();
            assert!(
                matches!(err, DiscoError::FieldNotFound { kind: FieldKind::Distribution, .. }),
                "{mode:?}: {err:?}"
            );
        }
    }

    #[test]
    fn test_unknown_host_without_os_fails() {
        let defaults = Defaults::new(Distribution::Zulu, HostPlatform::new(None, None));
        let err = RawCriteria::default()
            .resolve(Mode::Download, &defaults)
            .unwrap_err();
        assert!(matches!(
            err,
            DiscoError::FieldNotFound { kind: FieldKind::OperatingSystem, ref input } if input.is_empty()
        ));

        let raw = RawCriteria {
            operating_system: Some("linux".to_string()),
            ..Default::default()
        };
        assert!(raw.resolve(Mode::Download, &defaults).is_ok());
    }

    #[test]
    fn test_find_keeps_unspecified_fields_open() {
        let raw = RawCriteria {
            distribution: Some("zulu".to_string()),
            version: Some("17".to_string()),
            ..Default::default()
        };
        let criteria = raw.resolve(Mode::Find, &linux_defaults()).unwrap();

        assert_eq!(criteria.distribution, Some(Distribution::Zulu));
        assert_eq!(criteria.operating_system, None);
        assert_eq!(criteria.lib_c_type, None);
        assert_eq!(criteria.architecture, None);
        assert_eq!(criteria.package_type, None);
        assert_eq!(criteria.archive_type, None);
    }

    #[test]
    fn test_find_requires_distribution_and_version() {
        let raw = RawCriteria {
            distribution: Some("zulu".to_string()),
            ..Default::default()
        };
        let err = raw.resolve(Mode::Find, &linux_defaults()).unwrap_err();
        assert!(matches!(err, DiscoError::InvalidModeCombination(_)));

        let raw = RawCriteria {
            version: Some("17".to_string()),
            ..Default::default()
        };
        let err = raw.resolve(Mode::Find, &linux_defaults()).unwrap_err();
        assert!(matches!(err, DiscoError::InvalidModeCombination(_)));
    }

    #[test]
    fn test_latest_requires_version() {
        let raw = RawCriteria {
            latest_for_version: true,
            ..Default::default()
        };
        let err = raw.resolve(Mode::Download, &linux_defaults()).unwrap_err();
        assert!(matches!(err, DiscoError::InvalidModeCombination(_)));
    }

    #[test]
    fn test_invalid_version() {
        let raw = RawCriteria {
            version: Some("seventeen".to_string()),
            ..Default::default()
        };
        let err = raw.resolve(Mode::Download, &linux_defaults()).unwrap_err();
        assert!(matches!(err, DiscoError::InvalidVersionFormat(_)));
    }

    #[test]
    fn test_early_access_version_implies_ea() {
        let raw = RawCriteria {
            version: Some("21-ea".to_string()),
            ..Default::default()
        };
        let criteria = raw.resolve(Mode::Download, &linux_defaults()).unwrap();
        assert!(criteria.wants_early_access());
    }

    #[test]
    fn test_defaults_from_config() {
        let mut config = DiscoConfig::default();
        config.default_distribution = "corretto".to_string();
        let defaults = Defaults::from_config(&config, HostPlatform::new(None, None)).unwrap();
        assert_eq!(defaults.distribution, Distribution::Corretto);

        config.default_distribution = "nope".to_string();
        assert!(Defaults::from_config(&config, HostPlatform::new(None, None)).is_err());
    }

    #[test]
    fn test_display() {
        let raw = RawCriteria {
            version: Some("17".to_string()),
            javafx_bundled: true,
            ..Default::default()
        };
        let criteria = raw.resolve(Mode::Download, &linux_defaults()).unwrap();
        assert_eq!(
            criteria.to_string(),
            "zulu 17 (linux, glibc, x64, jdk, tar.gz, javafx)"
        );
    }
}
